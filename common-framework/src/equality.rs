//! Element equality used by parsables.
//!
//! Parsables never compare elements with `==` directly; they go through an
//! [`ElementEq`] so callers can choose e.g. case-insensitive matching.

/// Decides whether two elements are equal.
pub trait ElementEq<E> {
    fn are_equal(&self, a: &E, b: &E) -> bool;
}

/// Plain `PartialEq` comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEq;

impl<E: PartialEq> ElementEq<E> for DefaultEq {
    #[inline]
    fn are_equal(&self, a: &E, b: &E) -> bool {
        a == b
    }
}

/// ASCII case-insensitive comparison for `char` and `u8` elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IgnoreAsciiCase;

impl ElementEq<char> for IgnoreAsciiCase {
    #[inline]
    fn are_equal(&self, a: &char, b: &char) -> bool {
        a.eq_ignore_ascii_case(b)
    }
}

impl ElementEq<u8> for IgnoreAsciiCase {
    #[inline]
    fn are_equal(&self, a: &u8, b: &u8) -> bool {
        a.eq_ignore_ascii_case(b)
    }
}

impl<E, F> ElementEq<E> for F
where
    F: Fn(&E, &E) -> bool,
{
    #[inline]
    fn are_equal(&self, a: &E, b: &E) -> bool {
        self(a, b)
    }
}
