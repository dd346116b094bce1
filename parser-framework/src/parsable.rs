use common_framework::error::check_index;
use common_framework::Result;

/// A read-only, position-addressable sequence of elements.
///
/// Implementors supply [`len`](Parsable::len), [`at`](Parsable::at) and
/// [`are_equal`](Parsable::are_equal); every query below is built from those
/// three. Positions are signed: anything outside `[0, len)` is reported as
/// [`Error::IndexOutOfRange`](common_framework::Error::IndexOutOfRange)
/// rather than panicking.
pub trait Parsable {
    /// The "character" type of the sequence.
    type Element: Copy + std::fmt::Debug;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`.
    fn at(&self, index: isize) -> Result<Self::Element>;

    /// Element equality used by all `is_at*` queries.
    fn are_equal(&self, a: &Self::Element, b: &Self::Element) -> bool;

    /// Returns up to `len` elements starting at `start`.
    ///
    /// A request running past the end is clamped, not rejected. `start` itself
    /// must lie in `[0, len())`; `substring(len(), 0)` fails like any other
    /// out-of-range start.
    fn substring(&self, start: isize, len: usize) -> Result<Substring<'_, Self>> {
        let first = check_index(start, self.len())?;
        let end = first.saturating_add(len).min(self.len());
        Ok(Substring::new(self, first, end))
    }

    /// Returns everything from `start` to the end.
    fn substring_from(&self, start: isize) -> Result<Substring<'_, Self>> {
        let first = check_index(start, self.len())?;
        Ok(Substring::new(self, first, self.len()))
    }

    /// Returns true if the element at `position` equals `element`.
    fn is_at(&self, position: isize, element: Self::Element) -> Result<bool> {
        let current = self.at(position)?;
        Ok(self.are_equal(&current, &element))
    }

    /// Returns true if the element at `position` satisfies `predicate`.
    fn is_at_with<F>(&self, position: isize, predicate: F) -> Result<bool>
    where
        F: FnOnce(Self::Element) -> bool,
    {
        self.at(position).map(predicate)
    }

    /// Returns true if `needle` occurs starting at `position`.
    ///
    /// Never fails: a needle that runs outside the sequence simply does not
    /// match. An empty needle always matches.
    fn is_at_seq<I>(&self, position: isize, needle: I) -> bool
    where
        I: IntoIterator<Item = Self::Element>,
    {
        let length = self.len();
        for (offset, expected) in needle.into_iter().enumerate() {
            let index = match position.checked_add(offset as isize) {
                Some(index) if index >= 0 && (index as usize) < length => index,
                _ => return false,
            };
            match self.at(index) {
                Ok(actual) if self.are_equal(&actual, &expected) => {}
                _ => return false,
            }
        }
        true
    }

    /// Applies `predicate` to `substring(position, length)`.
    fn is_at_str<F>(&self, position: isize, predicate: F, length: usize) -> Result<bool>
    where
        F: FnOnce(Substring<'_, Self>) -> bool,
    {
        self.substring(position, length).map(predicate)
    }
}

/// Lazy view of a run of elements from a [`Parsable`].
///
/// A clone continues from the same point as the original; ask the parsable
/// for a new substring to start over.
#[derive(Debug)]
pub struct Substring<'a, P: Parsable + ?Sized> {
    source: &'a P,
    next: usize,
    end: usize,
}

impl<'a, P: Parsable + ?Sized> Substring<'a, P> {
    fn new(source: &'a P, start: usize, end: usize) -> Self {
        Self {
            source,
            next: start,
            end,
        }
    }
}

impl<P: Parsable + ?Sized> Clone for Substring<'_, P> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            next: self.next,
            end: self.end,
        }
    }
}

impl<P: Parsable + ?Sized> Iterator for Substring<'_, P> {
    type Item = P::Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let element = self.source.at(self.next as isize).ok()?;
        self.next += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<P: Parsable + ?Sized> ExactSizeIterator for Substring<'_, P> {}
