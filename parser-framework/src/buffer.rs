use crate::parsable::Parsable;
use crate::slice::ElementSlice;
use common_framework::error::check_index;
use common_framework::{DefaultEq, ElementEq, Result};
use std::sync::Arc;

/// The standard [`Parsable`]: an owned, immutable buffer of elements.
///
/// The buffer is shared behind an `Arc`, so cloning a `ParsableBuffer` (for
/// example to hand it to a second parser) never copies the elements.
#[derive(Debug, Clone)]
pub struct ParsableBuffer<E, Q = DefaultEq> {
    data: Arc<[E]>,
    eq: Q,
}

impl<E> ParsableBuffer<E, DefaultEq> {
    /// Creates a buffer that compares elements with `PartialEq`.
    pub fn new<D: Into<Arc<[E]>>>(data: D) -> Self {
        Self {
            data: data.into(),
            eq: DefaultEq,
        }
    }
}

impl<E, Q> ParsableBuffer<E, Q> {
    /// Replaces the element equality, keeping the same data.
    pub fn with_eq<Q2>(self, eq: Q2) -> ParsableBuffer<E, Q2> {
        ParsableBuffer {
            data: self.data,
            eq,
        }
    }

    /// Returns the elements as a plain slice.
    pub fn as_slice(&self) -> &[E] {
        &self.data
    }

    /// Zero-copy counterpart of [`Parsable::substring`], with the same bounds
    /// and clamping rules.
    pub fn slice(&self, start: isize, len: usize) -> Result<ElementSlice<E>> {
        let first = check_index(start, self.data.len())?;
        let end = first.saturating_add(len).min(self.data.len());
        Ok(ElementSlice::new(Arc::clone(&self.data), first..end))
    }
}

impl<E, Q> Parsable for ParsableBuffer<E, Q>
where
    E: Copy + std::fmt::Debug,
    Q: ElementEq<E>,
{
    type Element = E;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn at(&self, index: isize) -> Result<E> {
        let index = check_index(index, self.data.len())?;
        Ok(self.data[index])
    }

    fn are_equal(&self, a: &E, b: &E) -> bool {
        self.eq.are_equal(a, b)
    }
}

impl From<&str> for ParsableBuffer<char> {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl From<String> for ParsableBuffer<char> {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl<E> From<Vec<E>> for ParsableBuffer<E> {
    fn from(data: Vec<E>) -> Self {
        Self::new(data)
    }
}

impl<E> FromIterator<E> for ParsableBuffer<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}
