use std::fmt;
use std::ops::{Deref, Range};
use std::sync::Arc;

/// Elements cut out of a [`ParsableBuffer`](crate::ParsableBuffer) by
/// [`slice`](crate::ParsableBuffer::slice).
///
/// No elements are copied: the slice holds on to the buffer's storage, so it
/// stays valid after the buffer itself is dropped. Read it as a `[E]`, or
/// walk it with [`iter`](Self::iter) as often as needed.
#[derive(Clone, Debug)]
pub struct ElementSlice<E> {
    data: Arc<[E]>,
    range: Range<usize>,
}

impl<E> ElementSlice<E> {
    /// `range` must already be clamped to `data`.
    pub(crate) fn new(data: Arc<[E]>, range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end && range.end <= data.len());
        Self { data, range }
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

impl<E: Copy> ElementSlice<E> {
    /// Iterates the elements by value.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, E>> {
        self.deref().iter().copied()
    }
}

impl<E> Deref for ElementSlice<E> {
    type Target = [E];

    fn deref(&self) -> &[E] {
        &self.data[self.range.clone()]
    }
}

impl<E> AsRef<[E]> for ElementSlice<E> {
    fn as_ref(&self) -> &[E] {
        self
    }
}

impl fmt::Display for ElementSlice<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|ch| write!(f, "{}", ch))
    }
}

impl PartialEq<&str> for ElementSlice<char> {
    fn eq(&self, other: &&str) -> bool {
        self.iter().eq(other.chars())
    }
}

impl PartialEq<ElementSlice<char>> for &str {
    fn eq(&self, other: &ElementSlice<char>) -> bool {
        other == self
    }
}

// Compares contents, not which buffer or offset they came from.
impl<E: PartialEq> PartialEq for ElementSlice<E> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<E: Eq> Eq for ElementSlice<E> {}
