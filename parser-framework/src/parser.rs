use crate::parsable::{Parsable, Substring};
use common_framework::{ParseState, ParserState, Result};

/// Element type produced by a parser's source.
pub type ElementOf<P> = <<P as ElementParser>::Source as Parsable>::Element;

/// A query surface over a [`Parsable`] at a caller-controlled position.
///
/// The parser never moves its own cursor. Higher-level grammars read with
/// `next`/`is_next*` and then move the cursor themselves with
/// [`set_position`](ElementParser::set_position).
pub trait ElementParser {
    type Source: Parsable;
    type State: ParseState;

    /// Returns the parsable being read.
    fn parsable(&self) -> &Self::Source;

    /// Returns the current state.
    fn state(&self) -> &Self::State;

    /// Returns the current state mutably.
    fn state_mut(&mut self) -> &mut Self::State;

    fn position(&self) -> isize {
        self.state().position()
    }

    /// Moves the cursor without validation.
    fn set_position(&mut self, position: isize) {
        self.state_mut().set_position(position);
    }

    fn at(&self, index: isize) -> Result<<Self::Source as Parsable>::Element> {
        self.parsable().at(index)
    }

    /// Returns the element under the cursor.
    fn next(&self) -> Result<<Self::Source as Parsable>::Element> {
        self.parsable().at(self.position())
    }

    fn substring(&self, start: isize, len: usize) -> Result<Substring<'_, Self::Source>> {
        self.parsable().substring(start, len)
    }

    fn substring_from(&self, start: isize) -> Result<Substring<'_, Self::Source>> {
        self.parsable().substring_from(start)
    }

    fn is_at(&self, position: isize, element: <Self::Source as Parsable>::Element) -> Result<bool> {
        self.parsable().is_at(position, element)
    }

    fn is_at_with<F>(&self, position: isize, predicate: F) -> Result<bool>
    where
        F: FnOnce(<Self::Source as Parsable>::Element) -> bool,
    {
        self.parsable().is_at_with(position, predicate)
    }

    fn is_at_seq<I>(&self, position: isize, needle: I) -> bool
    where
        I: IntoIterator<Item = <Self::Source as Parsable>::Element>,
    {
        self.parsable().is_at_seq(position, needle)
    }

    fn is_at_str<F>(&self, position: isize, predicate: F, length: usize) -> Result<bool>
    where
        F: FnOnce(Substring<'_, Self::Source>) -> bool,
    {
        self.parsable().is_at_str(position, predicate, length)
    }

    /// [`is_at`](ElementParser::is_at) at the cursor.
    fn is_next(&self, element: <Self::Source as Parsable>::Element) -> Result<bool> {
        self.is_at(self.position(), element)
    }

    fn is_next_with<F>(&self, predicate: F) -> Result<bool>
    where
        F: FnOnce(<Self::Source as Parsable>::Element) -> bool,
    {
        self.is_at_with(self.position(), predicate)
    }

    fn is_next_seq<I>(&self, needle: I) -> bool
    where
        I: IntoIterator<Item = <Self::Source as Parsable>::Element>,
    {
        self.is_at_seq(self.position(), needle)
    }

    fn is_next_str<F>(&self, predicate: F, length: usize) -> Result<bool>
    where
        F: FnOnce(Substring<'_, Self::Source>) -> bool,
    {
        self.is_at_str(self.position(), predicate, length)
    }
}

/// The standard cursor: a parsable plus an exclusively owned state.
///
/// Intended for one parse session on one thread; share the parsable, not the
/// parser.
#[derive(Debug, Clone)]
pub struct Parser<P, S = ParserState>
where
    P: Parsable,
    S: ParseState,
{
    parsable: P,
    state: S,
}

impl<P, S> Parser<P, S>
where
    P: Parsable,
    S: ParseState + Default,
{
    /// Creates a parser positioned at 0.
    pub fn new(parsable: P) -> Self {
        Self::with_state(parsable, S::default())
    }
}

impl<P, S> Parser<P, S>
where
    P: Parsable,
    S: ParseState,
{
    /// Creates a parser starting from the given state.
    pub fn with_state(parsable: P, state: S) -> Self {
        log::trace!(
            "Parser created over {} elements at position {}",
            parsable.len(),
            state.position()
        );
        Self { parsable, state }
    }

    /// Moves the cursor by `delta` elements (`position += delta`).
    pub fn advance_by(&mut self, delta: isize) {
        let position = self.state.position().saturating_add(delta);
        self.state.set_position(position);
    }

    /// Returns true once the cursor is at or past the last element.
    pub fn is_eof(&self) -> bool {
        self.state.position() >= self.parsable.len() as isize
    }

    /// Snapshots the current state.
    pub fn checkpoint(&self) -> S {
        self.state.clone()
    }

    /// Restores a state taken with [`checkpoint`](Self::checkpoint).
    pub fn restore(&mut self, checkpoint: &S) {
        self.state.copy_from(checkpoint);
    }

    /// Moves the cursor back to the beginning.
    pub fn reset(&mut self) {
        self.state.set_position(0);
    }

    /// Splits the parser back into its parsable and state.
    pub fn into_parts(self) -> (P, S) {
        (self.parsable, self.state)
    }
}

impl<P, S> ElementParser for Parser<P, S>
where
    P: Parsable,
    S: ParseState,
{
    type Source = P;
    type State = S;

    fn parsable(&self) -> &P {
        &self.parsable
    }

    fn state(&self) -> &S {
        &self.state
    }

    fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }
}
