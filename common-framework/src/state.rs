/// The mutable part of a parse session.
///
/// A parser owns exactly one state. States are cloned to take a checkpoint and
/// copied back with [`ParseState::copy_from`] to restore it, which lets richer
/// states (e.g. carrying a nesting depth) plug into the same parser.
pub trait ParseState: Clone + std::fmt::Debug {
    /// Returns the cursor position. Not validated.
    fn position(&self) -> isize;

    /// Moves the cursor. Any value is accepted; out-of-range positions only
    /// fail when an element is read there.
    fn set_position(&mut self, position: isize);

    /// Overwrites this state with the contents of `other`.
    fn copy_from(&mut self, other: &Self);
}

/// The default parser state: a signed cursor position.
///
/// The position is signed so callers can step before the start of the input
/// without a failing setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParserState {
    position: isize,
}

impl ParserState {
    /// Creates a state at position 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state at the given position.
    pub fn at(position: isize) -> Self {
        Self { position }
    }
}

impl ParseState for ParserState {
    fn position(&self) -> isize {
        self.position
    }

    fn set_position(&mut self, position: isize) {
        self.position = position;
    }

    fn copy_from(&mut self, other: &Self) {
        self.position = other.position;
    }
}
