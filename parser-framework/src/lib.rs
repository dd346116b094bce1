pub mod buffer;
pub mod parsable;
pub mod parser;
pub mod slice;

pub use buffer::ParsableBuffer;
pub use common_framework::{
    DefaultEq, ElementEq, Error, IgnoreAsciiCase, ParseState, ParserState, Result,
};
pub use parsable::{Parsable, Substring};
pub use parser::{ElementOf, ElementParser, Parser};
pub use slice::ElementSlice;
