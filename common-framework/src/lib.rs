//! Common Framework
//!
//! 提供 parser-framework 和 command-framework 之间的共同组件。

pub mod equality;
pub mod error;
pub mod id;
pub mod state;

pub use equality::{DefaultEq, ElementEq, IgnoreAsciiCase};
pub use error::{Error, Result};
pub use id::IdSequence;
pub use state::{ParseState, ParserState};
