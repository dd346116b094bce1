//! Command Framework
//!
//! A command can be written synchronously, asynchronously, both, or not at
//! all; `execute` and `execute_async` are always callable. Whichever side is
//! missing is bridged onto the side that exists, and a command with neither
//! fails with [`CommandError::NotImplemented`] instead of recursing.

pub mod base;
pub mod bridge;
pub mod command;
pub mod error;
pub mod factory;
pub mod generic;
pub mod guard;

pub use base::CommandBase;
pub use command::Command;
pub use error::{CommandError, Result};
pub use factory::CommandFactory;
pub use generic::{async_fn, sync_fn, AsyncFn, GenericCommand, Implementation, SyncFn};
pub use guard::{BridgeGuard, BridgeTicket, Direction};
pub use serde_json::Value;
