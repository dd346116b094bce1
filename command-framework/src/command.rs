use crate::base::CommandBase;
use crate::bridge;
use crate::error::Result;
use futures::future::BoxFuture;
use serde_json::Value;
use std::sync::Arc;

/// An executable command with a synchronous and an asynchronous entry point.
///
/// Implementors override whichever of [`execute`](Command::execute) and
/// [`execute_async`](Command::execute_async) they have; the default of the
/// other one bridges onto it. Overriding neither is allowed and makes both
/// calls fail with [`CommandError::NotImplemented`](crate::CommandError).
///
/// ```
/// use command_framework::{Command, CommandBase, CommandFactory, Result, Value};
/// use std::sync::Arc;
///
/// struct Echo {
///     base: CommandBase,
/// }
///
/// impl Command for Echo {
///     fn base(&self) -> &CommandBase {
///         &self.base
///     }
///
///     fn execute(self: Arc<Self>, params: &[Value]) -> Result<Value> {
///         Ok(Value::Array(params.to_vec()))
///     }
/// }
///
/// let echo = Arc::new(Echo { base: CommandFactory::new().base() });
/// assert_eq!(echo.string_id(), "Echo_00001");
/// ```
pub trait Command: Send + Sync + 'static {
    /// Returns the identity and bridge bookkeeping of this command.
    fn base(&self) -> &CommandBase;

    /// Short type name used in the string id, description and errors.
    fn type_name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }

    fn id(&self) -> i32 {
        self.base().id()
    }

    /// `"{type_name}_{id:05}"`, computed once.
    fn string_id(&self) -> &str {
        self.base().string_id(self.type_name())
    }

    fn description(&self) -> String {
        self.base().description(self.type_name())
    }

    fn description_url(&self) -> Option<String> {
        self.base().description_url()
    }

    /// Runs the command, blocking the calling thread.
    ///
    /// The default blocks on [`execute_async`](Command::execute_async).
    fn execute(self: Arc<Self>, params: &[Value]) -> Result<Value> {
        bridge::execute_through_async(self, params)
    }

    /// Runs the command asynchronously. The future can be polled by any
    /// executor.
    ///
    /// The default runs [`execute`](Command::execute) off the polling thread.
    fn execute_async(self: Arc<Self>, params: Vec<Value>) -> BoxFuture<'static, Result<Value>> {
        bridge::execute_async_through_sync(self, params)
    }
}

/// Strips the module path and generic arguments from a type name.
fn short_type_name(full: &str) -> &str {
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}
