use crate::base::CommandBase;
use crate::error::{CommandError, Result};
use crate::generic::{async_fn, sync_fn, AsyncFn, GenericCommand, Implementation, SyncFn};
use common_framework::IdSequence;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::future::Future;

static GLOBAL: Lazy<CommandFactory> = Lazy::new(CommandFactory::new);

/// Builds commands and owns the sequence their ids come from.
///
/// Ids are unique per factory. Use [`CommandFactory::global`] when commands
/// from unrelated places must never share an id.
#[derive(Debug, Default)]
pub struct CommandFactory {
    ids: IdSequence,
}

impl CommandFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory whose first command gets `first_id`.
    pub fn with_start(first_id: i32) -> Self {
        Self {
            ids: IdSequence::starting_at(first_id),
        }
    }

    /// The process-wide factory, created on first use.
    pub fn global() -> &'static CommandFactory {
        &GLOBAL
    }

    /// Allocates a fresh id and wraps it in a [`CommandBase`].
    ///
    /// # Panics
    ///
    /// Panics once the factory's ids are exhausted; see
    /// [`try_base`](Self::try_base).
    pub fn base(&self) -> CommandBase {
        let base = CommandBase::new(self.ids.next_id());
        log::debug!("allocated command id {}", base.id());
        base
    }

    /// Like [`base`](Self::base), reporting [`CommandError::Ids`] instead of
    /// panicking when no id is left.
    pub fn try_base(&self) -> Result<CommandBase> {
        let base = CommandBase::new(self.ids.try_next_id()?);
        log::debug!("allocated command id {}", base.id());
        Ok(base)
    }

    pub fn from_parts(&self, sync: Option<SyncFn>, asynchronous: Option<AsyncFn>) -> GenericCommand {
        let implementation = Implementation::from_parts(sync, asynchronous);
        log::debug!("building {:?} command", implementation);
        GenericCommand::new(self.base(), implementation)
    }

    fn try_from_parts(
        &self,
        sync: Option<SyncFn>,
        asynchronous: Option<AsyncFn>,
    ) -> Result<GenericCommand> {
        let implementation = Implementation::from_parts(sync, asynchronous);
        log::debug!("building {:?} command", implementation);
        Ok(GenericCommand::new(self.try_base()?, implementation))
    }

    /// A command backed by a synchronous closure.
    pub fn sync<F>(&self, f: F) -> GenericCommand
    where
        F: Fn(&[Value]) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.from_parts(Some(sync_fn(f)), None)
    }

    /// A command backed by an async closure.
    pub fn asynchronous<F, Fut>(&self, f: F) -> GenericCommand
    where
        F: Fn(Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Value>> + Send + 'static,
    {
        self.from_parts(None, Some(async_fn(f)))
    }

    /// A command with both paths supplied; each call uses its own path.
    pub fn both<S, A, Fut>(&self, sync: S, asynchronous: A) -> GenericCommand
    where
        S: Fn(&[Value]) -> anyhow::Result<Value> + Send + Sync + 'static,
        A: Fn(Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Value>> + Send + 'static,
    {
        self.from_parts(Some(sync_fn(sync)), Some(async_fn(asynchronous)))
    }

    /// A command with no implementation. Every call fails with
    /// [`CommandError::NotImplemented`].
    pub fn unimplemented(&self) -> GenericCommand {
        self.from_parts(None, None)
    }

    /// Like [`sync`](Self::sync), for delegates resolved at runtime. Id
    /// exhaustion is reported rather than panicking.
    pub fn try_sync(&self, f: Option<SyncFn>) -> Result<GenericCommand> {
        let f = f.ok_or(CommandError::ArgumentNull { name: "execute" })?;
        self.try_from_parts(Some(f), None)
    }

    /// Like [`asynchronous`](Self::asynchronous), for delegates resolved at
    /// runtime.
    pub fn try_async(&self, f: Option<AsyncFn>) -> Result<GenericCommand> {
        let f = f.ok_or(CommandError::ArgumentNull {
            name: "execute_async",
        })?;
        self.try_from_parts(None, Some(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Command;

    #[test]
    fn test_factory_ids_are_sequential() {
        let factory = CommandFactory::with_start(10);
        let a = factory.unimplemented();
        let b = factory.sync(|_| Ok(Value::Null));
        assert_eq!(a.id(), 10);
        assert_eq!(b.id(), 11);
    }

    #[test]
    fn test_factories_are_independent() {
        let a = CommandFactory::new();
        let b = CommandFactory::new();
        assert_eq!(a.base().id(), b.base().id());
    }

    #[test]
    fn test_global_factory_never_repeats() {
        let first = CommandFactory::global().base().id();
        let second = CommandFactory::global().base().id();
        assert!(second > first);
    }

    #[test]
    fn test_try_sync_rejects_missing_delegate() {
        let factory = CommandFactory::new();
        let err = factory.try_sync(None).unwrap_err();
        assert!(matches!(err, CommandError::ArgumentNull { name: "execute" }));
        assert!(factory.try_sync(Some(sync_fn(|_| Ok(Value::Null)))).is_ok());
    }

    #[test]
    fn test_try_async_rejects_missing_delegate() {
        let factory = CommandFactory::new();
        let err = factory.try_async(None).unwrap_err();
        assert!(matches!(
            err,
            CommandError::ArgumentNull {
                name: "execute_async"
            }
        ));
    }

    #[test]
    fn test_exhausted_factory_reports_error() {
        let factory = CommandFactory::with_start(i32::MAX);
        assert_eq!(factory.try_base().map(|base| base.id()).ok(), Some(i32::MAX));

        let err = factory.try_base().unwrap_err();
        assert!(matches!(
            err,
            CommandError::Ids(common_framework::Error::IdsExhausted { last: i32::MAX })
        ));
        let err = factory.try_sync(Some(sync_fn(|_| Ok(Value::Null)))).unwrap_err();
        assert!(matches!(err, CommandError::Ids(_)));
    }

    #[test]
    fn test_from_parts_picks_variant() {
        let factory = CommandFactory::new();
        let cmd = factory.from_parts(None, Some(async_fn(|_| async { Ok(Value::Null) })));
        assert!(matches!(cmd.implementation(), Implementation::Async(_)));
        assert!(!factory.unimplemented().implementation().is_implemented());
    }
}
