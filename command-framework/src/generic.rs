use crate::base::CommandBase;
use crate::bridge;
use crate::command::Command;
use crate::error::{CommandError, Result};
use futures::future::{self, BoxFuture, FutureExt};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// A synchronous command body.
pub type SyncFn = Arc<dyn Fn(&[Value]) -> anyhow::Result<Value> + Send + Sync>;

/// An asynchronous command body.
pub type AsyncFn = Arc<dyn Fn(Vec<Value>) -> BoxFuture<'static, anyhow::Result<Value>> + Send + Sync>;

/// Wraps a closure as a [`SyncFn`].
pub fn sync_fn<F>(f: F) -> SyncFn
where
    F: Fn(&[Value]) -> anyhow::Result<Value> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wraps an async closure as an [`AsyncFn`].
pub fn async_fn<F, Fut>(f: F) -> AsyncFn
where
    F: Fn(Vec<Value>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<Value>> + Send + 'static,
{
    Arc::new(move |params| f(params).boxed())
}

/// Which execution paths a [`GenericCommand`] was given.
#[derive(Clone)]
pub enum Implementation {
    Sync(SyncFn),
    Async(AsyncFn),
    Both(SyncFn, AsyncFn),
    Neither,
}

impl Implementation {
    pub fn from_parts(sync: Option<SyncFn>, asynchronous: Option<AsyncFn>) -> Self {
        match (sync, asynchronous) {
            (Some(s), Some(a)) => Implementation::Both(s, a),
            (Some(s), None) => Implementation::Sync(s),
            (None, Some(a)) => Implementation::Async(a),
            (None, None) => Implementation::Neither,
        }
    }

    pub fn is_implemented(&self) -> bool {
        !matches!(self, Implementation::Neither)
    }

    fn kind(&self) -> &'static str {
        match self {
            Implementation::Sync(_) => "Sync",
            Implementation::Async(_) => "Async",
            Implementation::Both(..) => "Both",
            Implementation::Neither => "Neither",
        }
    }
}

impl fmt::Debug for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// A command assembled from delegates instead of a dedicated type.
///
/// No guard bookkeeping is needed here: the [`Implementation`] says up front
/// which path is real, so a missing path bridges straight to the other one
/// and `Neither` fails on the first call.
#[derive(Debug)]
pub struct GenericCommand {
    base: CommandBase,
    implementation: Implementation,
    type_name: Option<Cow<'static, str>>,
}

impl GenericCommand {
    pub fn new(base: CommandBase, implementation: Implementation) -> Self {
        Self {
            base,
            implementation,
            type_name: None,
        }
    }

    /// Reports `name` instead of `GenericCommand` in ids, descriptions and
    /// errors. Set it before the string id is first read.
    pub fn with_type_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.type_name = Some(name.into());
        self
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.base.set_description(description);
        self
    }

    pub fn with_description_url(self, url: impl Into<String>) -> Self {
        self.base.set_description_url(url);
        self
    }

    pub fn implementation(&self) -> &Implementation {
        &self.implementation
    }

    fn unimplemented(&self) -> CommandError {
        log::warn!("{} was built without any delegate", self.string_id());
        CommandError::not_implemented(self.type_name())
    }
}

impl Command for GenericCommand {
    fn base(&self) -> &CommandBase {
        &self.base
    }

    fn type_name(&self) -> &str {
        self.type_name.as_deref().unwrap_or("GenericCommand")
    }

    fn execute(self: Arc<Self>, params: &[Value]) -> Result<Value> {
        match &self.implementation {
            Implementation::Sync(f) | Implementation::Both(f, _) => Ok(f(params)?),
            Implementation::Async(f) => {
                log::trace!("{}: execute bridged onto async delegate", self.string_id());
                let future = f(params.to_vec());
                bridge::block_on(async move { Ok(future.await?) })
            }
            Implementation::Neither => Err(self.unimplemented()),
        }
    }

    fn execute_async(self: Arc<Self>, params: Vec<Value>) -> BoxFuture<'static, Result<Value>> {
        match &self.implementation {
            Implementation::Async(f) | Implementation::Both(_, f) => {
                let future = f(params);
                async move { Ok(future.await?) }.boxed()
            }
            Implementation::Sync(f) => {
                log::trace!("{}: execute_async offloading sync delegate", self.string_id());
                let f = Arc::clone(f);
                bridge::offload(move || Ok(f(params.as_slice())?)).boxed()
            }
            Implementation::Neither => future::ready(Err(self.unimplemented())).boxed(),
        }
    }
}
