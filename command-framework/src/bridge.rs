//! Running one execution path on top of the other.
//!
//! `block_on` parks the calling thread until a future completes; `offload`
//! moves a synchronous call off the polling thread (tokio's blocking pool when
//! a runtime is present, a dedicated thread otherwise). The guarded variants
//! are what the default [`Command`] methods use.

use crate::command::Command;
use crate::error::{CommandError, Result};
use crate::guard::Direction;
use futures::channel::oneshot;
use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::{Builder, Handle, RuntimeFlavor};

/// Blocks the current thread until `future` completes.
///
/// Inside a multi-thread runtime the worker is handed off with
/// `block_in_place`. A current-thread runtime cannot be blocked from its only
/// thread, so the future is driven on a scoped helper thread. Outside any
/// runtime a private current-thread runtime is built for the call.
pub fn block_on<F>(future: F) -> Result<Value>
where
    F: Future<Output = Result<Value>> + Send,
{
    match Handle::try_current() {
        Ok(handle) if matches!(handle.runtime_flavor(), RuntimeFlavor::MultiThread) => {
            log::trace!("blocking on async path via block_in_place");
            tokio::task::block_in_place(|| handle.block_on(future))
        }
        Ok(_) => {
            log::trace!("blocking on async path from a current-thread runtime");
            std::thread::scope(|scope| {
                scope
                    .spawn(move || block_on_private_runtime(future))
                    .join()
                    .map_err(|_| CommandError::TaskFailed("bridging thread panicked".into()))?
            })
        }
        Err(_) => block_on_private_runtime(future),
    }
}

fn block_on_private_runtime<F>(future: F) -> Result<Value>
where
    F: Future<Output = Result<Value>>,
{
    let runtime = Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(future)
}

/// Runs `call` off the polling thread and waits for it without blocking the
/// calling task.
///
/// Inside a tokio runtime the call goes to the blocking pool. Any other
/// executor gets a dedicated thread whose result comes back over a oneshot
/// channel. A panicking call is reported as [`CommandError::TaskFailed`].
pub async fn offload<F>(call: F) -> Result<Value>
where
    F: FnOnce() -> Result<Value> + Send + 'static,
{
    if Handle::try_current().is_ok() {
        return tokio::task::spawn_blocking(call)
            .await
            .map_err(|err| CommandError::TaskFailed(err.to_string()))?;
    }

    log::trace!("no tokio runtime, offloading to a dedicated thread");
    let (sender, receiver) = oneshot::channel();
    std::thread::Builder::new()
        .name("command-offload".into())
        .spawn(move || {
            // the receiver may be gone if the future was dropped
            let _ = sender.send(call());
        })?;
    receiver
        .await
        .map_err(|_| CommandError::TaskFailed("offload thread panicked".into()))?
}

/// Default `execute`: waits on `execute_async`, refusing if `execute_async`
/// is itself bridging back into `execute`.
pub fn execute_through_async<C>(command: Arc<C>, params: &[Value]) -> Result<Value>
where
    C: Command + ?Sized,
{
    let _ticket = match command.base().guard().enter(Direction::SyncToAsync) {
        Some(ticket) => ticket,
        None => return Err(refuse(&*command)),
    };
    let future = Arc::clone(&command).execute_async(params.to_vec());
    block_on(future)
}

/// Default `execute_async`: offloads `execute`, refusing if `execute` is
/// itself bridging into `execute_async`.
pub fn execute_async_through_sync<C>(
    command: Arc<C>,
    params: Vec<Value>,
) -> BoxFuture<'static, Result<Value>>
where
    C: Command + ?Sized,
{
    async move {
        let _ticket = match command.base().guard().enter(Direction::AsyncToSync) {
            Some(ticket) => ticket,
            None => return Err(refuse(&*command)),
        };
        let worker = Arc::clone(&command);
        let result: Result<Value> = offload(move || worker.execute(&params)).await;
        result
    }
    .boxed()
}

fn refuse<C: Command + ?Sized>(command: &C) -> CommandError {
    log::warn!(
        "{} has no implementation of either execution path",
        command.string_id()
    );
    CommandError::not_implemented(command.type_name())
}
