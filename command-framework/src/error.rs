//! Command errors

use thiserror::Error;

/// Command result type
pub type Result<T> = std::result::Result<T, CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    /// Neither execution path has a real implementation.
    #[error("{type_name} implements neither Execute nor ExecuteAsync")]
    NotImplemented { type_name: String },

    /// A required delegate was not supplied.
    #[error("argument `{name}` must not be null")]
    ArgumentNull { name: &'static str },

    /// The delegate itself failed.
    #[error(transparent)]
    Failed(#[from] anyhow::Error),

    /// The worker running a bridged call panicked or was cancelled.
    #[error("bridged task failed: {0}")]
    TaskFailed(String),

    /// The factory has run out of ids.
    #[error(transparent)]
    Ids(#[from] common_framework::Error),

    /// A runtime or thread for a bridged call could not be started.
    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

impl CommandError {
    pub fn not_implemented(type_name: impl Into<String>) -> Self {
        CommandError::NotImplemented {
            type_name: type_name.into(),
        }
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, CommandError::NotImplemented { .. })
    }
}
