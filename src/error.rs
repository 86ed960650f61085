//! Error types shared across the crate.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by wrappers, the scheduler and configuration loading.
///
/// The collection helpers themselves are infallible; only operations with a
/// genuine failure mode return [`CollResult`].
#[derive(Debug, Error)]
pub enum CollError {
    /// The wrapped function panicked during its only permitted invocation.
    #[error("wrapped function panicked during its first invocation; wrapper is spent")]
    WrapperSpent,

    /// `delay` was called on a scheduler that has been shut down.
    #[error("scheduler has been stopped")]
    SchedulerStopped,

    /// The scheduler worker thread could not be started.
    #[error("failed to spawn scheduler worker: {0}")]
    SchedulerSpawn(#[source] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for fallible collkit operations.
pub type CollResult<T> = Result<T, CollError>;
