//! Error type for the fallible parts of rxlite.
//!
//! Errors produced by a running stream never show up here: they travel to the
//! observer through `Observer::error`. `RxError` only covers failures that
//! happen before or outside a stream, such as an invalid constructor argument
//! or an executor refusing a task.

use futures::task::SpawnError;

/// Root error type for rxlite construction and task spawning.
#[derive(Debug, thiserror::Error)]
pub enum RxError {
  /// A repeating timer was asked to tick every zero seconds.
  #[error("interval period must be greater than zero")]
  ZeroPeriod,

  /// The executor refused the task, typically because it was shut down.
  #[error("failed to spawn task: {0}")]
  Spawn(#[from] SpawnError),
}

/// Convenience alias for results carrying an [`RxError`].
pub type Result<T> = std::result::Result<T, RxError>;
