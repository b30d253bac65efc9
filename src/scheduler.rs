//! Running asynchronous producers on a local executor.
//!
//! Sources such as `interval` and `from_future` do their work in a task
//! spawned on any `futures::task::LocalSpawn` (e.g.
//! `futures::executor::LocalPool::spawner()`). The task is wrapped in
//! `Abortable` so that the subscription teardown can cancel it.

use crate::{error::Result, subscription::TearDown};
use futures::{
  future::{AbortHandle, Abortable},
  task::{LocalSpawn, LocalSpawnExt},
  Future,
};
use tracing::error;

/// Spawns `task` on `spawner` and returns the handle aborting it.
pub fn spawn_abortable<S, F>(spawner: &S, task: F) -> Result<AbortHandle>
where
  S: LocalSpawn + ?Sized,
  F: Future<Output = ()> + 'static,
{
  let (handle, registration) = AbortHandle::new_pair();
  let task = Abortable::new(task, registration);
  spawner.spawn_local(async move {
    // An aborted task has nothing left to report.
    let _ = task.await;
  })?;
  Ok(handle)
}

/// Spawns the task of a producer and returns the teardown aborting it.
///
/// A spawn failure cannot reach the observer, whose error type is the
/// stream's own, so it is logged and the producer stays silent.
pub(crate) fn spawn_producer<S, F>(name: &str, spawner: &S, task: F) -> TearDown
where
  S: LocalSpawn + ?Sized,
  F: Future<Output = ()> + 'static,
{
  match spawn_abortable(spawner, task) {
    Ok(handle) => TearDown::new(move || handle.abort()),
    Err(err) => {
      error!("{}: {}", name, err);
      TearDown::noop()
    }
  }
}
