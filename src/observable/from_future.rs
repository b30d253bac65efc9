use crate::{
  observable::Observable,
  observer::Observer,
  scheduler::spawn_producer,
};
use futures::{task::LocalSpawn, Future, FutureExt};

/// Converts a `Future` of a `Result` to an observable: `Ok` is emitted as a
/// value followed by completion, `Err` is emitted as an error.
///
/// Like a promise, the future runs at most once and every subscription
/// observes its single result. Each subscription waits for it in a task
/// spawned on `spawner`; unsubscribing cancels that task, so nothing reaches
/// an observer that has already left.
///
/// ```
/// use futures::{executor::LocalPool, future};
/// use rxlite::prelude::*;
///
/// let mut pool = LocalPool::new();
/// observable::from_future(future::ready(Ok::<_, ()>(1)), pool.spawner())
///   .subscribe_next(|v| println!("{}", v));
/// pool.run();
/// ```
pub fn from_future<Fut, Item, Err, S>(future: Fut, spawner: S) -> Observable<Item, Err>
where
  Fut: Future<Output = Result<Item, Err>> + 'static,
  Item: Clone + 'static,
  Err: Clone + 'static,
  S: LocalSpawn + 'static,
{
  let result = future.shared();
  Observable::new(move |mut observer| {
    let result = result.clone();
    let task = async move {
      let result = result.await;
      if observer.is_closed() {
        return;
      }
      match result {
        Ok(value) => {
          observer.next(value);
          observer.complete();
        }
        Err(err) => observer.error(err),
      }
    };
    spawn_producer("from_future", &spawner, task)
  })
}
