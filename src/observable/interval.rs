use crate::{
  error::{Result, RxError},
  observable::Observable,
  observer::Observer,
  scheduler::spawn_producer,
  subscription::TearDown,
};
use futures::{task::LocalSpawn, StreamExt};
use std::time::Duration;
use tracing::debug;

/// Creates an observable which will fire at `period` time into the future,
/// and will repeat every `period` interval after.
///
/// Emits `0, 1, 2, ...`, never completes and never errors. Every
/// subscription starts its own timer task on `spawner`; unsubscribing aborts
/// it.
///
/// # Errors
///
/// Returns [`RxError::ZeroPeriod`] if `period` is zero.
///
/// ```
/// use futures::executor::LocalPool;
/// use rxlite::prelude::*;
///
/// let mut pool = LocalPool::new();
/// observable::interval::<_, ()>(Duration::from_millis(1), pool.spawner())
///   .unwrap()
///   .take(3)
///   .subscribe_next(|v| println!("{}", v));
/// pool.run();
/// ```
pub fn interval<S, Err>(period: Duration, spawner: S) -> Result<Observable<usize, Err>>
where
  S: LocalSpawn + 'static,
  Err: 'static,
{
  if period.is_zero() {
    return Err(RxError::ZeroPeriod);
  }
  Ok(Observable::new(move |mut observer| {
    let task = async move {
      let ticks = futures_time::stream::interval(period.into()).enumerate();
      futures::pin_mut!(ticks);
      while let Some((seq, _)) = ticks.next().await {
        if observer.is_closed() {
          break;
        }
        observer.next(seq);
      }
    };
    debug!("interval: starting a {:?} timer", period);
    let abort = spawn_producer("interval", &spawner, task);
    TearDown::new(move || {
      debug!("interval: stopping timer");
      abort.call();
    })
  }))
}
