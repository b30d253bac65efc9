use crate::{
  observable::Observable,
  observer::Observer,
  subscriber::Subscriber,
  subscription::TearDown,
};

/// Emits only the first `count` values emitted by the source Observable.
///
/// If the source emits fewer than `count` values then all of its values are
/// emitted. After the `count`-th value it completes, regardless of the
/// source, and cancels the source.
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::from_iter::<_, ()>(0..).take(5).subscribe_next(|v| println!("{}", v));
///
/// // print logs:
/// // 0
/// // 1
/// // 2
/// // 3
/// // 4
/// ```
pub fn take<Item, Err>(count: usize) -> impl Fn(Observable<Item, Err>) -> Observable<Item, Err>
where
  Item: 'static,
  Err: 'static,
{
  move |source: Observable<Item, Err>| {
    if count == 0 {
      return Observable::new(|mut observer: Subscriber<Item, Err>| {
        observer.complete();
        TearDown::noop()
      });
    }
    source.lift(move |observer| TakeObserver { observer, remaining: count })
  }
}

pub struct TakeObserver<Item, Err> {
  observer: Subscriber<Item, Err>,
  remaining: usize,
}

impl<Item, Err> Observer<Item, Err> for TakeObserver<Item, Err> {
  fn next(&mut self, value: Item) {
    if self.remaining == 0 {
      return;
    }
    self.remaining -= 1;
    self.observer.next(value);
    if self.remaining == 0 {
      self.observer.complete();
    }
  }

  #[inline]
  fn error(&mut self, err: Err) { self.observer.error(err) }

  #[inline]
  fn complete(&mut self) { self.observer.complete() }

  fn is_closed(&self) -> bool { self.remaining == 0 || self.observer.is_closed() }
}
