use crate::{
  observable::Observable,
  observer::Observer,
  subscriber::Subscriber,
  subscription::TearDown,
};
use tracing::debug;

/// Maps every value emitted by the source to the same constant `value`.
///
/// Errors and completion pass through unchanged. The returned operator can be
/// applied to any number of sources.
///
/// ```
/// use rxlite::{ops::map_to, prelude::*};
///
/// observable::from_iter::<_, ()>(0..3)
///   .pipe(map_to("Hello"))
///   .subscribe_next(|v| println!("{}", v));
///
/// // print log:
/// // Hello
/// // Hello
/// // Hello
/// ```
pub fn map_to<Item, Err, V>(value: V) -> impl Fn(Observable<Item, Err>) -> Observable<V, Err>
where
  Item: 'static,
  Err: 'static,
  V: Clone + 'static,
{
  move |source: Observable<Item, Err>| {
    let value = value.clone();
    Observable::new(move |observer| {
      debug!("map_to: subscribe");
      let upstream = source.subscribe(MapToObserver { observer, value: value.clone() });
      TearDown::new(move || {
        debug!("map_to: unsubscribe");
        upstream.unsubscribe();
      })
    })
  }
}

pub struct MapToObserver<V, Err> {
  observer: Subscriber<V, Err>,
  value: V,
}

impl<Item, Err, V> Observer<Item, Err> for MapToObserver<V, Err>
where
  V: Clone,
{
  fn next(&mut self, _: Item) { self.observer.next(self.value.clone()) }

  fn error(&mut self, err: Err) { self.observer.error(err) }

  fn complete(&mut self) { self.observer.complete() }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
