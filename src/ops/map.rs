use crate::{observable::Observable, observer::Observer, subscriber::Subscriber};
use std::rc::Rc;

/// Creates a new stream which calls a closure on each element and uses its
/// return as the value.
///
/// ```
/// use rxlite::{ops::map, prelude::*};
///
/// observable::from_iter::<_, ()>(1..4)
///   .pipe(map(|v| v * 10))
///   .subscribe_next(|v| println!("{}", v));
/// ```
pub fn map<Item, Err, U, F>(f: F) -> impl Fn(Observable<Item, Err>) -> Observable<U, Err>
where
  F: Fn(Item) -> U + 'static,
  Item: 'static,
  Err: 'static,
  U: 'static,
{
  let f = Rc::new(f);
  move |source: Observable<Item, Err>| {
    let f = f.clone();
    source.lift(move |observer| MapObserver { observer, f: f.clone() })
  }
}

pub struct MapObserver<F, U, Err> {
  observer: Subscriber<U, Err>,
  f: Rc<F>,
}

impl<Item, Err, U, F> Observer<Item, Err> for MapObserver<F, U, Err>
where
  F: Fn(Item) -> U,
{
  #[inline]
  fn next(&mut self, value: Item) { self.observer.next((self.f)(value)) }

  #[inline]
  fn error(&mut self, err: Err) { self.observer.error(err) }

  #[inline]
  fn complete(&mut self) { self.observer.complete() }

  #[inline]
  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
