use crate::{observable::Observable, observer::Observer, subscriber::Subscriber};
use std::rc::Rc;

/// Converts the error of the source with `f`, leaving values and completion
/// untouched.
///
/// Typically used to bring sources with different error types to the same
/// one before joining them.
pub fn map_err<Item, Err, E2, F>(f: F) -> impl Fn(Observable<Item, Err>) -> Observable<Item, E2>
where
  F: Fn(Err) -> E2 + 'static,
  Item: 'static,
  Err: 'static,
  E2: 'static,
{
  let f = Rc::new(f);
  move |source: Observable<Item, Err>| {
    let f = f.clone();
    source.lift(move |observer| MapErrObserver { observer, f: f.clone() })
  }
}

pub struct MapErrObserver<F, Item, E2> {
  observer: Subscriber<Item, E2>,
  f: Rc<F>,
}

impl<Item, Err, E2, F> Observer<Item, Err> for MapErrObserver<F, Item, E2>
where
  F: Fn(Err) -> E2,
{
  #[inline]
  fn next(&mut self, value: Item) { self.observer.next(value) }

  #[inline]
  fn error(&mut self, err: Err) { self.observer.error((self.f)(err)) }

  #[inline]
  fn complete(&mut self) { self.observer.complete() }

  #[inline]
  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
