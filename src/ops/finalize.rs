use crate::{observable::Observable, subscription::TearDown};
use std::rc::Rc;

/// Calls `f` once the subscription ends, whichever way it ends: the source
/// completes, the source errors, or the consumer unsubscribes.
///
/// `f` runs after the terminal notification was delivered downstream.
pub fn finalize<Item, Err, F>(f: F) -> impl Fn(Observable<Item, Err>) -> Observable<Item, Err>
where
  F: Fn() + 'static,
  Item: 'static,
  Err: 'static,
{
  let f = Rc::new(f);
  move |source: Observable<Item, Err>| {
    let f = f.clone();
    Observable::new(move |observer| {
      let upstream = source.subscribe(observer);
      let f = f.clone();
      TearDown::new(move || {
        upstream.unsubscribe();
        f();
      })
    })
  }
}
