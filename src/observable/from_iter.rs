use crate::{observable::Observable, observer::Observer, subscription::TearDown};

/// Creates an observable that produces values from an iterator.
///
/// Completes when all elements have been emitted. Never emits an error. The
/// iterable is cloned for every subscription, so each subscriber sees the
/// whole sequence. Emission stops early once the subscriber is closed, which
/// makes infinite iterators usable together with `take`.
///
/// # Arguments
///
/// * `iter` - An iterator to get all the values from.
///
/// # Examples
///
/// A simple example for a range:
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::from_iter::<_, ()>(0..10).subscribe_next(|v| println!("{},", v));
/// ```
///
/// Or with a vector:
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::from_iter::<_, ()>(vec![0, 1, 2, 3]).subscribe_next(|v| println!("{},", v));
/// ```
pub fn from_iter<Iter, Err>(iter: Iter) -> Observable<Iter::Item, Err>
where
  Iter: IntoIterator + Clone + 'static,
  Err: 'static,
{
  Observable::new(move |mut observer| {
    for v in iter.clone() {
      if observer.is_closed() {
        return TearDown::noop();
      }
      observer.next(v);
    }
    observer.complete();
    TearDown::noop()
  })
}
