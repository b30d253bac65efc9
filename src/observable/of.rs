use crate::{observable::Observable, observer::Observer, subscription::TearDown};

/// Creates an observable producing multiple values.
///
/// Completes immediately after emitting the values given. Never emits an
/// error. The expressions are evaluated again for every subscription.
///
/// # Examples
///
/// ```
/// use rxlite::{of_sequence, prelude::*};
///
/// let numbers: Observable<i32, ()> = of_sequence!(1, 2, 3);
/// numbers.subscribe_next(|v| println!("{},", v));
///
/// // print log:
/// // 1
/// // 2
/// // 3
/// ```
#[macro_export]
macro_rules! of_sequence {
  ( $( $item:expr ),* $(,)? ) => {
    $crate::observable::create(|mut s| {
      $(
        $crate::observer::Observer::next(&mut s, $item);
      )*
      $crate::observer::Observer::complete(&mut s);
      $crate::subscription::TearDown::noop()
    })
  };
}

/// Creates an observable producing a single value.
///
/// Completes immediately after emitting the value given. Never emits an error.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::of::<_, ()>(123).subscribe_next(|v| println!("{},", v));
/// ```
pub fn of<Item, Err>(v: Item) -> Observable<Item, Err>
where
  Item: Clone + 'static,
  Err: 'static,
{
  Observable::new(move |mut observer| {
    observer.next(v.clone());
    observer.complete();
    TearDown::noop()
  })
}
