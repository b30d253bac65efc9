//! The `Observable` type and its creation functions.
//!
//! An `Observable` is a recipe: nothing runs until `subscribe` is called, and
//! every call runs the producer again from scratch with its own `Subscriber`
//! and `Subscription`.

use crate::{
  observer::{Observer, ObserverAll},
  ops,
  subscriber::Subscriber,
  subscription::{Subscription, TearDown},
};
use std::rc::Rc;
use tracing::trace;

mod fork_join;
mod from_future;
mod from_iter;
#[cfg(feature = "timer")]
mod interval;
mod of;
mod trivial;

pub use fork_join::{fork_join, fork_join_all};
pub use from_future::from_future;
pub use from_iter::from_iter;
#[cfg(feature = "timer")]
pub use interval::interval;
pub use of::of;
pub use trivial::{empty, never, throw_err};

type Producer<Item, Err> = dyn Fn(Subscriber<Item, Err>) -> TearDown;

/// An operator that keeps the item and error types, boxed so that a list of
/// them can be folded by [`Observable::pipe_all`].
pub type BoxOperator<Item, Err> = Box<dyn Fn(Observable<Item, Err>) -> Observable<Item, Err>>;

/// A representation of any set of values over any amount of time. This is the
/// most basic building block of rxlite.
pub struct Observable<Item, Err> {
  producer: Rc<Producer<Item, Err>>,
}

/// Creates an observable from a producer function, see [`Observable::new`].
pub fn create<Item, Err, F>(producer: F) -> Observable<Item, Err>
where
  F: Fn(Subscriber<Item, Err>) -> TearDown + 'static,
{
  Observable::new(producer)
}

impl<Item, Err> Clone for Observable<Item, Err> {
  fn clone(&self) -> Self { Observable { producer: self.producer.clone() } }
}

impl<Item, Err> Observable<Item, Err> {
  /// param `producer`: the function that is called every time the Observable
  /// is subscribed to. It is given a Subscriber, to which new values can be
  /// `next`ed, or an `error` method can be called to raise an error, or
  /// `complete` can be called to notify of a successful completion. It returns
  /// the teardown releasing whatever it started.
  pub fn new<F>(producer: F) -> Self
  where
    F: Fn(Subscriber<Item, Err>) -> TearDown + 'static,
  {
    Observable { producer: Rc::new(producer) }
  }

  /// Runs the producer for `observer` and returns the handle cancelling it.
  ///
  /// When the producer terminates synchronously, its teardown runs before
  /// this returns.
  pub fn subscribe<O>(&self, observer: O) -> Subscription
  where
    O: Observer<Item, Err> + 'static,
  {
    let subscription = Subscription::default();
    let subscriber = Subscriber::new(observer, subscription.clone());
    let teardown = (self.producer)(subscriber);
    subscription.add_teardown(teardown);
    subscription
  }

  pub fn subscribe_next<N>(&self, next: N) -> Subscription
  where
    N: FnMut(Item) + 'static,
    Item: 'static,
    Err: 'static,
  {
    self.subscribe(ObserverAll::new(next, |_: Err| {}, || {}))
  }

  pub fn subscribe_err<N, E>(&self, next: N, error: E) -> Subscription
  where
    N: FnMut(Item) + 'static,
    E: FnMut(Err) + 'static,
    Item: 'static,
    Err: 'static,
  {
    self.subscribe(ObserverAll::new(next, error, || {}))
  }

  pub fn subscribe_complete<N, C>(&self, next: N, complete: C) -> Subscription
  where
    N: FnMut(Item) + 'static,
    C: FnMut() + 'static,
    Item: 'static,
    Err: 'static,
  {
    self.subscribe(ObserverAll::new(next, |_: Err| {}, complete))
  }

  pub fn subscribe_all<N, E, C>(&self, next: N, error: E, complete: C) -> Subscription
  where
    N: FnMut(Item) + 'static,
    E: FnMut(Err) + 'static,
    C: FnMut() + 'static,
    Item: 'static,
    Err: 'static,
  {
    self.subscribe(ObserverAll::new(next, error, complete))
  }

  /// Applies one operator, leaving `self` untouched. Chain calls, or use the
  /// [`pipe!`](crate::pipe) macro, to apply several in order.
  #[inline]
  pub fn pipe<U, E2, Op>(&self, op: Op) -> Observable<U, E2>
  where
    Op: FnOnce(Self) -> Observable<U, E2>,
  {
    op(self.clone())
  }

  /// Folds a list of same-typed operators over `self`, left to right.
  pub fn pipe_all<I>(&self, ops: I) -> Self
  where
    I: IntoIterator<Item = BoxOperator<Item, Err>>,
  {
    ops.into_iter().fold(self.clone(), |source, op| op(source))
  }

  /// The template of every unary operator.
  ///
  /// The returned Observable subscribes to `self` with the observer `make`
  /// builds around the downstream subscriber, and its teardown unsubscribes
  /// from `self`.
  pub fn lift<U, E2, O, F>(&self, make: F) -> Observable<U, E2>
  where
    F: Fn(Subscriber<U, E2>) -> O + 'static,
    O: Observer<Item, Err> + 'static,
    Item: 'static,
    Err: 'static,
  {
    let source = self.clone();
    Observable::new(move |subscriber| {
      trace!("subscribing to upstream");
      let upstream = source.subscribe(make(subscriber));
      TearDown::new(move || {
        trace!("unsubscribing from upstream");
        upstream.unsubscribe();
      })
    })
  }
}

impl<Item: 'static, Err: 'static> Observable<Item, Err> {
  /// See [`ops::map_to`].
  pub fn map_to<V>(&self, value: V) -> Observable<V, Err>
  where
    V: Clone + 'static,
  {
    self.pipe(ops::map_to(value))
  }

  /// See [`ops::map`].
  pub fn map<U, F>(&self, f: F) -> Observable<U, Err>
  where
    F: Fn(Item) -> U + 'static,
    U: 'static,
  {
    self.pipe(ops::map(f))
  }

  /// See [`ops::map_err`].
  pub fn map_err<E2, F>(&self, f: F) -> Observable<Item, E2>
  where
    F: Fn(Err) -> E2 + 'static,
    E2: 'static,
  {
    self.pipe(ops::map_err(f))
  }

  /// See [`ops::take`].
  pub fn take(&self, count: usize) -> Self { self.pipe(ops::take(count)) }

  /// See [`ops::finalize`].
  pub fn finalize<F>(&self, f: F) -> Self
  where
    F: Fn() + 'static,
  {
    self.pipe(ops::finalize(f))
  }
}

/// Applies operators to a source in order: `pipe!(source, a, b)` is
/// `source.pipe(a).pipe(b)`.
///
/// ```
/// use rxlite::{ops::map_to, pipe, prelude::*};
///
/// let source = observable::from_iter::<_, ()>(vec![1, 2, 3]);
/// pipe!(source, map_to("Hello"), map_to("World"))
///   .subscribe_next(|v| println!("{}", v));
/// ```
#[macro_export]
macro_rules! pipe {
  ($source:expr $(, $op:expr)* $(,)?) => {
    $source $(.pipe($op))*
  };
}
