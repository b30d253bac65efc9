use smallvec::SmallVec;
use std::{
  cell::RefCell,
  fmt::{Debug, Formatter},
  rc::Rc,
};

/// A one-shot action releasing whatever a subscription allocated.
///
/// A `TearDown` is consumed when it runs, so it can never run twice.
#[must_use]
pub struct TearDown(Action);

enum Action {
  Noop,
  Call(Box<dyn FnOnce()>),
  Unsubscribe(Subscription),
}

impl TearDown {
  pub fn new(f: impl FnOnce() + 'static) -> Self { TearDown(Action::Call(Box::new(f))) }

  /// A teardown for producers that started nothing to release.
  pub fn noop() -> Self { TearDown(Action::Noop) }

  pub fn call(self) {
    match self.0 {
      Action::Noop => {}
      Action::Call(f) => f(),
      Action::Unsubscribe(subscription) => subscription.unsubscribe(),
    }
  }

  fn is_closed(&self) -> bool {
    match &self.0 {
      Action::Noop => true,
      Action::Call(_) => false,
      Action::Unsubscribe(subscription) => subscription.is_closed(),
    }
  }
}

impl From<Subscription> for TearDown {
  fn from(subscription: Subscription) -> Self { TearDown(Action::Unsubscribe(subscription)) }
}

impl Debug for TearDown {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let kind = match &self.0 {
      Action::Noop => "noop",
      Action::Call(_) => "call",
      Action::Unsubscribe(_) => "unsubscribe",
    };
    f.debug_tuple("TearDown").field(&kind).finish()
  }
}

/// Subscription returns from `Observable::subscribe` to allow unsubscribing.
///
/// It owns an ordered list of teardowns: the producer's own teardown and any
/// child subscriptions added to it. Clones share the same list, so cancelling
/// through any clone cancels them all.
#[derive(Clone, Default)]
pub struct Subscription(Rc<RefCell<Inner>>);

impl Subscription {
  pub fn new(teardown: TearDown) -> Self {
    let subscription = Subscription::default();
    subscription.add_teardown(teardown);
    subscription
  }

  /// Unsubscribes `child` when this subscription is unsubscribed. A
  /// subscription is never added to itself.
  pub fn add(&self, child: Subscription) {
    if !Rc::ptr_eq(&self.0, &child.0) {
      self.add_teardown(child.into())
    }
  }

  /// Queues `teardown`, or runs it right away if this subscription is already
  /// closed.
  pub fn add_teardown(&self, teardown: TearDown) {
    let mut inner = self.0.borrow_mut();
    if inner.closed {
      drop(inner);
      teardown.call();
    } else {
      inner.teardown.retain(|t| !t.is_closed());
      inner.teardown.push(teardown);
    }
  }

  /// This allows deregistering a stream before it has finished receiving all
  /// events (i.e. before `complete` is called).
  ///
  /// Every queued teardown runs once, in insertion order. The list is
  /// detached before the first one runs, so re-entrant or repeated calls are
  /// no-ops.
  pub fn unsubscribe(&self) {
    let teardown = {
      let mut inner = self.0.borrow_mut();
      if inner.closed {
        return;
      }
      inner.closed = true;
      std::mem::take(&mut inner.teardown)
    };
    for t in teardown {
      t.call();
    }
  }

  #[inline]
  pub fn is_closed(&self) -> bool { self.0.borrow().closed }

  pub fn teardown_size(&self) -> usize { self.0.borrow().teardown.len() }

  /// Activates "RAII" behavior for this subscription. That means
  /// `unsubscribe()` will be called automatically as soon as the returned
  /// value goes out of scope.
  ///
  /// **Attention:** If you don't assign the return value to a variable,
  /// `unsubscribe()` is called immediately, which is probably not what you
  /// want!
  pub fn unsubscribe_when_dropped(self) -> SubscriptionGuard { SubscriptionGuard::new(self) }
}

impl Debug for Subscription {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let inner = self.0.borrow();
    f.debug_struct("Subscription")
      .field("closed", &inner.closed)
      .field("teardown_count", &inner.teardown.len())
      .finish()
  }
}

#[derive(Default)]
struct Inner {
  closed: bool,
  teardown: SmallVec<[TearDown; 1]>,
}

/// An RAII implementation of a "scoped subscribed" of a subscription.
/// When this structure is dropped (falls out of scope), the subscription will
/// be unsubscribed.
///
/// If you want to drop it immediately, wrap it in its own scope
#[derive(Debug)]
#[must_use]
pub struct SubscriptionGuard(Option<Subscription>);

impl SubscriptionGuard {
  pub fn new(subscription: Subscription) -> Self { SubscriptionGuard(Some(subscription)) }

  /// Gives the subscription back without unsubscribing it.
  pub fn into_inner(mut self) -> Subscription { self.0.take().unwrap_or_default() }
}

impl Drop for SubscriptionGuard {
  #[inline]
  fn drop(&mut self) {
    if let Some(subscription) = self.0.take() {
      subscription.unsubscribe()
    }
  }
}
