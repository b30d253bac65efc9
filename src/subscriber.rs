use crate::{
  observer::{BoxedObserver, Observer},
  subscription::Subscription,
};
use std::{
  cell::{Cell, RefCell},
  collections::VecDeque,
  rc::Rc,
};

/// Implements the Observer trait on top of the consumer's observer. While the
/// Observer is the public API for consuming the values of an Observable, all
/// Observers get converted to a Subscriber, in order to provide Subscription
/// capabilities.
///
/// A producer receives one `Subscriber` per subscription and may clone it
/// into timer or task callbacks. Once the subscription is closed, or after
/// the first `error`/`complete`, every further notification is dropped. A
/// terminal notification also unsubscribes the subscription, which runs the
/// producer's teardown.
///
/// Notifications sent while one of the observer's callbacks is still running
/// (for example a `complete` issued from inside `next`) are queued and
/// delivered in order as soon as that callback returns.
pub struct Subscriber<Item, Err> {
  shared: Rc<Shared<Item, Err>>,
  subscription: Subscription,
}

struct Shared<Item, Err> {
  observer: RefCell<Option<BoxedObserver<Item, Err>>>,
  pending: RefCell<VecDeque<Notification<Item, Err>>>,
  stopped: Cell<bool>,
}

enum Notification<Item, Err> {
  Next(Item),
  Error(Err),
  Complete,
}

impl<Item, Err> Subscriber<Item, Err> {
  pub(crate) fn new<O>(observer: O, subscription: Subscription) -> Self
  where
    O: Observer<Item, Err> + 'static,
  {
    Subscriber {
      shared: Rc::new(Shared {
        observer: RefCell::new(Some(Box::new(observer))),
        pending: RefCell::new(VecDeque::new()),
        stopped: Cell::new(false),
      }),
      subscription,
    }
  }

  /// The subscription this subscriber feeds.
  #[inline]
  pub fn subscription(&self) -> &Subscription { &self.subscription }

  pub fn is_closed(&self) -> bool {
    if self.subscription.is_closed() || self.shared.stopped.get() {
      return true;
    }
    // A busy cell means we are inside one of its callbacks, so it is open.
    self
      .shared
      .observer
      .try_borrow()
      .is_ok_and(|observer| observer.as_ref().map_or(true, |o| o.is_closed()))
  }

  fn notify(&self, notification: Notification<Item, Err>) {
    if self.subscription.is_closed() || self.shared.stopped.get() {
      return;
    }
    if !matches!(notification, Notification::Next(_)) {
      self.shared.stopped.set(true);
    }
    self.shared.pending.borrow_mut().push_back(notification);
    self.drain();
  }

  fn drain(&self) {
    // Busy: the callback running further up the stack drains on return.
    let Ok(mut slot) = self.shared.observer.try_borrow_mut() else {
      return;
    };
    while !self.subscription.is_closed() {
      let Some(notification) = self.shared.pending.borrow_mut().pop_front() else {
        return;
      };
      match notification {
        Notification::Next(value) => {
          if let Some(observer) = slot.as_mut() {
            observer.next(value);
          }
        }
        Notification::Error(err) => {
          let observer = slot.take();
          drop(slot);
          self.finish(observer, |o| o.error(err));
          return;
        }
        Notification::Complete => {
          let observer = slot.take();
          drop(slot);
          self.finish(observer, |o| o.complete());
          return;
        }
      }
    }
    self.shared.pending.borrow_mut().clear();
  }

  fn finish<F>(&self, observer: Option<BoxedObserver<Item, Err>>, notify: F)
  where
    F: FnOnce(&mut BoxedObserver<Item, Err>),
  {
    if let Some(mut observer) = observer {
      notify(&mut observer);
    }
    self.subscription.unsubscribe();
  }
}

impl<Item, Err> Clone for Subscriber<Item, Err> {
  fn clone(&self) -> Self {
    Subscriber {
      shared: self.shared.clone(),
      subscription: self.subscription.clone(),
    }
  }
}

impl<Item, Err> Observer<Item, Err> for Subscriber<Item, Err> {
  #[inline]
  fn next(&mut self, value: Item) { self.notify(Notification::Next(value)) }

  #[inline]
  fn error(&mut self, err: Err) { self.notify(Notification::Error(err)) }

  #[inline]
  fn complete(&mut self) { self.notify(Notification::Complete) }

  #[inline]
  fn is_closed(&self) -> bool { Subscriber::is_closed(self) }
}
