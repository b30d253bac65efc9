//! `fork_join`: wait for N sources to complete and emit their last values
//! together.

use crate::{
  observable::Observable,
  observer::Observer,
  subscriber::Subscriber,
  subscription::{Subscription, TearDown},
};
use std::{cell::RefCell, rc::Rc};
use tracing::{debug, trace};

/// Subscribes to every source at once and, when all of them have completed,
/// emits one `Vec` with a slot per source, in the order the sources were
/// given, then completes. A slot holds the last value of its source, or
/// `None` if that source completed without emitting.
///
/// - The first error from any source is forwarded, every other source is
///   unsubscribed, and nothing else is emitted afterwards.
/// - Every source is subscribed, even after an earlier one failed
///   synchronously; such late subscriptions are torn down right away.
/// - With no sources, emits an empty `Vec` and completes immediately.
///
/// ```
/// use rxlite::prelude::*;
///
/// let a = observable::of::<_, ()>("a");
/// let b = observable::empty();
/// observable::fork_join_all(vec![a, b]).subscribe_next(|v| assert_eq!(v, vec![Some("a"), None]));
/// ```
pub fn fork_join_all<I, Item, Err>(sources: I) -> Observable<Vec<Option<Item>>, Err>
where
  I: IntoIterator<Item = Observable<Item, Err>>,
  Item: 'static,
  Err: 'static,
{
  let sources: Rc<[Observable<Item, Err>]> = sources.into_iter().collect();
  Observable::new(move |mut observer| {
    if sources.is_empty() {
      debug!("fork_join: no sources, completing with an empty result");
      observer.next(vec![]);
      observer.complete();
      return TearDown::noop();
    }

    let state = Rc::new(RefCell::new(JoinState::new(sources.len())));
    let children = Subscription::default();
    trace!("fork_join: subscribing {} sources", sources.len());
    for (index, source) in sources.iter().enumerate() {
      let slot = JoinSlot {
        index,
        state: state.clone(),
        children: children.clone(),
        observer: observer.clone(),
      };
      // Once the join has failed, `children` is closed and this unsubscribes
      // the new source immediately.
      children.add(source.subscribe(slot));
    }

    TearDown::new(move || {
      trace!("fork_join: tearing down sources");
      children.unsubscribe();
    })
  })
}

/// Like [`fork_join_all`], but emits the last values themselves.
///
/// When a source completes without emitting there is nothing to put in its
/// slot, so the join completes without emitting a value.
///
/// Two sources are just `fork_join(vec![a, b])`.
///
/// ```
/// use rxlite::prelude::*;
///
/// let a = observable::of::<_, ()>("a");
/// let b = observable::from_iter(vec!["x", "b"]);
/// observable::fork_join(vec![a, b]).subscribe_next(|v| assert_eq!(v, vec!["a", "b"]));
/// ```
pub fn fork_join<I, Item, Err>(sources: I) -> Observable<Vec<Item>, Err>
where
  I: IntoIterator<Item = Observable<Item, Err>>,
  Item: 'static,
  Err: 'static,
{
  fork_join_all(sources).lift(|observer| FilledSlots { observer })
}

/// Forwards a joined buffer only when every slot is filled.
struct FilledSlots<Item, Err> {
  observer: Subscriber<Vec<Item>, Err>,
}

impl<Item, Err> Observer<Vec<Option<Item>>, Err> for FilledSlots<Item, Err> {
  fn next(&mut self, slots: Vec<Option<Item>>) {
    match slots.into_iter().collect::<Option<Vec<_>>>() {
      Some(values) => self.observer.next(values),
      None => debug!("fork_join: a source completed without a value"),
    }
  }

  fn error(&mut self, err: Err) { self.observer.error(err) }

  fn complete(&mut self) { self.observer.complete() }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

/// Per-subscription buffer: one slot per source, last value wins.
struct JoinState<Item> {
  slots: Vec<Option<Item>>,
  completed: usize,
  done: bool,
}

impl<Item> JoinState<Item> {
  fn new(len: usize) -> Self {
    JoinState {
      slots: (0..len).map(|_| None).collect(),
      completed: 0,
      done: false,
    }
  }
}

/// The observer subscribed to the source at `index`.
struct JoinSlot<Item, Err> {
  index: usize,
  state: Rc<RefCell<JoinState<Item>>>,
  children: Subscription,
  observer: Subscriber<Vec<Option<Item>>, Err>,
}

impl<Item, Err> Observer<Item, Err> for JoinSlot<Item, Err> {
  fn next(&mut self, value: Item) {
    let mut state = self.state.borrow_mut();
    if !state.done {
      state.slots[self.index] = Some(value);
    }
  }

  fn error(&mut self, err: Err) {
    {
      let mut state = self.state.borrow_mut();
      if state.done {
        return;
      }
      state.done = true;
      state.slots.clear();
    }
    debug!("fork_join: source {} failed, cancelling the others", self.index);
    self.children.unsubscribe();
    self.observer.error(err);
  }

  fn complete(&mut self) {
    let joined = {
      let mut state = self.state.borrow_mut();
      if state.done {
        return;
      }
      state.completed += 1;
      if state.completed < state.slots.len() {
        return;
      }
      state.done = true;
      std::mem::take(&mut state.slots)
    };
    debug!("fork_join: all {} sources completed", joined.len());
    self.observer.next(joined);
    self.observer.complete();
  }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
