//! Helpers shared by the unit tests.

use crate::{
  observable::Observable,
  observer::Observer,
  subscriber::Subscriber,
  subscription::TearDown,
};
use std::{
  cell::{Cell, RefCell},
  rc::Rc,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<Item, Err> {
  Next(Item),
  Error(Err),
  Complete,
}

/// Observer recording every notification it receives, in order.
pub struct Recorder<Item, Err>(Rc<RefCell<Vec<Event<Item, Err>>>>);

impl<Item, Err> Default for Recorder<Item, Err> {
  fn default() -> Self { Recorder(Rc::new(RefCell::new(vec![]))) }
}

impl<Item, Err> Clone for Recorder<Item, Err> {
  fn clone(&self) -> Self { Recorder(self.0.clone()) }
}

impl<Item: Clone, Err: Clone> Recorder<Item, Err> {
  pub fn events(&self) -> Vec<Event<Item, Err>> { self.0.borrow().clone() }

  pub fn nexts(&self) -> Vec<Item> {
    self
      .0
      .borrow()
      .iter()
      .filter_map(|e| match e {
        Event::Next(v) => Some(v.clone()),
        _ => None,
      })
      .collect()
  }

  pub fn errors(&self) -> usize {
    self.0.borrow().iter().filter(|e| matches!(e, Event::Error(_))).count()
  }

  pub fn completions(&self) -> usize {
    self.0.borrow().iter().filter(|e| matches!(e, Event::Complete)).count()
  }
}

impl<Item, Err> Observer<Item, Err> for Recorder<Item, Err> {
  fn next(&mut self, value: Item) { self.0.borrow_mut().push(Event::Next(value)) }

  fn error(&mut self, err: Err) { self.0.borrow_mut().push(Event::Error(err)) }

  fn complete(&mut self) { self.0.borrow_mut().push(Event::Complete) }
}

/// A source driven by hand from the test body. It keeps the subscriber of
/// every subscription and counts how many times its teardown ran.
pub struct ManualSource<Item, Err> {
  subscribers: Rc<RefCell<Vec<Subscriber<Item, Err>>>>,
  teardowns: Rc<Cell<usize>>,
}

impl<Item, Err> Default for ManualSource<Item, Err> {
  fn default() -> Self {
    ManualSource {
      subscribers: Rc::new(RefCell::new(vec![])),
      teardowns: Rc::new(Cell::new(0)),
    }
  }
}

impl<Item: 'static, Err: 'static> ManualSource<Item, Err> {
  pub fn observable(&self) -> Observable<Item, Err> {
    let subscribers = self.subscribers.clone();
    let teardowns = self.teardowns.clone();
    Observable::new(move |subscriber| {
      subscribers.borrow_mut().push(subscriber);
      let teardowns = teardowns.clone();
      TearDown::new(move || teardowns.set(teardowns.get() + 1))
    })
  }

  pub fn next(&self, value: Item)
  where
    Item: Clone,
  {
    for mut s in self.snapshot() {
      s.next(value.clone());
    }
  }

  pub fn error(&self, err: Err)
  where
    Err: Clone,
  {
    for mut s in self.snapshot() {
      s.error(err.clone());
    }
  }

  pub fn complete(&self) {
    for mut s in self.snapshot() {
      s.complete();
    }
  }

  pub fn teardowns(&self) -> usize { self.teardowns.get() }

  pub fn subscriptions(&self) -> usize { self.subscribers.borrow().len() }

  fn snapshot(&self) -> Vec<Subscriber<Item, Err>> { self.subscribers.borrow().clone() }
}
