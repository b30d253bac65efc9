//! Integration tests for rxlite
//!
//! Exercises operator chains, cancellation and the asynchronous sources
//! through the public API only.

use std::{
  cell::{Cell, RefCell},
  rc::Rc,
};

use futures::{channel::oneshot, executor::LocalPool, future};
use rxlite::{
  ops::{map, map_to, take},
  pipe,
  prelude::*,
};

#[derive(Debug, Clone, PartialEq)]
enum Event<Item, Err> {
  Next(Item),
  Error(Err),
  Complete,
}

type Log<Item, Err> = Rc<RefCell<Vec<Event<Item, Err>>>>;

fn record<Item: 'static, Err: 'static>(
  source: &Observable<Item, Err>,
) -> (Log<Item, Err>, Subscription) {
  let log: Log<Item, Err> = Rc::new(RefCell::new(vec![]));
  let (n, e, c) = (log.clone(), log.clone(), log.clone());
  let subscription = source.subscribe_all(
    move |v| n.borrow_mut().push(Event::Next(v)),
    move |err| e.borrow_mut().push(Event::Error(err)),
    move || c.borrow_mut().push(Event::Complete),
  );
  (log, subscription)
}

/// A hand-driven source: the test keeps the subscriber and emits into it.
fn manual<Item: 'static, Err: 'static>(
) -> (Observable<Item, Err>, Rc<RefCell<Option<Subscriber<Item, Err>>>>, Rc<Cell<usize>>) {
  let slot = Rc::new(RefCell::new(None));
  let teardowns = Rc::new(Cell::new(0));
  let (c_slot, c_teardowns) = (slot.clone(), teardowns.clone());
  let source = create(move |subscriber| {
    *c_slot.borrow_mut() = Some(subscriber);
    let teardowns = c_teardowns.clone();
    TearDown::new(move || teardowns.set(teardowns.get() + 1))
  });
  (source, slot, teardowns)
}

fn emit<Item, Err>(slot: &RefCell<Option<Subscriber<Item, Err>>>, value: Item) {
  let mut subscriber = slot.borrow().clone();
  if let Some(s) = subscriber.as_mut() {
    s.next(value);
  }
}

fn finish<Item, Err>(slot: &RefCell<Option<Subscriber<Item, Err>>>) {
  let mut subscriber = slot.borrow().clone();
  if let Some(s) = subscriber.as_mut() {
    s.complete();
  }
}

fn fail<Item, Err>(slot: &RefCell<Option<Subscriber<Item, Err>>>, err: Err) {
  let mut subscriber = slot.borrow().clone();
  if let Some(s) = subscriber.as_mut() {
    s.error(err);
  }
}

#[test]
fn cold_semantics() {
  let source = observable::from_iter::<_, ()>(vec![1, 2, 3]);
  let (first, _) = record(&source);
  let (second, _) = record(&source);
  let expected = vec![Event::Next(1), Event::Next(2), Event::Next(3), Event::Complete];
  assert_eq!(*first.borrow(), expected);
  assert_eq!(*second.borrow(), expected);
}

#[test]
fn teardown_is_idempotent() {
  let (source, _slot, teardowns) = manual::<i32, ()>();
  let subscription = source.map(|v| v + 1).take(10).subscribe_next(|_| {});
  for _ in 0..5 {
    subscription.unsubscribe();
  }
  assert_eq!(teardowns.get(), 1);
}

#[test]
fn pipe_is_left_fold() {
  let source = observable::from_iter::<_, ()>(1..=4);
  let (piped, _) = record(&pipe!(source.clone(), map(|v: i32| v * 3), take(2)));
  let (nested, _) = record(&take(2)(map(|v: i32| v * 3)(source)));
  assert_eq!(*piped.borrow(), *nested.borrow());
  assert_eq!(*piped.borrow(), vec![Event::Next(3), Event::Next(6), Event::Complete]);
}

#[test]
fn map_to_replaces_values() {
  let (log, _) = record(&observable::from_iter::<_, ()>(vec![1, 2, 3]).pipe(map_to("x")));
  assert_eq!(
    *log.borrow(),
    vec![Event::Next("x"), Event::Next("x"), Event::Next("x"), Event::Complete]
  );

  let (log, _) = record(&observable::throw_err::<i32, _>("boom").pipe(map_to("x")));
  assert_eq!(*log.borrow(), vec![Event::Error("boom")]);
}

#[test]
fn basic_chain() {
  let (log, _) = record(
    &observable::from_iter::<_, ()>(1..)
      .map(|x| x * 2)
      .map_err(|e| e)
      .take(3),
  );
  assert_eq!(
    *log.borrow(),
    vec![Event::Next(2), Event::Next(4), Event::Next(6), Event::Complete]
  );
}

#[test]
fn join_in_declaration_order() {
  let (a, a_slot, _) = manual::<&str, ()>();
  let (b, b_slot, _) = manual();
  let (c, c_slot, _) = manual();
  let (log, _) = record(&observable::fork_join(vec![a, b, c]));

  emit(&c_slot, "c");
  finish(&c_slot);
  emit(&a_slot, "a");
  finish(&a_slot);
  assert!(log.borrow().is_empty());
  emit(&b_slot, "b");
  finish(&b_slot);

  assert_eq!(*log.borrow(), vec![Event::Next(vec!["a", "b", "c"]), Event::Complete]);
}

#[test]
fn join_error_short_circuits() {
  let (a, a_slot, a_teardowns) = manual::<i32, &str>();
  let (b, b_slot, b_teardowns) = manual();
  let (c, c_slot, c_teardowns) = manual();
  let (log, subscription) = record(&observable::fork_join(vec![a, b, c]));

  emit(&a_slot, 1);
  fail(&b_slot, "second failed");
  emit(&c_slot, 3);
  finish(&c_slot);
  finish(&a_slot);

  assert_eq!(*log.borrow(), vec![Event::Error("second failed")]);
  subscription.unsubscribe();
  assert_eq!(a_teardowns.get(), 1);
  assert_eq!(b_teardowns.get(), 1);
  assert_eq!(c_teardowns.get(), 1);
}

#[test]
fn join_cancellation() {
  let sources: Vec<_> = (0..3).map(|_| manual::<i32, ()>()).collect();
  let (log, subscription) =
    record(&observable::fork_join(sources.iter().map(|(o, _, _)| o.clone())));

  emit(&sources[0].1, 1);
  subscription.unsubscribe();
  subscription.unsubscribe();
  for (_, slot, _) in &sources {
    emit(slot, 2);
    finish(slot);
  }

  assert!(sources.iter().all(|(_, _, teardowns)| teardowns.get() == 1));
  assert!(log.borrow().is_empty());
}

#[test]
fn join_without_sources() {
  let (log, _) = record(&observable::fork_join(Vec::<Observable<u8, ()>>::new()));
  assert_eq!(*log.borrow(), vec![Event::Next(vec![]), Event::Complete]);
}

#[test]
fn join_all_keeps_empty_slots() {
  let (log, _) = record(&observable::fork_join_all(vec![
    observable::of::<_, ()>("a"),
    observable::empty(),
  ]));
  assert_eq!(*log.borrow(), vec![Event::Next(vec![Some("a"), None]), Event::Complete]);
}

#[test]
fn feedback_complete_from_callback() {
  let (source, slot, teardowns) = manual::<i32, ()>();
  let feedback = slot.clone();
  let log = Rc::new(RefCell::new(vec![]));
  let (c_log, d_log) = (log.clone(), log.clone());
  source.subscribe_complete(
    move |v| {
      c_log.borrow_mut().push(Event::<i32, ()>::Next(v));
      finish(&feedback);
    },
    move || d_log.borrow_mut().push(Event::Complete),
  );

  emit(&slot, 1);
  emit(&slot, 2);
  assert_eq!(*log.borrow(), vec![Event::Next(1), Event::Complete]);
  assert_eq!(teardowns.get(), 1);
}

#[test]
fn finalize_once_per_path() {
  let calls = Rc::new(Cell::new(0));
  let counter = || {
    let calls = calls.clone();
    move || calls.set(calls.get() + 1)
  };

  // complete
  let subscription = observable::of::<_, ()>(1).finalize(counter()).subscribe_next(|_| {});
  subscription.unsubscribe();
  assert_eq!(calls.get(), 1);

  // error
  let subscription = observable::throw_err::<i32, _>(()).finalize(counter()).subscribe_next(|_| {});
  subscription.unsubscribe();
  assert_eq!(calls.get(), 2);

  // unsubscribe
  let subscription = observable::never::<i32, ()>().finalize(counter()).subscribe_next(|_| {});
  assert_eq!(calls.get(), 2);
  subscription.unsubscribe();
  subscription.unsubscribe();
  assert_eq!(calls.get(), 3);
}

#[test]
fn interval_take_drains_pool() {
  let mut pool = LocalPool::new();
  let (log, subscription) = record(
    &observable::interval::<_, ()>(Duration::from_millis(1), pool.spawner())
      .unwrap()
      .take(5),
  );
  pool.run();
  assert_eq!(
    *log.borrow(),
    vec![
      Event::Next(0),
      Event::Next(1),
      Event::Next(2),
      Event::Next(3),
      Event::Next(4),
      Event::Complete
    ]
  );
  assert!(subscription.is_closed());
}

#[test]
fn interval_rejects_zero_period() {
  let pool = LocalPool::new();
  let result = observable::interval::<_, ()>(Duration::ZERO, pool.spawner());
  assert!(matches!(result, Err(RxError::ZeroPeriod)));
}

#[test]
fn from_future_paths() {
  let mut pool = LocalPool::new();
  let (ok, _) = record(&observable::from_future(future::ready(Ok::<_, &str>(1)), pool.spawner()));
  let (err, _) = record(&observable::from_future(
    future::ready(Err::<i32, _>("rejected")),
    pool.spawner(),
  ));
  let (tx, rx) = oneshot::channel::<i32>();
  let (gone, subscription) = record(&observable::from_future(rx, pool.spawner()));

  pool.run_until_stalled();
  subscription.unsubscribe();
  let _ = tx.send(3);
  pool.run();

  assert_eq!(*ok.borrow(), vec![Event::Next(1), Event::Complete]);
  assert_eq!(*err.borrow(), vec![Event::Error("rejected")]);
  assert!(gone.borrow().is_empty());
}

#[test]
fn join_async_sources() {
  let mut pool = LocalPool::new();
  let (tx_a, rx_a) = oneshot::channel::<&str>();
  let (tx_b, rx_b) = oneshot::channel::<&str>();
  let joined = observable::fork_join(vec![
    observable::from_future(rx_a, pool.spawner()),
    observable::from_future(rx_b, pool.spawner()),
  ]);
  let (log, _) = record(&joined);

  let _ = tx_b.send("book 2");
  pool.run_until_stalled();
  assert!(log.borrow().is_empty());
  let _ = tx_a.send("book 1");
  pool.run();

  assert_eq!(*log.borrow(), vec![Event::Next(vec!["book 1", "book 2"]), Event::Complete]);
}

#[test]
fn guard_unsubscribes_on_drop() {
  let (source, _slot, teardowns) = manual::<i32, ()>();
  {
    let _guard = source.subscribe_next(|_| {}).unsubscribe_when_dropped();
    assert_eq!(teardowns.get(), 0);
  }
  assert_eq!(teardowns.get(), 1);
}
