//! # rxlite: a minimal Reactive Extensions core
//!
//! Cold, unicast observables for single-threaded code: every `subscribe` runs
//! the producer again, nothing is multicast, and all state lives behind `Rc`.
//!
//! ## Quick Start
//!
//! ```rust
//! use rxlite::prelude::*;
//!
//! observable::from_iter::<_, ()>(0..10)
//!   .map(|v| v * 2)
//!   .take(3)
//!   .subscribe_next(|v| println!("Value: {}", v));
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] | A lazy producer of `next* (error | complete)?` |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` events |
//! | [`Subscriber`] | The guarded observer a producer emits into |
//! | [`Subscription`] | Handle to cancel an active subscription |
//!
//! Operators live in [`ops`] and are plain functions from one `Observable` to
//! another, applied with [`Observable::pipe`] or the [`pipe!`] macro.
//!
//! ## Feature Flags
//!
//! - **`timer`** (default): `observable::interval`, backed by `futures-time`
//!
//! [`Observable`]: observable::Observable
//! [`Observable::pipe`]: observable::Observable::pipe
//! [`Observer`]: observer::Observer
//! [`Subscriber`]: subscriber::Subscriber
//! [`Subscription`]: subscription::Subscription

pub mod error;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod scheduler;
pub mod subscriber;
pub mod subscription;

#[cfg(test)]
mod test_util;

pub use prelude::*;

// Compile the README examples as doctests.
#[cfg(doctest)]
mod __readme_doctests {
  #![doc = include_str!("../README.md")]
}
