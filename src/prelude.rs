//! Prelude module for convenient imports
//!
//! `use rxlite::prelude::*;` brings in the core types, the `observable`
//! module of creation functions and `Duration`.

pub use std::time::Duration;

pub use crate::{
  error::RxError,
  observable::{self, create, BoxOperator, Observable},
  observer::{BoxedObserver, Observer, ObserverAll},
  subscriber::Subscriber,
  subscription::{Subscription, SubscriptionGuard, TearDown},
};
