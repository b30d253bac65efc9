//! Operators: functions turning one `Observable` into another.
//!
//! Every constructor here returns a reusable `Fn(Observable<A, E>) ->
//! Observable<B, E2>`, so it can be handed to [`Observable::pipe`] or the
//! [`pipe!`](crate::pipe) macro. The same operators are also available as
//! methods on `Observable`.
//!
//! [`Observable::pipe`]: crate::observable::Observable::pipe

pub mod finalize;
pub mod map;
pub mod map_err;
pub mod map_to;
pub mod take;

pub use finalize::finalize;
pub use map::map;
pub use map_err::map_err;
pub use map_to::map_to;
pub use take::take;
