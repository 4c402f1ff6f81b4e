//! Canonical invocation types for bound-call dispatch.
//!
//! Every call into a bound proxy, and every call an interceptor forwards,
//! is reified as an [`Invocation`] before it reaches a target. Targets are
//! anything implementing the [`Callable`] capability set.

mod error;
mod invocation;

pub use error::{BoxedError, CallError};
pub use invocation::{Callable, Invocation};
