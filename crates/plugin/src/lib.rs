//! Declarative call interception.
//!
//! Extensions declare the exact method signatures they want to observe as
//! [`Signature`] values, implement [`Interceptor`], and register with an
//! [`InterceptorChain`]. The chain wraps any [`Callable`] target by folding
//! [`Plugin::wrap`] over its interceptors in registration order; targets no
//! interceptor cares about come back untouched, pointer-identical.
//!
//! The wrapped object implements the same capability set as the original,
//! forwards non-matching calls straight through, and routes matching calls
//! into an [`Invocation`](graft_invocation::Invocation) handed to
//! `intercept`.

/// Ordered interceptor collections.
pub mod chain;
/// Bundled interceptor implementations.
pub mod impls;
/// The interceptor capability contract.
pub mod interceptor;
/// Declared method signatures and exact matching.
pub mod signature;
/// The delegation wrapper produced for interested interceptors.
pub mod wrap;

pub use chain::InterceptorChain;
pub use graft_invocation::{CallError, Callable, Invocation};
pub use impls::CallLogger;
pub use interceptor::Interceptor;
pub use signature::Signature;
pub use wrap::Plugin;
