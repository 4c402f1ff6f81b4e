//! The interceptor capability contract.

use graft_core::{Props, Value};
use graft_invocation::{CallError, Invocation};

use crate::signature::Signature;

/// A cross-cutting extension that observes or modifies bound calls.
///
/// Interceptors never appear in the code of the components they wrap; the
/// chain decides per target, from the declared [`Signature`] list, whether
/// a wrapper is warranted at all.
pub trait Interceptor: Send + Sync {
	/// Handles one matched call.
	///
	/// The interceptor may inspect the invocation, rewrite its arguments,
	/// call [`Invocation::proceed`] to forward to the next handler, drop it
	/// to short-circuit, and transform the result on the way back out.
	/// Failures propagate to the chain's caller unmodified; the chain does
	/// no error translation.
	fn intercept(&self, invocation: Invocation) -> Result<Value, CallError>;

	/// The method signatures this interceptor wants to observe, as data.
	///
	/// An interceptor whose signatures match nothing on a target adds zero
	/// wrapping overhead to that target.
	fn signatures(&self) -> &[Signature];

	/// Accepts configuration options. Defaults to a no-op so interceptors
	/// that need no configuration can ignore it.
	fn configure(&self, props: &Props) {
		let _ = props;
	}
}
