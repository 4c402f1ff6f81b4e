use graft_core::TypeKey;
use thiserror::Error;

/// Source error type for opaque backend/extension failures.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while resolving or executing a bound call.
///
/// `Backend` and `Intercept` are transparent carriers: the chain performs
/// no error translation, so callers can always tell a dispatch-engine
/// failure from an extension failure from a core resolution failure.
#[derive(Error, Debug)]
pub enum CallError {
	/// The target's runtime type declares no such method.
	#[error("no method `{method}` on `{target}`")]
	UnknownMethod {
		/// Type key of the call target.
		target: TypeKey,
		/// Requested method name.
		method: String,
	},
	/// A method with that name exists, but not with that argument count.
	#[error("method `{method}` on `{target}` takes {expected} argument(s), got {got}")]
	ArityMismatch {
		/// Type key of the call target.
		target: TypeKey,
		/// Requested method name.
		method: &'static str,
		/// Declared arity.
		expected: usize,
		/// Supplied argument count.
		got: usize,
	},
	/// The execution backend failed. The cause is preserved, never swallowed.
	#[error("dispatch backend failed")]
	Backend(#[source] BoxedError),
	/// An interceptor failed. Propagated through the chain unchanged.
	#[error("interceptor failed")]
	Intercept(#[source] BoxedError),
}

impl CallError {
	/// Wraps an execution-backend failure.
	pub fn backend(source: impl Into<BoxedError>) -> Self {
		Self::Backend(source.into())
	}

	/// Wraps an interceptor failure.
	pub fn intercept(source: impl Into<BoxedError>) -> Self {
		Self::Intercept(source.into())
	}
}
