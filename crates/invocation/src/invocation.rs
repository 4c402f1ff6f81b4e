use std::sync::Arc;

use graft_core::{MethodSig, TypeKey, Value};

use crate::error::CallError;

/// Capability set of any object that can receive bound calls.
///
/// This is the shape shared by session dispatchers and delegation wrappers:
/// a type key, the runtime method table, and a uniform call entry point.
/// Wrappers forward `type_key` and `methods` to the object they wrap so
/// that signature matching always sees the underlying runtime type.
pub trait Callable: Send + Sync {
	/// Type key of the runtime type receiving calls.
	fn type_key(&self) -> TypeKey;

	/// Methods the runtime type exposes.
	fn methods(&self) -> &'static [MethodSig];

	/// Executes one call against this target.
	fn call(&self, method: &'static MethodSig, args: Vec<Value>) -> Result<Value, CallError>;
}

/// One in-flight call: target, method identity, and argument snapshot.
///
/// An `Invocation` is created fresh per intercepted call and dropped when
/// the call returns. [`Invocation::proceed`] consumes it, so forwarding to
/// the next handler can happen at most once by construction; an interceptor
/// that wants to short-circuit simply drops the invocation and returns its
/// own result.
pub struct Invocation {
	target: Arc<dyn Callable>,
	method: &'static MethodSig,
	args: Vec<Value>,
}

impl Invocation {
	/// Reifies a call against `target`.
	pub fn new(target: Arc<dyn Callable>, method: &'static MethodSig, args: Vec<Value>) -> Self {
		Self {
			target,
			method,
			args,
		}
	}

	/// The object this call is aimed at.
	pub fn target(&self) -> &dyn Callable {
		self.target.as_ref()
	}

	/// Identity of the called method.
	pub fn method(&self) -> &'static MethodSig {
		self.method
	}

	/// Argument snapshot.
	pub fn args(&self) -> &[Value] {
		&self.args
	}

	/// Mutable access for interceptors that rewrite arguments before
	/// proceeding.
	pub fn args_mut(&mut self) -> &mut Vec<Value> {
		&mut self.args
	}

	/// Forwards to the next handler (the target), returning its result or
	/// propagating its failure.
	pub fn proceed(self) -> Result<Value, CallError> {
		self.target.call(self.method, self.args)
	}

	/// Short description for diagnostics.
	pub fn describe(&self) -> String {
		format!(
			"{}::{}/{}",
			self.target.type_key(),
			self.method.name,
			self.args.len()
		)
	}
}

impl std::fmt::Debug for Invocation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Invocation")
			.field("target", &self.target.type_key())
			.field("method", &self.method.name)
			.field("args", &self.args)
			.finish()
	}
}
