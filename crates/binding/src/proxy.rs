//! Bound proxy instances.

use std::sync::Arc;

use graft_core::{MethodSig, TypeDef, Value};
use graft_invocation::{CallError, Callable, Invocation};

use crate::factory::MethodTable;

/// A live instance of a registered contract, bound to one session for its
/// entire lifetime.
///
/// Every call is reified as an [`Invocation`] against the (possibly
/// interceptor-wrapped) session dispatcher; results and errors flow back
/// unchanged. A proxy is never reused across sessions; mint a new one
/// per context.
pub struct BoundProxy {
	contract: &'static TypeDef,
	table: Arc<MethodTable>,
	target: Arc<dyn Callable>,
}

impl std::fmt::Debug for BoundProxy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BoundProxy")
			.field("contract", &self.contract)
			.finish_non_exhaustive()
	}
}

impl BoundProxy {
	pub(crate) fn new(
		contract: &'static TypeDef,
		table: Arc<MethodTable>,
		target: Arc<dyn Callable>,
	) -> Self {
		Self {
			contract,
			table,
			target,
		}
	}

	/// The contract this instance satisfies.
	pub fn contract(&self) -> &'static TypeDef {
		self.contract
	}

	/// Calls a method by name, resolving the overload by argument count.
	pub fn invoke(&self, method: &str, args: Vec<Value>) -> Result<Value, CallError> {
		let sig = self.table.resolve(method, args.len())?;
		Invocation::new(Arc::clone(&self.target), sig, args).proceed()
	}

	/// Calls an explicitly selected overload.
	///
	/// `method` must be one of the contract's own declarations; a
	/// signature from some other contract is rejected as unknown.
	pub fn invoke_sig(
		&self,
		method: &'static MethodSig,
		args: Vec<Value>,
	) -> Result<Value, CallError> {
		if !self.table.declares(method) {
			return Err(CallError::UnknownMethod {
				target: self.contract.key,
				method: method.name.to_owned(),
			});
		}
		if method.arity() != args.len() {
			return Err(CallError::ArityMismatch {
				target: self.contract.key,
				method: method.name,
				expected: method.arity(),
				got: args.len(),
			});
		}
		Invocation::new(Arc::clone(&self.target), method, args).proceed()
	}
}
