//! Boundary trait for execution backends.

use graft_core::{MethodSig, TypeDef, TypeKey, Value};
use graft_invocation::BoxedError;

/// An execution context a proxy is bound to.
///
/// The session is the opaque engine that turns a method identity plus
/// arguments into a semantic action (statement execution, RPC, whatever
/// the host does). The binding core only marshals calls into it and
/// errors back out of it; backend failures are wrapped as
/// [`CallError::Backend`](graft_invocation::CallError), never swallowed.
///
/// A session is only as thread-safe as its implementation documents;
/// bound proxies inherit exactly that guarantee and add none.
pub trait Session: Send + Sync {
	/// Called once when a proxy is minted against this session.
	///
	/// A session that cannot serve a contract (no actions bound for it)
	/// refuses here, which aborts instance creation. The default accepts
	/// everything.
	fn bind(&self, contract: &'static TypeDef) -> Result<(), BoxedError> {
		let _ = contract;
		Ok(())
	}

	/// Executes the semantic action for one call.
	fn execute(
		&self,
		owner: TypeKey,
		method: &'static MethodSig,
		args: Vec<Value>,
	) -> Result<Value, BoxedError>;
}
