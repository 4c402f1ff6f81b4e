use graft_core::TypeKey;
use graft_invocation::BoxedError;
use thiserror::Error;

/// Errors raised by the binding registry.
///
/// The three user-visible classes stay disjoint: a type that was never
/// registered surfaces as `UnknownType`, a registered type whose instance
/// could not be minted surfaces as `InstanceCreation`, and failures of
/// calls on a live proxy surface as
/// [`CallError`](graft_invocation::CallError), never as a `BindError`.
#[derive(Error, Debug)]
pub enum BindError {
	/// The registration target declares state and is not a pure
	/// behavioral contract.
	#[error("type `{0}` is not a pure interface contract")]
	InvalidInterface(TypeKey),
	/// The type is already known to the registry.
	#[error("type `{0}` is already registered")]
	AlreadyRegistered(TypeKey),
	/// The type was never registered.
	#[error("type `{0}` is not known to the registry")]
	UnknownType(TypeKey),
	/// The contract is degenerate (e.g. two overloads with the same name
	/// and arity, which would make by-name dispatch ambiguous).
	#[error("invalid contract `{type_key}`: {detail}")]
	Contract {
		/// Key of the rejected contract.
		type_key: TypeKey,
		/// What is wrong with it.
		detail: String,
	},
	/// The interface-description parser rejected the contract. The
	/// registration was rolled back; the parser's error is the cause.
	#[error("contract description for `{type_key}` failed to parse")]
	Parse {
		/// Key of the rejected contract.
		type_key: TypeKey,
		/// The parser's own error.
		#[source]
		source: BoxedError,
	},
	/// Minting a bound instance failed. The original cause is preserved.
	#[error("error creating bound instance for `{type_key}`")]
	InstanceCreation {
		/// Key of the contract being instantiated.
		type_key: TypeKey,
		/// The minting failure.
		#[source]
		source: BoxedError,
	},
}
