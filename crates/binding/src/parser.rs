//! Boundary trait for interface-description parsers.

use graft_core::TypeDef;
use graft_invocation::BoxedError;

/// Validates a contract and extracts declarative binding metadata.
///
/// Implementations live outside this crate (statement mapping, annotation
/// equivalents, schema checks). The parser runs as part of registration:
/// if it fails, the registration is rolled back and the parser's error is
/// re-raised, so no contract is ever half-registered.
///
/// The parser receives only the contract under registration and must not
/// assume access to the registry performing it.
pub trait ContractParser: Send + Sync {
	/// Validates `contract`, returning the reason it is unacceptable.
	fn parse(&self, contract: &'static TypeDef) -> Result<(), BoxedError>;
}

/// Parser for hosts with no declarative metadata: accepts every contract.
pub struct AcceptAll;

impl ContractParser for AcceptAll {
	fn parse(&self, _contract: &'static TypeDef) -> Result<(), BoxedError> {
		Ok(())
	}
}
