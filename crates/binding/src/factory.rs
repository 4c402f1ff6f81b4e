//! Proxy factories and the session-bound dispatcher.

use std::sync::Arc;

use graft_core::{MethodSig, TypeDef, TypeKey, Value};
use graft_invocation::{BoxedError, CallError, Callable};
use graft_plugin::InterceptorChain;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::error::BindError;
use crate::proxy::BoundProxy;
use crate::session::Session;

/// Method table of a contract: name to declared overloads.
///
/// Built once per contract at registration time and shared by every
/// instance the factory mints.
pub(crate) struct MethodTable {
	owner: TypeKey,
	by_name: FxHashMap<&'static str, Vec<&'static MethodSig>>,
}

impl MethodTable {
	fn build(contract: &'static TypeDef) -> Result<Self, BindError> {
		let mut by_name: FxHashMap<&'static str, Vec<&'static MethodSig>> = FxHashMap::default();
		for method in contract.methods {
			let overloads = by_name.entry(method.name).or_default();
			if overloads.iter().any(|m| m.arity() == method.arity()) {
				return Err(BindError::Contract {
					type_key: contract.key,
					detail: format!(
						"two `{}` overloads share arity {}, by-name dispatch would be ambiguous",
						method.name,
						method.arity()
					),
				});
			}
			overloads.push(method);
		}
		Ok(Self {
			owner: contract.key,
			by_name,
		})
	}

	/// Resolves a call site to a declared method by name and arity.
	pub(crate) fn resolve(&self, name: &str, arity: usize) -> Result<&'static MethodSig, CallError> {
		let Some(overloads) = self.by_name.get(name) else {
			return Err(CallError::UnknownMethod {
				target: self.owner,
				method: name.to_owned(),
			});
		};
		overloads
			.iter()
			.copied()
			.find(|m| m.arity() == arity)
			.ok_or(CallError::ArityMismatch {
				target: self.owner,
				method: overloads[0].name,
				expected: overloads[0].arity(),
				got: arity,
			})
	}

	/// Returns true if `method` is one of this table's declarations.
	pub(crate) fn declares(&self, method: &'static MethodSig) -> bool {
		self.by_name
			.get(method.name)
			.is_some_and(|overloads| overloads.iter().any(|m| std::ptr::eq(*m, method)))
	}
}

/// The real implementation object behind every proxy: routes calls of one
/// contract into its [`Session`]. This is the target interceptor chains
/// wrap.
pub struct SessionDispatcher {
	contract: &'static TypeDef,
	session: Arc<dyn Session>,
}

impl Callable for SessionDispatcher {
	fn type_key(&self) -> TypeKey {
		self.contract.key
	}

	fn methods(&self) -> &'static [MethodSig] {
		self.contract.methods
	}

	fn call(&self, method: &'static MethodSig, args: Vec<Value>) -> Result<Value, CallError> {
		self.session
			.execute(self.contract.key, method, args)
			.map_err(CallError::Backend)
	}
}

/// Failures while minting a bound instance.
#[derive(Error, Debug)]
pub enum MintError {
	/// The session refused to bind the contract.
	#[error("session refused contract `{type_key}`")]
	SessionRefused {
		/// Key of the refused contract.
		type_key: TypeKey,
		/// The session's reason.
		#[source]
		source: BoxedError,
	},
	/// Interception wrapping broke the capability contract: the wrapped
	/// object no longer reports the contract's type key.
	#[error("interception wrapping changed target type from `{expected}` to `{got}`")]
	WrappedTypeMismatch {
		/// The contract's key.
		expected: TypeKey,
		/// What the wrapped object reports.
		got: TypeKey,
	},
}

/// Mints bound instances of one registered contract.
///
/// Stateless beyond the contract and its method table; safe to use from
/// many threads to mint any number of instances.
pub struct ProxyFactory {
	contract: &'static TypeDef,
	table: Arc<MethodTable>,
}

impl ProxyFactory {
	pub(crate) fn new(contract: &'static TypeDef) -> Result<Self, BindError> {
		Ok(Self {
			contract,
			table: Arc::new(MethodTable::build(contract)?),
		})
	}

	/// The contract this factory mints instances of.
	pub fn contract(&self) -> &'static TypeDef {
		self.contract
	}

	/// Mints a new instance bound to `session`, wrapping the dispatcher
	/// with `chain`.
	///
	/// Never yields a partially initialized proxy: any failure here aborts
	/// the mint as a single error.
	pub fn new_instance(
		&self,
		session: Arc<dyn Session>,
		chain: &InterceptorChain,
	) -> Result<BoundProxy, MintError> {
		session.bind(self.contract).map_err(|source| MintError::SessionRefused {
			type_key: self.contract.key,
			source,
		})?;

		let dispatcher: Arc<dyn Callable> = Arc::new(SessionDispatcher {
			contract: self.contract,
			session,
		});
		let target = chain.wrap_all(dispatcher);
		if target.type_key() != self.contract.key {
			return Err(MintError::WrappedTypeMismatch {
				expected: self.contract.key,
				got: target.type_key(),
			});
		}

		Ok(BoundProxy::new(self.contract, Arc::clone(&self.table), target))
	}
}
