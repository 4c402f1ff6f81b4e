//! The contract-to-factory registry.

use std::sync::Arc;

use arc_swap::ArcSwap;
use graft_core::{TypeDef, TypeKey};
use graft_plugin::InterceptorChain;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::error::BindError;
use crate::factory::ProxyFactory;
use crate::parser::{AcceptAll, ContractParser};
use crate::proxy::BoundProxy;
use crate::session::Session;

type FactoryMap = FxHashMap<TypeKey, Arc<ProxyFactory>>;

/// Builder for a [`BindingRegistry`].
pub struct RegistryBuilder {
	parser: Arc<dyn ContractParser>,
	chain: Arc<InterceptorChain>,
}

impl RegistryBuilder {
	fn new() -> Self {
		Self {
			parser: Arc::new(AcceptAll),
			chain: Arc::new(InterceptorChain::new()),
		}
	}

	/// Sets the interface-description parser run at registration.
	pub fn parser(mut self, parser: Arc<dyn ContractParser>) -> Self {
		self.parser = parser;
		self
	}

	/// Sets the interceptor chain wrapped around every minted dispatcher.
	pub fn chain(mut self, chain: Arc<InterceptorChain>) -> Self {
		self.chain = chain;
		self
	}

	/// Builds the registry.
	pub fn build(self) -> BindingRegistry {
		BindingRegistry {
			parser: self.parser,
			chain: self.chain,
			known: ArcSwap::from_pointee(FactoryMap::default()),
			write: Mutex::new(()),
		}
	}
}

/// Maps contract types to the factories that mint their bound instances.
///
/// Lookups read a lock-free snapshot (read-mostly access pattern); all
/// registration goes through a single writer lock and publishes a new
/// snapshot only once the whole registration has succeeded. Concurrent
/// registrations of the same type therefore resolve to exactly one winner,
/// and no lookup ever observes a half-registered contract.
pub struct BindingRegistry {
	parser: Arc<dyn ContractParser>,
	chain: Arc<InterceptorChain>,
	known: ArcSwap<FactoryMap>,
	write: Mutex<()>,
}

impl Default for BindingRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl BindingRegistry {
	/// Creates a registry that accepts every contract and intercepts
	/// nothing.
	pub fn new() -> Self {
		Self::builder().build()
	}

	/// Starts building a registry with a parser and/or interceptor chain.
	pub fn builder() -> RegistryBuilder {
		RegistryBuilder::new()
	}

	/// The interceptor chain applied to every minted instance.
	pub fn chain(&self) -> &InterceptorChain {
		&self.chain
	}

	/// Registers a contract.
	///
	/// Interface-ness is checked before existence, so a concrete type
	/// always fails with [`BindError::InvalidInterface`] even when its key
	/// collides with an existing entry. The entry becomes visible only
	/// after the parser accepts the contract; a parser failure leaves the
	/// registry exactly as it was.
	pub fn register(&self, contract: &'static TypeDef) -> Result<(), BindError> {
		if !contract.is_interface() {
			return Err(BindError::InvalidInterface(contract.key));
		}

		let _writer = self.write.lock();
		if self.known.load().contains_key(&contract.key) {
			return Err(BindError::AlreadyRegistered(contract.key));
		}

		let factory = ProxyFactory::new(contract)?;
		self.parser
			.parse(contract)
			.map_err(|source| BindError::Parse {
				type_key: contract.key,
				source,
			})?;

		let mut next = FactoryMap::clone(&self.known.load());
		next.insert(contract.key, Arc::new(factory));
		self.known.store(Arc::new(next));
		Ok(())
	}

	/// Registers every interface contract in `contracts`, silently
	/// skipping concrete descriptors (bulk-scan convenience). Any other
	/// failure aborts and propagates. Returns how many were registered.
	pub fn register_all<I>(&self, contracts: I) -> Result<usize, BindError>
	where
		I: IntoIterator<Item = &'static TypeDef>,
	{
		let mut registered = 0;
		for contract in contracts {
			if !contract.is_interface() {
				continue;
			}
			self.register(contract)?;
			registered += 1;
		}
		Ok(registered)
	}

	/// Returns the factory for a registered contract.
	///
	/// Idempotent: every call for the same type returns the same factory.
	pub fn lookup(&self, key: TypeKey) -> Result<Arc<ProxyFactory>, BindError> {
		self.known
			.load()
			.get(&key)
			.cloned()
			.ok_or(BindError::UnknownType(key))
	}

	/// Returns true if the type is registered.
	pub fn contains(&self, key: TypeKey) -> bool {
		self.known.load().contains_key(&key)
	}

	/// Snapshot of the registered type keys. Set semantics; the order is
	/// not part of the contract.
	pub fn registered(&self) -> Vec<TypeKey> {
		self.known.load().keys().copied().collect()
	}

	/// Mints a new instance of `key` bound to `session`.
	///
	/// Any minting failure is wrapped as [`BindError::InstanceCreation`]
	/// with the original cause preserved.
	pub fn instance(
		&self,
		key: TypeKey,
		session: Arc<dyn Session>,
	) -> Result<BoundProxy, BindError> {
		let factory = self.lookup(key)?;
		factory
			.new_instance(session, &self.chain)
			.map_err(|source| BindError::InstanceCreation {
				type_key: key,
				source: Box::new(source),
			})
	}
}
