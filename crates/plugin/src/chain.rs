//! Ordered interceptor collections.

use std::sync::Arc;

use graft_core::Props;
use graft_invocation::Callable;
use parking_lot::Mutex;

use crate::interceptor::Interceptor;
use crate::wrap::Plugin;

/// An ordered, append-only collection of interceptors.
///
/// Registration order is a public contract: [`InterceptorChain::wrap_all`]
/// folds the target through the interceptors in that order, so the
/// first-registered interceptor ends up outermost: first to observe a
/// call, last to see its result.
///
/// Chains are expected to be fully populated during startup, before calls
/// flow. Appending stays safe under concurrency (the list is lock-guarded
/// and `wrap_all` reads a snapshot), but objects wrapped before an append
/// are unaffected by it.
#[derive(Default)]
pub struct InterceptorChain {
	interceptors: Mutex<Vec<Arc<dyn Interceptor>>>,
}

impl InterceptorChain {
	/// Creates an empty chain.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends an interceptor.
	pub fn register(&self, interceptor: Arc<dyn Interceptor>) {
		self.interceptors.lock().push(interceptor);
	}

	/// Configures an interceptor with `props`, then appends it.
	pub fn register_configured(&self, interceptor: Arc<dyn Interceptor>, props: &Props) {
		interceptor.configure(props);
		self.register(interceptor);
	}

	/// Folds `target` through every registered interceptor's wrap decision
	/// in registration order. Targets no interceptor is interested in are
	/// returned unchanged.
	pub fn wrap_all(&self, target: Arc<dyn Callable>) -> Arc<dyn Callable> {
		let snapshot: Vec<_> = self.interceptors.lock().clone();
		snapshot
			.into_iter()
			.fold(target, |acc, interceptor| Plugin::wrap(acc, interceptor))
	}

	/// Read-only snapshot of the registered interceptors, in registration
	/// order.
	pub fn interceptors(&self) -> Vec<Arc<dyn Interceptor>> {
		self.interceptors.lock().clone()
	}

	/// Number of registered interceptors.
	pub fn len(&self) -> usize {
		self.interceptors.lock().len()
	}

	/// Returns true if no interceptor is registered.
	pub fn is_empty(&self) -> bool {
		self.interceptors.lock().is_empty()
	}
}
