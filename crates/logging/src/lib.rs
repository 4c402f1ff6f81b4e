//! Pluggable logging seam with an explicit bootstrap step.
//!
//! Nothing in the binding or interception cores logs on its own; code that
//! wants observability (bundled interceptors, hosts) asks this crate for
//! the current [`LogDriver`]. The driver is chosen once at startup by
//! probing an ordered candidate list and falling back to a no-op driver if
//! every candidate is unavailable:
//!
//! ```
//! graft_logging::init();
//! graft_logging::driver().warn("demo", "hello");
//! ```
//!
//! Hosts with their own backend install it directly via [`use_driver`].
//! The bootstrap is an ordinary function call, not a hidden static
//! initializer, so candidate ordering and fallback are testable.

use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;
use thiserror::Error;

mod driver;
mod impls;

pub use driver::LogDriver;
pub use impls::{NoopDriver, StdoutDriver, TracingDriver};

/// Errors raised while probing or installing a driver.
#[derive(Error, Debug)]
pub enum LogError {
	/// The candidate's backend is not available in this process.
	#[error("logging driver `{0}` is unavailable")]
	Unavailable(&'static str),
}

/// One bootstrap candidate: probes its backend and yields a driver.
pub type DriverCandidate = fn() -> Result<Arc<dyn LogDriver>, LogError>;

// ArcSwap needs a sized pointee, so the trait object is held one level down.
struct Slot(Arc<dyn LogDriver>);

static SLOT: OnceLock<ArcSwap<Slot>> = OnceLock::new();

fn slot() -> &'static ArcSwap<Slot> {
	SLOT.get_or_init(|| ArcSwap::from_pointee(Slot(Arc::new(NoopDriver))))
}

/// Returns the currently installed driver (no-op until bootstrap).
pub fn driver() -> Arc<dyn LogDriver> {
	Arc::clone(&slot().load().0)
}

/// Installs a specific driver, replacing the current one.
pub fn use_driver(driver: Arc<dyn LogDriver>) {
	slot().store(Arc::new(Slot(driver)));
}

/// Probes `candidates` in order and installs the first that succeeds,
/// falling back to [`NoopDriver`] if all fail. Returns the name of the
/// installed driver.
pub fn init_with(candidates: &[DriverCandidate]) -> &'static str {
	for candidate in candidates {
		if let Ok(driver) = candidate() {
			let name = driver.name();
			use_driver(driver);
			return name;
		}
	}
	use_driver(Arc::new(NoopDriver));
	"noop"
}

/// Bootstraps with the default candidate order: `tracing`, then `stdout`.
pub fn init() -> &'static str {
	init_with(&[try_tracing, try_stdout])
}

/// Candidate for [`TracingDriver`]; fails when no global dispatcher is set.
pub fn try_tracing() -> Result<Arc<dyn LogDriver>, LogError> {
	TracingDriver::probe()
		.map(|d| Arc::new(d) as Arc<dyn LogDriver>)
		.ok_or(LogError::Unavailable("tracing"))
}

/// Candidate for [`StdoutDriver`]; always available.
pub fn try_stdout() -> Result<Arc<dyn LogDriver>, LogError> {
	Ok(Arc::new(StdoutDriver))
}

#[cfg(test)]
mod tests {
	use serial_test::serial;

	use super::*;

	fn failing() -> Result<Arc<dyn LogDriver>, LogError> {
		Err(LogError::Unavailable("failing"))
	}

	// The driver slot is process-global, so these run serially.
	#[test]
	#[serial]
	fn first_available_candidate_wins() {
		let name = init_with(&[failing, try_stdout]);
		assert_eq!(name, "stdout");
		assert_eq!(driver().name(), "stdout");
	}

	#[test]
	#[serial]
	fn all_failed_falls_back_to_noop() {
		let name = init_with(&[failing, failing]);
		assert_eq!(name, "noop");
		assert!(!driver().debug_enabled());
	}

	#[test]
	#[serial]
	fn custom_driver_replaces_current() {
		struct Probe;
		impl LogDriver for Probe {
			fn name(&self) -> &'static str {
				"probe"
			}
			fn debug_enabled(&self) -> bool {
				true
			}
			fn trace_enabled(&self) -> bool {
				true
			}
			fn error(&self, _: &str, _: &str) {}
			fn warn(&self, _: &str, _: &str) {}
			fn debug(&self, _: &str, _: &str) {}
			fn trace(&self, _: &str, _: &str) {}
		}

		use_driver(Arc::new(Probe));
		assert_eq!(driver().name(), "probe");
	}
}
