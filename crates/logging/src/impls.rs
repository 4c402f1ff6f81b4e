//! Bundled driver implementations.

use crate::driver::LogDriver;

/// Driver forwarding to the `tracing` ecosystem.
///
/// Only eligible as a bootstrap candidate once a global dispatcher has been
/// installed; probing before `tracing_subscriber` setup fails over to the
/// next candidate.
pub struct TracingDriver;

impl TracingDriver {
	/// Creates the driver if a global tracing dispatcher is installed.
	pub fn probe() -> Option<Self> {
		tracing::dispatcher::has_been_set().then_some(Self)
	}
}

impl LogDriver for TracingDriver {
	fn name(&self) -> &'static str {
		"tracing"
	}

	fn debug_enabled(&self) -> bool {
		tracing::enabled!(tracing::Level::DEBUG)
	}

	fn trace_enabled(&self) -> bool {
		tracing::enabled!(tracing::Level::TRACE)
	}

	fn error(&self, target: &str, message: &str) {
		tracing::error!(target: "graft", component = target, "{message}");
	}

	fn warn(&self, target: &str, message: &str) {
		tracing::warn!(target: "graft", component = target, "{message}");
	}

	fn debug(&self, target: &str, message: &str) {
		tracing::debug!(target: "graft", component = target, "{message}");
	}

	fn trace(&self, target: &str, message: &str) {
		tracing::trace!(target: "graft", component = target, "{message}");
	}
}

/// Driver writing straight to standard output/error.
pub struct StdoutDriver;

impl LogDriver for StdoutDriver {
	fn name(&self) -> &'static str {
		"stdout"
	}

	fn debug_enabled(&self) -> bool {
		true
	}

	fn trace_enabled(&self) -> bool {
		false
	}

	fn error(&self, target: &str, message: &str) {
		eprintln!("[error] {target}: {message}");
	}

	fn warn(&self, target: &str, message: &str) {
		eprintln!("[warn] {target}: {message}");
	}

	fn debug(&self, target: &str, message: &str) {
		println!("[debug] {target}: {message}");
	}

	fn trace(&self, target: &str, message: &str) {
		println!("[trace] {target}: {message}");
	}
}

/// Terminal fallback: discards everything.
pub struct NoopDriver;

impl LogDriver for NoopDriver {
	fn name(&self) -> &'static str {
		"noop"
	}

	fn debug_enabled(&self) -> bool {
		false
	}

	fn trace_enabled(&self) -> bool {
		false
	}

	fn error(&self, _target: &str, _message: &str) {}

	fn warn(&self, _target: &str, _message: &str) {}

	fn debug(&self, _target: &str, _message: &str) {}

	fn trace(&self, _target: &str, _message: &str) {}
}
