//! The logging driver capability.

/// A logging backend adapter.
///
/// Drivers carry no level filtering contract beyond the two `*_enabled`
/// probes; callers are expected to check them before formatting expensive
/// messages.
pub trait LogDriver: Send + Sync {
	/// Short name of this driver (for diagnostics and bootstrap reporting).
	fn name(&self) -> &'static str;

	/// Returns true if debug-level output is wanted.
	fn debug_enabled(&self) -> bool;

	/// Returns true if trace-level output is wanted.
	fn trace_enabled(&self) -> bool;

	/// Emits an error-level message.
	fn error(&self, target: &str, message: &str);

	/// Emits a warn-level message.
	fn warn(&self, target: &str, message: &str);

	/// Emits a debug-level message.
	fn debug(&self, target: &str, message: &str);

	/// Emits a trace-level message.
	fn trace(&self, target: &str, message: &str);
}
