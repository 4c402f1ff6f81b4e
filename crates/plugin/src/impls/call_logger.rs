use std::sync::atomic::{AtomicBool, Ordering};

use graft_core::{Props, Value};
use graft_invocation::{CallError, Invocation};

use crate::interceptor::Interceptor;
use crate::signature::Signature;

/// Logs matched calls through the process logging driver.
///
/// The binding and interception cores never log on their own; hosts that
/// want call observability register this interceptor for the signatures
/// they care about. Options: `log-args` = `"true"` additionally logs the
/// argument snapshot at trace level.
pub struct CallLogger {
	signatures: Vec<Signature>,
	log_args: AtomicBool,
}

impl CallLogger {
	/// Creates a logger for the given signatures.
	pub fn new(signatures: Vec<Signature>) -> Self {
		Self {
			signatures,
			log_args: AtomicBool::new(false),
		}
	}
}

impl Interceptor for CallLogger {
	fn intercept(&self, invocation: Invocation) -> Result<Value, CallError> {
		let log = graft_logging::driver();
		let what = invocation.describe();

		if log.debug_enabled() {
			log.debug("plugin::call_logger", &what);
		}
		if self.log_args.load(Ordering::Relaxed) && log.trace_enabled() {
			log.trace(
				"plugin::call_logger",
				&format!("{what} args={:?}", invocation.args()),
			);
		}

		let result = invocation.proceed();
		if let Err(err) = &result {
			log.warn("plugin::call_logger", &format!("{what} failed: {err}"));
		}
		result
	}

	fn signatures(&self) -> &[Signature] {
		&self.signatures
	}

	fn configure(&self, props: &Props) {
		if let Some(raw) = props.get("log-args") {
			self.log_args.store(raw == "true", Ordering::Relaxed);
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use graft_core::{MethodSig, ParamType, TypeKey};
	use graft_invocation::Callable;

	use super::*;
	use crate::wrap::Plugin;

	const CLOCK: TypeKey = TypeKey("test::Clock");

	static CLOCK_METHODS: [MethodSig; 1] = [MethodSig {
		name: "now",
		params: &[],
		ret: ParamType::Int,
	}];

	struct Clock;

	impl Callable for Clock {
		fn type_key(&self) -> TypeKey {
			CLOCK
		}

		fn methods(&self) -> &'static [MethodSig] {
			&CLOCK_METHODS
		}

		fn call(&self, _: &'static MethodSig, _: Vec<Value>) -> Result<Value, CallError> {
			Ok(Value::from(12i64))
		}
	}

	#[test]
	fn logger_is_transparent_to_results() {
		let logger = CallLogger::new(vec![Signature::new(CLOCK, "now", &[])]);
		let wrapped = Plugin::wrap(Arc::new(Clock), Arc::new(logger));
		let result = wrapped.call(&CLOCK_METHODS[0], vec![]).unwrap();
		assert_eq!(result, Value::from(12i64));
	}

	#[test]
	fn configure_reads_log_args_option() {
		let logger = CallLogger::new(vec![]);
		let props: Props = [("log-args", "true")].into_iter().collect();
		logger.configure(&props);
		assert!(logger.log_args.load(Ordering::Relaxed));
	}
}
