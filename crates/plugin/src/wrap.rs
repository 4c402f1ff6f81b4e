//! The delegation wrapper routing matched calls into an interceptor.

use std::sync::Arc;

use graft_core::{MethodSig, TypeKey, Value};
use graft_invocation::{CallError, Callable, Invocation};

use crate::interceptor::Interceptor;

/// Wrapper implementing the same capability set as its target.
///
/// `type_key` and `methods` report the *underlying* runtime type, so
/// stacked wrappers keep matching against the real component rather than
/// against each other.
pub struct Plugin {
	target: Arc<dyn Callable>,
	interceptor: Arc<dyn Interceptor>,
}

impl Plugin {
	/// Wraps `target` if the interceptor declared a signature matching any
	/// method of the target's runtime type; otherwise returns `target`
	/// unchanged (same allocation, pointer-identical).
	pub fn wrap(target: Arc<dyn Callable>, interceptor: Arc<dyn Interceptor>) -> Arc<dyn Callable> {
		let type_key = target.type_key();
		let interested = interceptor
			.signatures()
			.iter()
			.any(|sig| target.methods().iter().any(|m| sig.matches(type_key, m)));
		if !interested {
			return target;
		}
		Arc::new(Self {
			target,
			interceptor,
		})
	}

	fn matched(&self, method: &MethodSig) -> bool {
		let type_key = self.target.type_key();
		self.interceptor
			.signatures()
			.iter()
			.any(|sig| sig.matches(type_key, method))
	}
}

impl Callable for Plugin {
	fn type_key(&self) -> TypeKey {
		self.target.type_key()
	}

	fn methods(&self) -> &'static [MethodSig] {
		self.target.methods()
	}

	fn call(&self, method: &'static MethodSig, args: Vec<Value>) -> Result<Value, CallError> {
		if self.matched(method) {
			let invocation = Invocation::new(Arc::clone(&self.target), method, args);
			self.interceptor.intercept(invocation)
		} else {
			self.target.call(method, args)
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicUsize, Ordering};

	use graft_core::ParamType;

	use super::*;
	use crate::signature::Signature;

	const WIDGET: TypeKey = TypeKey("test::Widget");

	static WIDGET_METHODS: [MethodSig; 2] = [
		MethodSig {
			name: "poke",
			params: &[ParamType::Int],
			ret: ParamType::Int,
		},
		MethodSig {
			name: "name",
			params: &[],
			ret: ParamType::Str,
		},
	];

	struct Widget;

	impl Callable for Widget {
		fn type_key(&self) -> TypeKey {
			WIDGET
		}

		fn methods(&self) -> &'static [MethodSig] {
			&WIDGET_METHODS
		}

		fn call(&self, method: &'static MethodSig, args: Vec<Value>) -> Result<Value, CallError> {
			match method.name {
				"poke" => Ok(args.into_iter().next().unwrap_or(Value::Unit)),
				"name" => Ok(Value::from("widget")),
				other => Err(CallError::UnknownMethod {
					target: WIDGET,
					method: other.to_owned(),
				}),
			}
		}
	}

	struct Doubler {
		signatures: Vec<Signature>,
		hits: AtomicUsize,
	}

	impl Doubler {
		fn new(signatures: Vec<Signature>) -> Self {
			Self {
				signatures,
				hits: AtomicUsize::new(0),
			}
		}
	}

	impl Interceptor for Doubler {
		fn intercept(&self, invocation: Invocation) -> Result<Value, CallError> {
			self.hits.fetch_add(1, Ordering::SeqCst);
			match invocation.proceed()? {
				Value::Int(n) => Ok(Value::Int(n * 2)),
				other => Ok(other),
			}
		}

		fn signatures(&self) -> &[Signature] {
			&self.signatures
		}
	}

	#[test]
	fn uninterested_interceptor_is_identity() {
		let target: Arc<dyn Callable> = Arc::new(Widget);
		let sig = Signature::new(TypeKey("test::Other"), "poke", &[ParamType::Int]);
		let interceptor = Arc::new(Doubler::new(vec![sig]));

		let wrapped = Plugin::wrap(Arc::clone(&target), interceptor);
		assert!(Arc::ptr_eq(&wrapped, &target));
	}

	#[test]
	fn matching_call_routes_through_interceptor() {
		let sig = Signature::new(WIDGET, "poke", &[ParamType::Int]);
		let interceptor = Arc::new(Doubler::new(vec![sig]));
		let wrapped = Plugin::wrap(Arc::new(Widget), Arc::clone(&interceptor) as Arc<dyn Interceptor>);

		let result = wrapped.call(&WIDGET_METHODS[0], vec![Value::from(21i64)]);
		assert_eq!(result.unwrap(), Value::from(42i64));
		assert_eq!(interceptor.hits.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn non_matching_call_forwards_straight_through() {
		let sig = Signature::new(WIDGET, "poke", &[ParamType::Int]);
		let interceptor = Arc::new(Doubler::new(vec![sig]));
		let wrapped = Plugin::wrap(Arc::new(Widget), Arc::clone(&interceptor) as Arc<dyn Interceptor>);

		let result = wrapped.call(&WIDGET_METHODS[1], vec![]);
		assert_eq!(result.unwrap(), Value::from("widget"));
		assert_eq!(interceptor.hits.load(Ordering::SeqCst), 0);
	}

	#[test]
	fn wrapper_reports_underlying_type() {
		let sig = Signature::new(WIDGET, "poke", &[ParamType::Int]);
		let wrapped = Plugin::wrap(Arc::new(Widget), Arc::new(Doubler::new(vec![sig])));
		assert_eq!(wrapped.type_key(), WIDGET);
		assert_eq!(wrapped.methods().len(), 2);
	}
}
