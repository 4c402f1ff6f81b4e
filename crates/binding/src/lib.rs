//! Interface-bound proxy registry.
//!
//! A [`BindingRegistry`] maps contract types ([`TypeDef`]s) to
//! [`ProxyFactory`]s. Asking the registry for an instance of a registered
//! contract yields a [`BoundProxy`]: a live object tied to exactly one
//! [`Session`] for its whole lifetime, whose every call is reified as an
//! invocation and dispatched through the session backend, first passing
//! through whatever interceptor chain the host installed.
//!
//! Registration is all-or-nothing: an entry becomes visible to lookups
//! only after the host's [`ContractParser`] accepts the contract, and a
//! rejected registration leaves no state behind that would block a retry.
//!
//! ```
//! use std::sync::Arc;
//!
//! use graft_binding::{BindingRegistry, Session};
//! use graft_core::{MethodSig, ParamType, TypeDef, TypeKey, Value};
//! use graft_invocation::BoxedError;
//!
//! static GREETER: TypeDef = TypeDef {
//! 	key: TypeKey("demo::Greeter"),
//! 	description: "Greets people",
//! 	methods: &[MethodSig {
//! 		name: "greet",
//! 		params: &[ParamType::Str],
//! 		ret: ParamType::Str,
//! 	}],
//! 	fields: &[],
//! };
//!
//! struct Hello;
//!
//! impl Session for Hello {
//! 	fn execute(
//! 		&self,
//! 		_owner: TypeKey,
//! 		_method: &'static MethodSig,
//! 		args: Vec<Value>,
//! 	) -> Result<Value, BoxedError> {
//! 		let name = args[0].as_str().unwrap_or("world");
//! 		Ok(Value::Str(format!("Hello {name}")))
//! 	}
//! }
//!
//! let registry = BindingRegistry::new();
//! registry.register(&GREETER).unwrap();
//! let greeter = registry.instance(GREETER.key, Arc::new(Hello)).unwrap();
//! let reply = greeter.invoke("greet", vec![Value::from("Ann")]).unwrap();
//! assert_eq!(reply, Value::Str("Hello Ann".into()));
//! ```

mod error;
/// Proxy factories and the session-bound dispatcher.
pub mod factory;
/// Boundary trait for interface-description parsers.
pub mod parser;
/// Bound proxy instances.
pub mod proxy;
/// The contract-to-factory registry.
pub mod registry;
/// Boundary trait for execution backends.
pub mod session;

pub use error::BindError;
pub use factory::{MintError, ProxyFactory, SessionDispatcher};
pub use graft_core::TypeDef;
pub use parser::{AcceptAll, ContractParser};
pub use proxy::BoundProxy;
pub use registry::{BindingRegistry, RegistryBuilder};
pub use session::Session;
