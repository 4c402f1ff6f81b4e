//! Interface-bound proxy registry with declarative interception.
//!
//! This crate aggregates the graft sub-crates. Depend on this crate to get
//! the whole public surface rather than depending on individual member
//! crates.
//!
//! # Sub-crates
//!
//! - [`graft_core`] - Contract descriptors, values, configuration maps
//! - [`graft_invocation`] - Reified calls and the `Callable` capability
//! - [`graft_plugin`] - Signatures, interceptors, chains, wrappers
//! - [`graft_binding`] - Registry, factories, bound proxies, boundary traits
//! - [`graft_logging`] - Logging driver seam with explicit bootstrap
//!
//! # Overview
//!
//! Describe a contract as static data, register it, then mint instances
//! bound to an execution session. Interceptors registered with the
//! registry's chain transparently wrap every minted dispatcher whose
//! methods match their declared signatures; everything else passes through
//! untouched.

pub use graft_binding::{
	AcceptAll, BindError, BindingRegistry, BoundProxy, ContractParser, MintError, ProxyFactory,
	RegistryBuilder, Session, SessionDispatcher,
};
pub use graft_core::{MethodSig, ParamType, Props, TypeDef, TypeKey, Value};
pub use graft_invocation::{BoxedError, CallError, Callable, Invocation};
pub use graft_logging::{
	DriverCandidate, LogDriver, LogError, NoopDriver, StdoutDriver, TracingDriver,
};
pub use graft_plugin::{CallLogger, Interceptor, InterceptorChain, Plugin, Signature};
