//! Primitive data model shared by the graft binding and plugin crates.
//!
//! Contracts are described with static descriptor tables rather than
//! reflection: a [`TypeDef`] names a component type and its method
//! signatures, and a `&'static MethodSig` reference *is* the runtime
//! identity of a method. Runtime data crossing a contract boundary is
//! carried as [`Value`].

/// Contract descriptors: method signatures and type definitions.
pub mod contract;
/// Flat string-to-string configuration maps.
pub mod props;
/// Type identifiers for components and parameters.
pub mod types;
/// Owned runtime values.
pub mod value;

pub use contract::{MethodSig, TypeDef};
pub use props::Props;
pub use types::{ParamType, TypeKey};
pub use value::Value;
