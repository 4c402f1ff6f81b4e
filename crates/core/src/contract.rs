//! Static contract descriptors.
//!
//! A contract is described once, as `static` data, and registered by
//! reference. The `&'static MethodSig` handed out by a [`TypeDef`] doubles
//! as the runtime identity of that method: two call sites name the same
//! method iff they hold the same reference.

use crate::types::{ParamType, TypeKey};

/// One declared method on a contract type.
#[derive(Debug, PartialEq, Eq)]
pub struct MethodSig {
	/// Method name.
	pub name: &'static str,
	/// Ordered parameter types. Arity is the slice length.
	pub params: &'static [ParamType],
	/// Return type.
	pub ret: ParamType,
}

impl MethodSig {
	/// Number of parameters.
	pub const fn arity(&self) -> usize {
		self.params.len()
	}
}

impl core::fmt::Display for MethodSig {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "{}(", self.name)?;
		for (i, p) in self.params.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{p}")?;
		}
		write!(f, ") -> {}", self.ret)
	}
}

/// Description of a component type.
///
/// Only *pure interfaces* (no declared fields) can be registered for
/// binding; concrete descriptors exist so that bulk registration can
/// recognize and skip them.
#[derive(Debug)]
pub struct TypeDef {
	/// Unique key of this type.
	pub key: TypeKey,
	/// Help text description.
	pub description: &'static str,
	/// Declared methods.
	pub methods: &'static [MethodSig],
	/// Declared state fields. Non-empty means the type is concrete.
	pub fields: &'static [&'static str],
}

impl TypeDef {
	/// Returns true if this type is a pure behavioral contract.
	pub const fn is_interface(&self) -> bool {
		self.fields.is_empty()
	}

	/// Looks up a method by name. With overloads present, returns the first
	/// declaration; use [`TypeDef::method_overload`] to disambiguate.
	pub fn method(&self, name: &str) -> Option<&'static MethodSig> {
		self.methods.iter().find(|m| m.name == name)
	}

	/// Looks up a method by name and arity.
	pub fn method_overload(&self, name: &str, arity: usize) -> Option<&'static MethodSig> {
		self.methods
			.iter()
			.find(|m| m.name == name && m.arity() == arity)
	}
}
