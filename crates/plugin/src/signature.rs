//! Declared method signatures.

use graft_core::{MethodSig, ParamType, TypeKey};

/// Exact identification of one interceptable method overload.
///
/// A signature activates only on exact equality of component type key,
/// method name, and the full ordered parameter list (including arity).
/// There is deliberately no covariance and no partial matching: a fuzzy
/// match would silently intercept the wrong overload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature {
	/// Component type this signature targets.
	pub target: TypeKey,
	/// Method name.
	pub method: &'static str,
	/// Ordered parameter types of the targeted overload.
	pub params: &'static [ParamType],
}

impl Signature {
	/// Declares a signature.
	pub const fn new(
		target: TypeKey,
		method: &'static str,
		params: &'static [ParamType],
	) -> Self {
		Self {
			target,
			method,
			params,
		}
	}

	/// Returns true if this signature identifies `method` on the component
	/// type `target`.
	pub fn matches(&self, target: TypeKey, method: &MethodSig) -> bool {
		self.target == target && self.method == method.name && self.params == method.params
	}
}

impl core::fmt::Display for Signature {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "{}::{}(", self.target, self.method)?;
		for (i, p) in self.params.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{p}")?;
		}
		f.write_str(")")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const COMPONENT_X: TypeKey = TypeKey("test::ComponentX");
	const COMPONENT_Y: TypeKey = TypeKey("test::ComponentY");

	static UPDATE_INT_STR: MethodSig = MethodSig {
		name: "update",
		params: &[ParamType::Int, ParamType::Str],
		ret: ParamType::Unit,
	};
	static UPDATE_INT: MethodSig = MethodSig {
		name: "update",
		params: &[ParamType::Int],
		ret: ParamType::Unit,
	};
	static UPDATE_STR_INT: MethodSig = MethodSig {
		name: "update",
		params: &[ParamType::Str, ParamType::Int],
		ret: ParamType::Unit,
	};

	#[test]
	fn exact_match_activates() {
		let sig = Signature::new(COMPONENT_X, "update", &[ParamType::Int, ParamType::Str]);
		assert!(sig.matches(COMPONENT_X, &UPDATE_INT_STR));
	}

	#[test]
	fn arity_and_order_are_strict() {
		let sig = Signature::new(COMPONENT_X, "update", &[ParamType::Int, ParamType::Str]);
		assert!(!sig.matches(COMPONENT_X, &UPDATE_INT));
		assert!(!sig.matches(COMPONENT_X, &UPDATE_STR_INT));
	}

	#[test]
	fn component_type_is_strict() {
		let sig = Signature::new(COMPONENT_Y, "update", &[ParamType::Int, ParamType::Str]);
		assert!(!sig.matches(COMPONENT_X, &UPDATE_INT_STR));
	}

	#[test]
	fn method_name_is_strict() {
		let sig = Signature::new(COMPONENT_X, "upsert", &[ParamType::Int, ParamType::Str]);
		assert!(!sig.matches(COMPONENT_X, &UPDATE_INT_STR));
	}
}
