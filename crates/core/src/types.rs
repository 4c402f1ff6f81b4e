//! Identifier types for component types and method parameters.

/// Identifier for a component or contract type.
///
/// Keys are expected to be unique within a registry and are conventionally
/// namespaced (e.g. `"demo::Greeter"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey(pub &'static str);

impl TypeKey {
	/// Returns the raw key string.
	pub const fn as_str(self) -> &'static str {
		self.0
	}
}

impl core::fmt::Display for TypeKey {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.0)
	}
}

/// Type identifier for a method parameter or return slot.
///
/// Signature matching compares these for exact equality; there is no
/// coercion or subtype relation between variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
	/// No value.
	Unit,
	/// Boolean.
	Bool,
	/// Signed 64-bit integer.
	Int,
	/// 64-bit float.
	Float,
	/// UTF-8 string.
	Str,
	/// Raw bytes.
	Bytes,
	/// Ordered list of values.
	List,
	/// String-keyed map of values.
	Map,
	/// A named component or domain type.
	Named(&'static str),
}

impl core::fmt::Display for ParamType {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Unit => f.write_str("unit"),
			Self::Bool => f.write_str("bool"),
			Self::Int => f.write_str("int"),
			Self::Float => f.write_str("float"),
			Self::Str => f.write_str("str"),
			Self::Bytes => f.write_str("bytes"),
			Self::List => f.write_str("list"),
			Self::Map => f.write_str("map"),
			Self::Named(name) => write!(f, "named:{name}"),
		}
	}
}
