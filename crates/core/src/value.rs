//! Owned runtime values passed across contract boundaries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An owned runtime value.
///
/// Arguments and results of bound calls are carried as `Value`s so that
/// dispatchers and interceptors can handle any contract uniformly. The
/// variants mirror [`crate::ParamType`]; `Named` parameters are carried as
/// whichever structural variant the backend chose for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// No value.
	Unit,
	/// Boolean.
	Bool(bool),
	/// Signed 64-bit integer.
	Int(i64),
	/// 64-bit float.
	Float(f64),
	/// UTF-8 string.
	Str(String),
	/// Raw bytes.
	Bytes(Vec<u8>),
	/// Ordered list of values.
	List(Vec<Value>),
	/// String-keyed map of values.
	Map(BTreeMap<String, Value>),
}

impl Value {
	/// Returns the string payload, if this is a `Str`.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the integer payload, if this is an `Int`.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Self::Int(n) => Some(*n),
			_ => None,
		}
	}

	/// Returns the boolean payload, if this is a `Bool`.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(b) => Some(*b),
			_ => None,
		}
	}
}

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Self::Str(s.to_owned())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Self::Str(s)
	}
}

impl From<i64> for Value {
	fn from(n: i64) -> Self {
		Self::Int(n)
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Self::Bool(b)
	}
}

impl From<()> for Value {
	fn from(_: ()) -> Self {
		Self::Unit
	}
}
