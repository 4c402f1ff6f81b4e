//! Flat configuration maps.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A flat mapping of string keys to string values.
///
/// This is the shape configuration sources produce: interceptor options,
/// driver settings, and the like. Type coercion is left to the consuming
/// component; `Props` stores strings only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Props(FxHashMap<String, String>);

impl Props {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a key, replacing any previous value.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.0.insert(key.into(), value.into());
		self
	}

	/// Returns the value for a key, if present.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	/// Returns true if the key is present.
	pub fn contains(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if there are no entries.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over entries in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Props {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut props = Self::new();
		for (k, v) in iter {
			props.set(k, v);
		}
		props
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn set_get_replace() {
		let mut props = Props::new();
		props.set("pool.size", "8");
		props.set("pool.size", "16");
		assert_eq!(props.get("pool.size"), Some("16"));
		assert_eq!(props.get("missing"), None);
		assert_eq!(props.len(), 1);
	}

	#[test]
	fn from_iter_collects() {
		let props: Props = [("a", "1"), ("b", "2")].into_iter().collect();
		assert!(props.contains("a"));
		assert!(props.contains("b"));
		assert!(!props.is_empty());
	}
}
