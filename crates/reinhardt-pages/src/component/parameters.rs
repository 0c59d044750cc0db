//! Bound parameter values handed to a component before it renders.

use crate::error::ParameterError;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Ordered mapping of input name to bound value.
///
/// Keys keep the order in which they were inserted. An input that is absent
/// from the set keeps the component's default value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundParameterSet {
	values: IndexMap<String, Value>,
}

impl BoundParameterSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Binds `name` to `value`, replacing any earlier value.
	pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
		self.values.insert(name.into(), value)
	}

	pub fn get(&self, name: &str) -> Option<&Value> {
		self.values.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.values.keys().map(String::as_str)
	}

	/// Deserializes the value bound to `name`, if any.
	pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, ParameterError> {
		let Some(value) = self.values.get(name) else {
			return Ok(None);
		};
		T::deserialize(value)
			.map(Some)
			.map_err(|source| ParameterError::Conversion {
				name: name.to_string(),
				expected: std::any::type_name::<T>(),
				source,
			})
	}

	/// Deserializes the value bound to `name`, failing when it is absent.
	pub fn require<T: DeserializeOwned>(&self, name: &str) -> Result<T, ParameterError> {
		self.get_as(name)?.ok_or_else(|| ParameterError::Missing {
			name: name.to_string(),
		})
	}

	/// Overwrites `target` with the value bound to `name`.
	///
	/// Returns `false` and leaves `target` untouched when nothing is bound.
	pub fn assign<T: DeserializeOwned>(
		&self,
		name: &str,
		target: &mut T,
	) -> Result<bool, ParameterError> {
		match self.get_as(name)? {
			Some(value) => {
				*target = value;
				Ok(true)
			}
			None => Ok(false),
		}
	}
}

impl FromIterator<(String, Value)> for BoundParameterSet {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self {
			values: iter.into_iter().collect(),
		}
	}
}
