// self
use crate::_prelude::*;

/// String-keyed credential attributes of a binding.
///
/// `Debug` lists the keys only; values are credentials.
#[derive(Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Credentials(JsonMap<String, JsonValue>);
impl Credentials {
	/// Reads an attribute as a string.
	///
	/// Strings are returned verbatim, numbers and booleans as their JSON text, and nested
	/// objects or arrays as compact JSON. Missing keys and `null` are both absent.
	pub fn attribute(&self, name: &str) -> Option<String> {
		match self.0.get(name)? {
			JsonValue::Null => None,
			JsonValue::String(s) => Some(s.clone()),
			other => Some(other.to_string()),
		}
	}

	/// Returns the raw JSON value stored under `name`.
	pub fn raw(&self, name: &str) -> Option<&JsonValue> {
		self.0.get(name)
	}

	/// Checks whether `name` holds a non-null value.
	pub fn contains(&self, name: &str) -> bool {
		self.0.get(name).is_some_and(|v| !v.is_null())
	}

	/// Iterates the attribute names.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// Number of attributes, including `null` ones.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when the object has no attributes.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_set().entries(self.keys()).finish()
	}
}
impl From<JsonMap<String, JsonValue>> for Credentials {
	fn from(map: JsonMap<String, JsonValue>) -> Self {
		Self(map)
	}
}
