//! Typed projection of the descriptor and the unique-binding search.
//!
//! The descriptor is first parsed into a generic [`JsonValue`] so that syntax errors and shape
//! mismatches stay distinguishable, then projected into a [`ServiceCatalog`]:
//!
//! ```text
//! { "<service-type>": [ { "tags": [..], "credentials": { .. }, .. }, .. ], .. }
//! ```

/// Credentials object attached to a binding.
pub mod credentials;

pub use credentials::*;

// self
use crate::{_prelude::*, error::ConfigError};

/// Tag marking the authentication service binding.
pub const XSUAA_TAG: &str = "xsuaa";

/// Service-type name mapped to the bindings grouped under it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ServiceCatalog(BTreeMap<String, Vec<ServiceBinding>>);
impl ServiceCatalog {
	/// Parses descriptor text and projects it into a catalog.
	pub fn parse(text: &str) -> Result<Self> {
		let value = serde_json::from_str::<JsonValue>(text)?;

		Ok(Self::from_value(value)?)
	}

	/// Projects an already parsed JSON value into a catalog.
	pub fn from_value(value: JsonValue) -> Result<Self, ConfigError> {
		Ok(serde_path_to_error::deserialize(value)?)
	}

	/// Finds the single binding carrying `tag` across every service-type group.
	///
	/// Returns the group name alongside the binding. A second match anywhere in the catalog
	/// fails immediately with [`ConfigError::MultipleBindings`].
	pub fn find_unique(
		&self,
		tag: &'static str,
	) -> Result<Option<(&str, &ServiceBinding)>, ConfigError> {
		let mut found = None::<(&str, &ServiceBinding)>;

		for (group, binding) in self.bindings() {
			if !binding.has_tag(tag) {
				continue;
			}
			if let Some((first, _)) = found {
				return Err(ConfigError::MultipleBindings {
					tag,
					first: first.to_owned(),
					second: group.to_owned(),
				});
			}

			found = Some((group, binding));
		}

		Ok(found)
	}

	/// Iterates every binding paired with its service-type group name.
	pub fn bindings(&self) -> impl Iterator<Item = (&str, &ServiceBinding)> {
		self.0
			.iter()
			.flat_map(|(group, bindings)| bindings.iter().map(move |b| (group.as_str(), b)))
	}

	/// Returns true when the catalog lists no groups.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// One bound service instance.
///
/// Only `tags` and `credentials` are shape-checked; the descriptive fields are kept raw so an
/// odd value in an unrelated binding cannot fail the lookup.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ServiceBinding {
	#[serde(default)]
	name: Option<JsonValue>,
	#[serde(default)]
	label: Option<JsonValue>,
	#[serde(default)]
	plan: Option<JsonValue>,
	#[serde(default)]
	tags: Option<Vec<JsonValue>>,
	/// Credentials object, when the binding carries one.
	#[serde(default)]
	pub credentials: Option<Credentials>,
}
impl ServiceBinding {
	/// Instance name chosen when the service was bound, when it is a string.
	pub fn name(&self) -> Option<&str> {
		self.name.as_ref().and_then(JsonValue::as_str)
	}

	/// Service offering label, when it is a string.
	pub fn label(&self) -> Option<&str> {
		self.label.as_ref().and_then(JsonValue::as_str)
	}

	/// Service plan, when it is a string.
	pub fn plan(&self) -> Option<&str> {
		self.plan.as_ref().and_then(JsonValue::as_str)
	}

	/// Iterates the string tags; non-string entries are skipped.
	pub fn tags(&self) -> impl Iterator<Item = &str> {
		self.tags.iter().flatten().filter_map(JsonValue::as_str)
	}

	/// Checks for an exact, case-sensitive tag match.
	pub fn has_tag(&self, tag: &str) -> bool {
		self.tags().any(|t| t == tag)
	}
}
