//! Resolver answering credential queries against the unique XSUAA binding.

// std
use std::io::Read;
// self
use crate::{
	_prelude::*,
	binding::{Credentials, ServiceBinding, ServiceCatalog, XSUAA_TAG},
	descriptor::Descriptor,
	obs::{self, LookupOutcome, LookupSpan, LookupStage},
	xsuaa::XsuaaCredentials,
};

/// Looks up attributes of the binding tagged `xsuaa`.
///
/// The descriptor is captured once at construction and every query re-parses that same
/// snapshot, so concurrent queries need no synchronization and always agree with each other.
#[derive(Clone, Debug)]
pub struct BindingResolver {
	descriptor: Descriptor,
}
impl BindingResolver {
	/// Captures the descriptor from `VCAP_SERVICES`.
	pub fn from_env() -> Self {
		Self::from_descriptor(Descriptor::from_env())
	}

	/// Captures the descriptor from the named environment variable.
	pub fn from_env_var(key: impl AsRef<str>) -> Self {
		Self::from_descriptor(Descriptor::from_env_var(key))
	}

	/// Captures the descriptor from a UTF-8 stream.
	pub fn from_reader(reader: impl Read) -> Result<Self> {
		Ok(Self::from_descriptor(Descriptor::from_reader(reader)?))
	}

	/// Wraps an existing descriptor.
	pub fn from_descriptor(descriptor: Descriptor) -> Self {
		Self { descriptor }
	}

	/// Returns the captured descriptor.
	pub fn descriptor(&self) -> &Descriptor {
		&self.descriptor
	}

	/// Reads the credential attribute `name` from the XSUAA binding.
	///
	/// `Ok(None)` covers every flavour of absent configuration: an empty descriptor, no XSUAA
	/// binding, a binding without credentials, or an unknown attribute. Malformed JSON fails with
	/// [`Error::Parse`]; a second XSUAA binding or a mis-shaped descriptor fails with
	/// [`Error::Config`].
	pub fn attribute(&self, name: &str) -> Result<Option<String>> {
		self.observe(LookupStage::Attribute, || {
			let Some(credentials) = self.lookup_credentials()? else {
				return Ok(None);
			};
			let value = credentials.attribute(name);

			if value.is_none() {
				obs::debug_missing_attribute(name);
			}

			Ok(value)
		})
	}

	/// Returns the XSUAA binding, if the descriptor holds exactly one.
	pub fn binding(&self) -> Result<Option<ServiceBinding>> {
		self.observe(LookupStage::Binding, || self.lookup_binding())
	}

	/// Returns the full credentials object of the XSUAA binding.
	pub fn credentials(&self) -> Result<Option<Credentials>> {
		self.observe(LookupStage::Credentials, || self.lookup_credentials())
	}

	/// Returns the XSUAA credentials as a typed view.
	pub fn xsuaa(&self) -> Result<Option<XsuaaCredentials>> {
		Ok(self.credentials()?.map(XsuaaCredentials::new))
	}

	fn lookup_credentials(&self) -> Result<Option<Credentials>> {
		Ok(self.lookup_binding()?.and_then(|binding| binding.credentials))
	}

	fn lookup_binding(&self) -> Result<Option<ServiceBinding>> {
		let Some(text) = self.descriptor.as_str() else {
			return Ok(None);
		};
		let catalog = ServiceCatalog::parse(text)?;

		Ok(catalog.find_unique(XSUAA_TAG)?.map(|(_, binding)| binding.clone()))
	}

	fn observe<T, F>(&self, stage: LookupStage, f: F) -> Result<Option<T>>
	where
		F: FnOnce() -> Result<Option<T>>,
	{
		let _guard = LookupSpan::new(stage).entered();
		let result = f();

		obs::record_lookup_outcome(stage, LookupOutcome::of(&result));

		result
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::ConfigError;

	fn resolver(text: &str) -> BindingResolver {
		BindingResolver::from_descriptor(Descriptor::new(text))
	}

	#[test]
	fn resolver_is_shareable_across_threads() {
		fn assert_send_sync<T: Send + Sync>() {}

		assert_send_sync::<BindingResolver>();
	}

	#[test]
	fn single_binding_answers_known_and_unknown_keys() {
		let resolver = resolver(r#"{"xsuaa":[{"tags":["xsuaa"],"credentials":{"clientid":"abc"}}]}"#);

		assert_eq!(
			resolver.attribute("clientid").expect("Lookup should succeed.").as_deref(),
			Some("abc")
		);
		assert_eq!(resolver.attribute("clientsecret").expect("Lookup should succeed."), None);
	}

	#[test]
	fn binding_without_credentials_is_absent() {
		let resolver = resolver(r#"{"xsuaa":[{"tags":["xsuaa"]}]}"#);

		assert!(resolver.binding().expect("Lookup should succeed.").is_some());
		assert_eq!(resolver.credentials().expect("Lookup should succeed."), None);
		assert_eq!(resolver.attribute("clientid").expect("Lookup should succeed."), None);
	}

	#[test]
	fn duplicate_bindings_fail_for_every_name() {
		let resolver = resolver(
			r#"{"a":[{"tags":["xsuaa"],"credentials":{}}],"b":[{"tags":["xsuaa"],"credentials":{}}]}"#,
		);

		for name in ["x", "clientid", ""] {
			let error = resolver.attribute(name).expect_err("Duplicate bindings must fail.");

			assert!(matches!(error, Error::Config(ConfigError::MultipleBindings { .. })));
		}
	}

	#[test]
	fn empty_descriptor_never_errors() {
		let resolver = resolver("");

		assert_eq!(resolver.attribute("clientid").expect("Empty is not an error."), None);
		assert_eq!(resolver.binding().expect("Empty is not an error."), None);
		assert_eq!(resolver.xsuaa().expect("Empty is not an error."), None);
	}

	#[test]
	fn malformed_json_is_a_parse_error() {
		let error = resolver("{\"xsuaa\": [").attribute("clientid").expect_err("Must fail.");

		assert!(error.is_parse());
	}

	#[test]
	fn xsuaa_view_reads_resolved_credentials() {
		let resolver = resolver(
			r#"{"user-provided":[{"tags":[],"credentials":{"clientid":"other"}}],
			   "xsuaa":[{"tags":["xsuaa"],"credentials":{"clientid":"sb-app","clientsecret":"pw"}}]}"#,
		);
		let xsuaa = resolver
			.xsuaa()
			.expect("Lookup should succeed.")
			.expect("The XSUAA binding carries credentials.");

		assert_eq!(xsuaa.client_id().as_deref(), Some("sb-app"));
		assert_eq!(xsuaa.client_secret().map(|s| s.expose().to_owned()).as_deref(), Some("pw"));
	}
}
