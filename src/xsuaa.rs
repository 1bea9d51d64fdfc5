//! Well-known XSUAA credential attributes.
//!
//! Values are exposed exactly as bound; nothing here checks that `url` is a URL or that
//! `verificationkey` is a key.

// self
use crate::{_prelude::*, binding::Credentials, secret::Secret};

/// OAuth client identifier.
pub const CLIENT_ID: &str = "clientid";
/// OAuth client secret.
pub const CLIENT_SECRET: &str = "clientsecret";
/// Base URL of the tenant's authorization server.
pub const URL: &str = "url";
/// Domain of the authorization server.
pub const UAA_DOMAIN: &str = "uaadomain";
/// Subdomain of the identity zone.
pub const IDENTITY_ZONE: &str = "identityzone";
/// Identity zone GUID.
pub const IDENTITY_ZONE_ID: &str = "identityzoneid";
/// Tenant GUID.
pub const TENANT_ID: &str = "tenantid";
/// Application name registered with the service.
pub const XS_APP_NAME: &str = "xsappname";
/// Fallback token verification key.
pub const VERIFICATION_KEY: &str = "verificationkey";
/// Client certificate for mTLS bindings.
pub const CERTIFICATE: &str = "certificate";
/// Private key for mTLS bindings.
pub const KEY: &str = "key";

/// Read-only view over the credentials of the XSUAA binding.
#[derive(Clone, Debug, PartialEq)]
pub struct XsuaaCredentials {
	credentials: Credentials,
}
impl XsuaaCredentials {
	/// Wraps the credentials of a resolved binding.
	pub fn new(credentials: Credentials) -> Self {
		Self { credentials }
	}

	/// `clientid`.
	pub fn client_id(&self) -> Option<String> {
		self.credentials.attribute(CLIENT_ID)
	}

	/// `clientsecret`, redacted in formatting.
	pub fn client_secret(&self) -> Option<Secret> {
		self.credentials.attribute(CLIENT_SECRET).map(|v| Secret::new(CLIENT_SECRET, v))
	}

	/// `url`.
	pub fn url(&self) -> Option<String> {
		self.credentials.attribute(URL)
	}

	/// `uaadomain`.
	pub fn uaa_domain(&self) -> Option<String> {
		self.credentials.attribute(UAA_DOMAIN)
	}

	/// `identityzone`.
	pub fn identity_zone(&self) -> Option<String> {
		self.credentials.attribute(IDENTITY_ZONE)
	}

	/// `identityzoneid`.
	pub fn identity_zone_id(&self) -> Option<String> {
		self.credentials.attribute(IDENTITY_ZONE_ID)
	}

	/// `tenantid`.
	pub fn tenant_id(&self) -> Option<String> {
		self.credentials.attribute(TENANT_ID)
	}

	/// `xsappname`.
	pub fn xs_app_name(&self) -> Option<String> {
		self.credentials.attribute(XS_APP_NAME)
	}

	/// `verificationkey`.
	pub fn verification_key(&self) -> Option<String> {
		self.credentials.attribute(VERIFICATION_KEY)
	}

	/// `certificate`.
	pub fn certificate(&self) -> Option<String> {
		self.credentials.attribute(CERTIFICATE)
	}

	/// `key`, redacted in formatting.
	pub fn key(&self) -> Option<Secret> {
		self.credentials.attribute(KEY).map(|v| Secret::new(KEY, v))
	}

	/// Any other attribute by name.
	pub fn attribute(&self, name: &str) -> Option<String> {
		self.credentials.attribute(name)
	}

	/// Underlying credentials object.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}
}
impl From<Credentials> for XsuaaCredentials {
	fn from(credentials: Credentials) -> Self {
		Self::new(credentials)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn accessors_read_well_known_keys() {
		let credentials: Credentials = serde_json::from_value(serde_json::json!({
			"clientid": "sb-app!t7",
			"clientsecret": "s3cr3t",
			"url": "https://tenant.authentication.eu10.hana.ondemand.com",
			"uaadomain": "authentication.eu10.hana.ondemand.com",
			"identityzone": "tenant",
			"xsappname": "app!t7",
			"custom": 12
		}))
		.expect("Credentials fixture should deserialize.");
		let xsuaa = XsuaaCredentials::from(credentials);

		assert_eq!(xsuaa.client_id().as_deref(), Some("sb-app!t7"));
		assert_eq!(xsuaa.client_secret().map(Secret::into_inner).as_deref(), Some("s3cr3t"));
		assert_eq!(xsuaa.uaa_domain().as_deref(), Some("authentication.eu10.hana.ondemand.com"));
		assert_eq!(xsuaa.identity_zone().as_deref(), Some("tenant"));
		assert_eq!(xsuaa.xs_app_name().as_deref(), Some("app!t7"));
		assert_eq!(xsuaa.attribute("custom").as_deref(), Some("12"));
		assert_eq!(xsuaa.verification_key(), None);
		assert_eq!(xsuaa.key(), None);
		assert!(!format!("{xsuaa:?}").contains("s3cr3t"));
	}

	#[test]
	fn url_is_returned_unvalidated() {
		let mut map = JsonMap::new();

		map.insert(URL.into(), JsonValue::String("not a url".into()));

		assert_eq!(XsuaaCredentials::from(Credentials::from(map)).url().as_deref(), Some("not a url"));
	}
}
