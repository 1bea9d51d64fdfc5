//! Locate the single XSUAA service binding inside a Cloud Foundry `VCAP_SERVICES` descriptor
//! and read raw credential attributes from it.
//!
//! ```
//! use xsuaa_binding::{Descriptor, resolver::BindingResolver};
//!
//! let descriptor =
//! 	Descriptor::new(r#"{"xsuaa":[{"tags":["xsuaa"],"credentials":{"clientid":"abc"}}]}"#);
//! let resolver = BindingResolver::from_descriptor(descriptor);
//!
//! assert_eq!(resolver.attribute("clientid").unwrap().as_deref(), Some("abc"));
//! assert_eq!(resolver.attribute("clientsecret").unwrap(), None);
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod binding;
pub mod descriptor;
pub mod error;
pub mod obs;
pub mod resolver;
pub mod secret;
pub mod xsuaa;

pub use binding::{Credentials, ServiceBinding, ServiceCatalog, XSUAA_TAG};
pub use descriptor::{Descriptor, DescriptorSource, VCAP_SERVICES};
pub use error::{ConfigError, Error, Result};
pub use resolver::BindingResolver;
pub use secret::Secret;
pub use xsuaa::XsuaaCredentials;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		sync::Arc,
	};

	pub use serde::Deserialize;
	pub use serde_json::{Map as JsonMap, Value as JsonValue};
	pub use thiserror::Error as ThisError;

	pub use crate::error::{Error, Result};
}

#[cfg(test)] use color_eyre as _;
