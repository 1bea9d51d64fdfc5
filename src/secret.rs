//! Redacting wrapper for sensitive credential attributes.

// self
use crate::_prelude::*;

/// Credential attribute whose value never renders through `Debug` or `Display`.
///
/// Formatting names the attribute so logs still show which credential was involved.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret {
	attribute: &'static str,
	value: String,
}
impl Secret {
	/// Wraps the value read from the credential attribute `attribute`.
	pub fn new(attribute: &'static str, value: impl Into<String>) -> Self {
		Self { attribute, value: value.into() }
	}

	/// Credential attribute the value was read from.
	pub fn attribute(&self) -> &'static str {
		self.attribute
	}

	/// Returns the inner value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.value
	}

	/// Consumes the wrapper, returning the inner value.
	pub fn into_inner(self) -> String {
		self.value
	}
}
impl AsRef<str> for Secret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Secret")
			.field("attribute", &self.attribute)
			.field("value", &"<redacted>")
			.finish()
	}
}
impl Display for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{}=<redacted>", self.attribute)
	}
}
