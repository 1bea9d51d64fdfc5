//! Immutable storage for the raw service-binding descriptor.

// std
use std::{env, io::Read};
// self
use crate::{_prelude::*, obs};

/// Environment variable holding the platform's service-binding descriptor.
pub const VCAP_SERVICES: &str = "VCAP_SERVICES";

/// Where a [`Descriptor`] was captured from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DescriptorSource {
	/// Read from the named environment variable.
	Environment(String),
	/// Read from an injected byte stream.
	Stream,
	/// Supplied directly as text.
	Inline,
}
impl Display for DescriptorSource {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Environment(key) => write!(f, "environment variable `{key}`"),
			Self::Stream => f.write_str("input stream"),
			Self::Inline => f.write_str("inline text"),
		}
	}
}

/// Raw descriptor text captured once and never mutated.
///
/// Cloning is cheap; clones share the same text.
#[derive(Clone, PartialEq, Eq)]
pub struct Descriptor {
	text: Option<Arc<str>>,
	source: DescriptorSource,
}
impl Descriptor {
	/// Wraps descriptor text supplied by the caller.
	pub fn new(text: impl Into<String>) -> Self {
		Self::capture(text.into(), DescriptorSource::Inline)
	}

	/// Reads the descriptor from `VCAP_SERVICES`.
	///
	/// An unset or empty variable yields an empty descriptor rather than an error.
	pub fn from_env() -> Self {
		Self::from_env_var(VCAP_SERVICES)
	}

	/// Reads the descriptor from an arbitrary environment variable.
	///
	/// Values that are not valid Unicode are converted lossily; the replacement characters make
	/// the later parse fail instead of silently hiding the variable.
	pub fn from_env_var(key: impl AsRef<str>) -> Self {
		let key = key.as_ref();
		let text = env::var_os(key).map(|v| v.to_string_lossy().into_owned()).unwrap_or_default();

		Self::capture(text, DescriptorSource::Environment(key.to_owned()))
	}

	/// Reads the full stream as UTF-8.
	///
	/// Read failures and invalid UTF-8 surface immediately as [`Error::Io`].
	pub fn from_reader(mut reader: impl Read) -> Result<Self> {
		let mut text = String::new();

		reader.read_to_string(&mut text)?;

		Ok(Self::capture(text, DescriptorSource::Stream))
	}

	fn capture(text: String, source: DescriptorSource) -> Self {
		if text.trim().is_empty() {
			obs::warn_absent_descriptor(&source);

			return Self { text: None, source };
		}

		Self { text: Some(text.into()), source }
	}

	/// Returns true when no descriptor text was captured.
	pub fn is_empty(&self) -> bool {
		self.text.is_none()
	}

	/// Returns the captured text, if any.
	pub fn as_str(&self) -> Option<&str> {
		self.text.as_deref()
	}

	/// Returns where the descriptor was captured from.
	pub fn source(&self) -> &DescriptorSource {
		&self.source
	}
}
impl Debug for Descriptor {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		// The text embeds credentials.
		f.debug_struct("Descriptor")
			.field("source", &self.source)
			.field("len", &self.text.as_ref().map_or(0, |t| t.len()))
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::io::{self, ErrorKind};
	// self
	use super::*;

	struct FailingReader;
	impl Read for FailingReader {
		fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
			Err(io::Error::new(ErrorKind::ConnectionReset, "stream dropped"))
		}
	}

	#[test]
	fn blank_text_is_recorded_as_empty() {
		assert!(Descriptor::new("").is_empty());
		assert!(Descriptor::new(" \n\t").is_empty());
		assert!(!Descriptor::new("{}").is_empty());
	}

	#[test]
	fn reader_captures_full_contents() {
		let descriptor = Descriptor::from_reader(&b"{\"a\":[]}"[..])
			.expect("Reading from an in-memory slice should succeed.");

		assert_eq!(descriptor.as_str(), Some("{\"a\":[]}"));
		assert_eq!(descriptor.source(), &DescriptorSource::Stream);
	}

	#[test]
	fn empty_reader_is_not_an_error() {
		let descriptor = Descriptor::from_reader(io::empty())
			.expect("An empty stream should produce an empty descriptor.");

		assert!(descriptor.is_empty());
	}

	#[test]
	fn reader_failures_surface_as_io_errors() {
		let error = Descriptor::from_reader(FailingReader).expect_err("Failing reader must error.");

		assert!(matches!(error, Error::Io(ref e) if e.kind() == ErrorKind::ConnectionReset));
	}

	#[test]
	fn invalid_utf8_surfaces_as_io_error() {
		let error = Descriptor::from_reader(&b"\xff\xfe\xfd"[..])
			.expect_err("Invalid UTF-8 must be rejected.");

		assert!(matches!(error, Error::Io(ref e) if e.kind() == ErrorKind::InvalidData));
	}

	#[test]
	fn unset_variable_is_empty() {
		let descriptor = Descriptor::from_env_var("XSUAA_BINDING_TEST_DESCRIPTOR_NEVER_SET");

		assert!(descriptor.is_empty());
		assert_eq!(
			descriptor.source().to_string(),
			"environment variable `XSUAA_BINDING_TEST_DESCRIPTOR_NEVER_SET`"
		);
	}

	#[test]
	fn debug_hides_descriptor_text() {
		let descriptor = Descriptor::new(r#"{"x":[{"credentials":{"clientsecret":"s3cr3t"}}]}"#);
		let rendered = format!("{descriptor:?}");

		assert!(!rendered.contains("s3cr3t"));
		assert!(rendered.contains("Inline"));
	}
}
