//! Error types surfaced while loading descriptors and resolving bindings.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
///
/// Absent configuration is never reported here; lookups return `Ok(None)` instead.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Descriptor stream could not be read.
	#[error("Failed to read the service descriptor.")]
	Io(#[from] std::io::Error),
	/// Descriptor text is not valid JSON.
	#[error("Service descriptor is not valid JSON.")]
	Parse {
		/// Underlying JSON syntax failure.
		#[source]
		source: serde_json::Error,
	},
	/// Descriptor is inconsistent with the expected binding layout.
	#[error(transparent)]
	Config(#[from] ConfigError),
}
impl Error {
	/// Returns true when the failure originates from malformed JSON text.
	pub fn is_parse(&self) -> bool {
		matches!(self, Self::Parse { .. })
	}

	/// Returns true when the failure indicates an inconsistent platform configuration.
	pub fn is_config(&self) -> bool {
		matches!(self, Self::Config(_))
	}
}
impl From<serde_json::Error> for Error {
	fn from(source: serde_json::Error) -> Self {
		Self::Parse { source }
	}
}

/// Configuration failures detected in an otherwise well-formed descriptor.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// More than one binding carries the requested tag.
	#[error(
		"Multiple {tag} bindings found (in `{first}` and `{second}`); exactly one is required."
	)]
	MultipleBindings {
		/// Tag that matched more than once.
		tag: &'static str,
		/// Service-type group holding the first match.
		first: String,
		/// Service-type group holding the second match.
		second: String,
	},
	/// Descriptor JSON does not map service types to arrays of binding objects.
	#[error("Service descriptor has an unexpected shape at `{}`.", .source.path())]
	UnexpectedShape {
		/// Structured projection failure, including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ConfigError {
	fn from(source: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::UnexpectedShape { source }
	}
}
