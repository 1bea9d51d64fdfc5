//! Optional observability helpers for binding lookups.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit spans named `xsuaa_binding.lookup` with a `stage` field, a warning
//!   whenever an empty descriptor is captured, and a debug event for missing attributes.
//! - Enable `metrics` to increment the `xsuaa_binding_lookup_total` counter for every lookup,
//!   labeled by `stage` + `outcome`.
//!
//! Credential values are never recorded.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Resolver operations observed by the helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LookupStage {
	/// Single attribute lookup.
	Attribute,
	/// Binding search without attribute lookup.
	Binding,
	/// Credentials object lookup.
	Credentials,
}
impl LookupStage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			LookupStage::Attribute => "attribute",
			LookupStage::Binding => "binding",
			LookupStage::Credentials => "credentials",
		}
	}
}
impl Display for LookupStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LookupOutcome {
	/// A value was returned.
	Found,
	/// Nothing was configured for the request.
	Absent,
	/// Parse or configuration failure propagated back to the caller.
	Failure,
}
impl LookupOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			LookupOutcome::Found => "found",
			LookupOutcome::Absent => "absent",
			LookupOutcome::Failure => "failure",
		}
	}

	/// Classifies a lookup result.
	pub fn of<T>(result: &Result<Option<T>>) -> Self {
		match result {
			Ok(Some(_)) => Self::Found,
			Ok(None) => Self::Absent,
			Err(_) => Self::Failure,
		}
	}
}
impl Display for LookupOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
