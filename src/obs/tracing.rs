// self
use crate::{_prelude::*, descriptor::DescriptorSource, obs::LookupStage};

/// A span wrapping one resolver lookup.
#[derive(Clone, Debug)]
pub struct LookupSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl LookupSpan {
	/// Creates a new span tagged with the provided stage.
	pub fn new(stage: LookupStage) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("xsuaa_binding.lookup", stage = stage.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self {}
		}
	}

	/// Enters the span for the remainder of the lookup.
	pub fn entered(self) -> LookupSpanGuard {
		#[cfg(feature = "tracing")]
		{
			LookupSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			LookupSpanGuard {}
		}
	}
}

/// RAII guard returned by [`LookupSpan::entered`].
pub struct LookupSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for LookupSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("LookupSpanGuard(..)")
	}
}

/// Warns that an empty descriptor was captured.
pub fn warn_absent_descriptor(source: &DescriptorSource) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(%source, "No service descriptor found; every lookup will be absent.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = source;
	}
}

/// Notes that the resolved binding has no attribute with the given name.
pub fn debug_missing_attribute(name: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(attribute = name, "XSUAA binding has no such attribute.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = name;
	}
}
