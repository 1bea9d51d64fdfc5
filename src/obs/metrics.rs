// self
use crate::obs::{LookupOutcome, LookupStage};

/// Records a lookup outcome via the global metrics recorder (when enabled).
pub fn record_lookup_outcome(stage: LookupStage, outcome: LookupOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"xsuaa_binding_lookup_total",
			"stage" => stage.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (stage, outcome);
	}
}
