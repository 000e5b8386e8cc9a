//! Configuration

// Imports
use {
	pagesim::{FaultRateSampler, PolicyKind},
	std::num::NonZeroUsize,
};

/// Configuration
#[derive(Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Fault-rate sample interval, in references
	pub sample_interval: NonZeroUsize,

	/// Debug output period (in seconds)
	pub debug_output_period_secs: f64,

	/// Policies to simulate, in report order
	pub policies: Vec<PolicyKind>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			sample_interval:          FaultRateSampler::DEFAULT_INTERVAL,
			debug_output_period_secs: 1.0,
			policies:                 PolicyKind::ALL.to_vec(),
		}
	}
}
