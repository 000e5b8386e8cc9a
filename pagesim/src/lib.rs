//! Page replacement simulator (`pagesim`)
//!
//! Replays a trace of page references through several page replacement
//! policies, counting page faults and sampling the fault rate as the trace
//! is consumed.

// Modules
pub mod data;
pub mod policies;
pub mod report;
pub mod sampler;
pub mod sim;
pub mod trace;

// Exports
pub use self::{
	policies::{Policy, PolicyKind},
	report::Report,
	sampler::FaultRateSampler,
	sim::{RunOutput, Simulator},
	trace::{PageId, Trace},
};

// Imports
use std::num::NonZeroUsize;

/// Simulates `policy` over `trace` with `frame_size` frames, using the default simulator
pub fn simulate(policy: PolicyKind, trace: &Trace, frame_size: NonZeroUsize) -> RunOutput {
	policy.run(&Simulator::default(), trace, frame_size)
}
