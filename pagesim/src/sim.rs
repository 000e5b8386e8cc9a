//! Simulator

// Imports
use {
	crate::{
		policies::{Access, Policy},
		sampler::FaultRateSampler,
		trace::Trace,
	},
	itertools::Itertools,
	std::{
		num::NonZeroUsize,
		time::{Duration, Instant},
	},
};

/// Simulator
#[derive(Clone, Debug)]
pub struct Simulator {
	/// Fault-rate sample interval, in references
	sample_interval: NonZeroUsize,

	/// Debug output period
	///
	/// Interval in which to output debug output for the policy
	debug_output_period: Duration,
}

impl Simulator {
	/// Creates a new simulator
	pub fn new(sample_interval: NonZeroUsize, debug_output_period: Duration) -> Self {
		Self {
			sample_interval,
			debug_output_period,
		}
	}

	/// Returns the fault-rate sample interval
	pub fn sample_interval(&self) -> NonZeroUsize {
		self.sample_interval
	}

	/// Runs the simulator on all references of `trace` with policy `policy`
	pub fn run<P: Policy>(&self, trace: &Trace, policy: &mut P) -> RunOutput {
		// Note: We start in the past so that we output right away at the start
		let mut last_debug_time = Instant::now()
			.checked_sub(self.debug_output_period)
			.unwrap_or_else(Instant::now);

		let policy_name = policy.name();
		let pages = trace.as_slice();
		let mut sampler = FaultRateSampler::new(self.sample_interval);
		let mut faults = 0;
		for (page_idx, &page) in pages.iter().enumerate() {
			if let Access::Fault { evicted } = policy.access(page, &pages[page_idx + 1..]) {
				tracing::trace!(policy = policy_name, page_idx, page, ?evicted, "Page fault");
				faults += 1;
			}
			debug_assert!(
				policy.resident_len() <= policy.frame_size().get(),
				"Policy {policy_name} exceeded its frame size"
			);

			sampler.record(page_idx, faults);

			// Then show debug output, if it's been long enough
			let cur_time = Instant::now();
			if cur_time.duration_since(last_debug_time) >= self.debug_output_period {
				let pages_processed_percentage = 100.0 * (page_idx as f64 / pages.len() as f64);
				tracing::info!(
					"[{pages_processed_percentage:.2}%] {}: {faults} faults, {}",
					policy_name,
					pagesim_util::DisplayWrapper::new(|f| policy.fmt_debug(f))
				);
				last_debug_time = cur_time;
			}
		}

		let output = RunOutput {
			faults,
			fault_rates: sampler.finish(faults, pages.len()),
		};
		tracing::debug!(policy = policy_name, "Finished: {}", output.summary());

		output
	}
}

impl Default for Simulator {
	fn default() -> Self {
		Self::new(FaultRateSampler::DEFAULT_INTERVAL, Duration::from_secs(1))
	}
}

/// Output for [`Simulator::run`]
#[derive(PartialEq, Clone, Debug)]
pub struct RunOutput {
	/// Total faults
	pub faults: usize,

	/// Sampled fault rates, in trace order.
	///
	/// The last sample, if any, is over the whole trace.
	pub fault_rates: Vec<f64>,
}

impl RunOutput {
	/// Returns the fault rate over the whole trace, if it wasn't empty
	pub fn final_fault_rate(&self) -> Option<f64> {
		self.fault_rates.last().copied()
	}

	/// Returns a one-line summary of the fault rates
	pub fn summary(&self) -> String {
		let fault_rates = self.fault_rates.iter().copied().collect::<average::Variance>();
		match self.fault_rates.iter().copied().minmax().into_option() {
			Some((min, max)) => format!(
				"{} faults, fault rate {:.4} ± {:.4} ({min:.4}..{max:.4})",
				self.faults,
				fault_rates.mean(),
				fault_rates.error(),
			),
			None => format!("{} faults", self.faults),
		}
	}
}

#[cfg(test)]
mod tests {
	use {
		super::*,
		crate::policies::{Fifo, Lru},
	};

	#[test]
	fn samples_every_interval_then_final() {
		let sim = Simulator::new(NonZeroUsize::new(2).expect("Nonzero"), Duration::MAX);
		let trace = Trace::new(vec![1, 2, 1, 3, 4]);
		let output = sim.run(&trace, &mut Fifo::new(NonZeroUsize::new(2).expect("Nonzero")));

		// Faults: 1, 2, -, 3 (evicts 1), 4 (evicts 2)
		// Samples at idx 2 (2 faults) and idx 4 (4 faults), then 4 / 5 over the whole trace.
		assert_eq!(output.faults, 4);
		assert_eq!(output.fault_rates, [1.0, 1.0, 0.8]);
		assert_eq!(output.final_fault_rate(), Some(0.8));
	}

	#[test]
	fn empty_trace() {
		let output = Simulator::default().run(&Trace::default(), &mut Lru::new(NonZeroUsize::MIN));
		assert_eq!(output, RunOutput {
			faults:      0,
			fault_rates: vec![],
		});
		assert_eq!(output.final_fault_rate(), None);
		assert_eq!(output.summary(), "0 faults");
	}
}
