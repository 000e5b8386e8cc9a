//! Fault-rate sampler

// Imports
use std::num::NonZeroUsize;

/// Fault-rate sampler.
///
/// Records the cumulative fault rate every `interval` references, by trace
/// position, plus a final sample over the whole trace.
#[derive(Clone, Debug)]
pub struct FaultRateSampler {
	/// Sample interval, in references
	interval: NonZeroUsize,

	/// Samples so far
	fault_rates: Vec<f64>,
}

impl FaultRateSampler {
	/// Default sample interval
	pub const DEFAULT_INTERVAL: NonZeroUsize = match NonZeroUsize::new(2000) {
		Some(interval) => interval,
		None => unreachable!(),
	};

	/// Creates a new sampler
	pub fn new(interval: NonZeroUsize) -> Self {
		Self {
			interval,
			fault_rates: vec![],
		}
	}

	/// Records a sample after processing reference `idx`, if it lies on the interval.
	///
	/// `faults` are the faults so far, including those of reference `idx`.
	pub fn record(&mut self, idx: usize, faults: usize) {
		if idx > 0 && idx % self.interval == 0 {
			self.fault_rates.push(faults as f64 / idx as f64);
		}
	}

	/// Returns the samples recorded so far
	pub fn fault_rates(&self) -> &[f64] {
		&self.fault_rates
	}

	/// Finishes sampling, recording the final fault rate over the whole trace.
	///
	/// An empty trace yields no samples at all.
	pub fn finish(mut self, total_faults: usize, trace_len: usize) -> Vec<f64> {
		if trace_len > 0 {
			self.fault_rates.push(total_faults as f64 / trace_len as f64);
		}

		self.fault_rates
	}
}

/// Returns the number of references covered by each of `samples` samples.
///
/// All samples but the last lie on the interval, while the last covers the whole trace.
pub fn sample_positions(interval: NonZeroUsize, trace_len: usize, samples: usize) -> impl Iterator<Item = usize> {
	(0..samples).map(move |sample_idx| match sample_idx + 1 == samples {
		true => trace_len,
		false => (sample_idx + 1) * interval.get(),
	})
}

impl Default for FaultRateSampler {
	fn default() -> Self {
		Self::new(Self::DEFAULT_INTERVAL)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn samples_on_interval_only() {
		let mut sampler = FaultRateSampler::new(NonZeroUsize::new(4).expect("Nonzero"));
		for idx in 0..10 {
			sampler.record(idx, idx / 2 + 1);
		}

		// Samples at 4 (3 faults) and 8 (5 faults)
		assert_eq!(sampler.fault_rates(), [0.75, 0.625]);
		assert_eq!(sampler.finish(5, 10), [0.75, 0.625, 0.5]);
	}

	#[test]
	fn index_zero_is_never_sampled() {
		let mut sampler = FaultRateSampler::new(NonZeroUsize::new(1).expect("Nonzero"));
		sampler.record(0, 1);
		assert!(sampler.fault_rates().is_empty());
	}

	#[test]
	fn positions_end_at_trace_len() {
		let interval = NonZeroUsize::new(2000).expect("Nonzero");
		assert_eq!(sample_positions(interval, 5000, 3).collect::<Vec<_>>(), [2000, 4000, 5000]);
		assert_eq!(sample_positions(interval, 1999, 1).collect::<Vec<_>>(), [1999]);
		assert_eq!(sample_positions(interval, 0, 0).count(), 0);
	}

	#[test]
	fn empty_trace_has_no_samples() {
		assert!(FaultRateSampler::default().finish(0, 0).is_empty());
	}
}
