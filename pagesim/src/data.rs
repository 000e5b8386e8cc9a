//! Output data

// Imports
use {
	crate::{policies::PolicyKind, report::Report, sampler},
	std::num::NonZeroUsize,
};

/// Output data
#[derive(PartialEq, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Data {
	pub frame_size:      NonZeroUsize,
	pub trace_len:       usize,
	pub distinct_pages:  usize,
	pub sample_interval: NonZeroUsize,
	pub policies:        Vec<PolicyData>,
}

/// Policy output data
#[derive(PartialEq, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct PolicyData {
	pub policy:      PolicyKind,
	pub faults:      usize,
	pub fault_rates: Vec<f64>,
}

impl Data {
	/// Creates the output data from a report
	pub fn from_report(report: &Report, distinct_pages: usize) -> Self {
		Self {
			frame_size: report.frame_size,
			trace_len: report.trace_len,
			distinct_pages,
			sample_interval: report.sample_interval,
			policies: report
				.rows
				.iter()
				.map(|row| PolicyData {
					policy:      row.policy,
					faults:      row.output.faults,
					fault_rates: row.output.fault_rates.clone(),
				})
				.collect(),
		}
	}

	/// Returns the number of references covered by each of `policy_data`'s fault rates
	pub fn sample_positions<'a>(&self, policy_data: &'a PolicyData) -> impl Iterator<Item = (usize, f64)> + 'a {
		sampler::sample_positions(self.sample_interval, self.trace_len, policy_data.fault_rates.len())
			.zip(policy_data.fault_rates.iter().copied())
	}

	/// Returns the data for `policy`, if it was simulated
	pub fn policy(&self, policy: PolicyKind) -> Option<&PolicyData> {
		self.policies.iter().find(|data| data.policy == policy)
	}
}

#[cfg(test)]
mod tests {
	use {
		super::*,
		crate::{report::ReportRow, sim::RunOutput},
	};

	#[test]
	fn json_uses_lowercase_policy_names() {
		let report = Report {
			frame_size:      NonZeroUsize::new(4).expect("Nonzero"),
			sample_interval: NonZeroUsize::new(2000).expect("Nonzero"),
			trace_len:       10,
			rows:            vec![ReportRow {
				policy: PolicyKind::Optimal,
				output: RunOutput {
					faults:      5,
					fault_rates: vec![0.5],
				},
			}],
		};
		let data = Data::from_report(&report, 6);

		let json = serde_json::to_value(&data).expect("Data should serialize");
		assert_eq!(json["policies"][0]["policy"], "optimal");
		assert_eq!(json["frame_size"], 4);

		let parsed = serde_json::from_value::<Data>(json).expect("Data should deserialize");
		assert_eq!(parsed, data);
		assert_eq!(parsed.policy(PolicyKind::Optimal).map(|data| data.faults), Some(5));
		assert_eq!(parsed.policy(PolicyKind::Fifo), None);

		let optimal = parsed.policy(PolicyKind::Optimal).expect("Optimal was simulated");
		assert_eq!(parsed.sample_positions(optimal).collect::<Vec<_>>(), [(10, 0.5)]);
	}
}
