//! Report table

// Imports
use {
	crate::{policies::PolicyKind, sampler, sim::RunOutput},
	std::{fmt, num::NonZeroUsize},
};

/// Report of several policies over the same trace
#[derive(Clone, Debug)]
pub struct Report {
	/// Frame size
	pub frame_size: NonZeroUsize,

	/// Fault-rate sample interval
	pub sample_interval: NonZeroUsize,

	/// References in the trace
	pub trace_len: usize,

	/// Rows, in display order
	pub rows: Vec<ReportRow>,
}

/// Report row
#[derive(Clone, Debug)]
pub struct ReportRow {
	/// Policy
	pub policy: PolicyKind,

	/// Output of the policy
	pub output: RunOutput,
}

impl Report {
	/// Width of the algorithm column
	const ALGORITHM_WIDTH: usize = 12;
	/// Width of the total page faults column
	const FAULTS_WIDTH: usize = 20;
	/// Width of each fault rate column
	const RATE_WIDTH: usize = 10;

	/// Returns the labels of the fault rate columns.
	///
	/// Each label is the number of references the sample covers.
	pub fn rate_labels(&self) -> Vec<usize> {
		let columns = self
			.rows
			.iter()
			.map(|row| row.output.fault_rates.len())
			.max()
			.unwrap_or(0);

		sampler::sample_positions(self.sample_interval, self.trace_len, columns).collect()
	}

	/// Returns the width of the rate columns, including the leading columns
	fn columns_width(&self, columns: usize) -> usize {
		Self::ALGORITHM_WIDTH + Self::FAULTS_WIDTH + columns * Self::RATE_WIDTH
	}

	/// Returns a row with the leading columns filled, followed by `cells`
	fn row(algorithm: &str, faults: &str, cells: impl IntoIterator<Item = String>) -> String {
		let mut row = format!(
			"{algorithm:<aw$}{faults:<fw$}",
			aw = Self::ALGORITHM_WIDTH,
			fw = Self::FAULTS_WIDTH
		);
		for cell in cells {
			row.push_str(&format!("{cell:<w$}", w = Self::RATE_WIDTH));
		}

		// Note: The last column is padded too
		row.truncate(row.trim_end().len());
		row
	}
}

impl fmt::Display for Report {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let rate_labels = self.rate_labels();
		let title = format!(
			"Page Replacement Algorithm Simulation (frame size = {})",
			self.frame_size
		);
		let width = self.columns_width(rate_labels.len()).max(title.len());

		let banner = "=".repeat(width);
		writeln!(f, "{banner}")?;
		writeln!(f, "{title}")?;
		writeln!(f, "{banner}")?;

		writeln!(
			f,
			"{:w$}Page fault rates",
			"",
			w = Self::ALGORITHM_WIDTH + Self::FAULTS_WIDTH
		)?;
		let header = Self::row(
			"Algorithm",
			"Total page faults",
			rate_labels.iter().map(usize::to_string),
		);
		writeln!(f, "{header}")?;
		writeln!(f, "{}", "-".repeat(width))?;

		for row in &self.rows {
			let row = Self::row(
				row.policy.name(),
				&row.output.faults.to_string(),
				row.output.fault_rates.iter().map(|fault_rate| format!("{fault_rate:.4}")),
			);
			writeln!(f, "{row}")?;
		}

		Ok(())
	}
}
