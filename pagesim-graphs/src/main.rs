//! Creates graphs from `pagesim`'s output

// Modules
mod args;

// Imports
use {
	anyhow::Context,
	args::Args,
	clap::Parser,
	gnuplot::{AxesCommon, Figure},
	itertools::Itertools,
	pagesim::{data::Data, PolicyKind},
	pagesim_util::logger,
	palette::{encoding, FromColor, Hsv, Srgb},
	std::{collections::BTreeMap, fs, path::Path},
};

fn main() -> Result<(), anyhow::Error> {
	// Get arguments
	let args = Args::parse();
	logger::pre_init::debug(format!("Args: {args:?}"));

	// Initialize logging
	logger::init(args.log_file.as_deref(), args.log_file_append);

	// Then check the sub-command
	match args.sub_cmd {
		args::SubCmd::FaultRates(cmd_args) => self::draw_fault_rates(&cmd_args)?,
		args::SubCmd::FaultsByFrames(cmd_args) => self::draw_faults_by_frames(&cmd_args)?,
	}

	Ok(())
}

/// Draws the fault rate of each policy over the trace
fn draw_fault_rates(cmd_args: &args::FaultRates) -> Result<(), anyhow::Error> {
	let data = self::read_data(&cmd_args.input_file)?;

	let mut fg = Figure::new();
	let fg_axes2d = fg
		.axes2d()
		.set_title(
			&format!("Fault rate (frame size = {})", data.frame_size),
			&[],
		)
		.set_x_label("References", &[])
		.set_y_label("Fault rate", &[]);

	for policy_data in &data.policies {
		let (xs, ys): (Vec<_>, Vec<_>) = data.sample_positions(policy_data).unzip();
		let color = self::policy_color(policy_data.policy);
		fg_axes2d.lines(&xs, &ys, &[
			gnuplot::Caption(policy_data.policy.name()),
			gnuplot::Color(color.as_str()),
			gnuplot::LineWidth(cmd_args.line_width),
		]);
	}

	self::handle_output(&mut fg, &cmd_args.output)
}

/// Draws the total faults of each policy by frame size
fn draw_faults_by_frames(cmd_args: &args::FaultsByFrames) -> Result<(), anyhow::Error> {
	let all_data = cmd_args
		.input_files
		.iter()
		.map(|input_file| self::read_data(input_file))
		.collect::<Result<Vec<_>, _>>()?;

	if !all_data.iter().map(|data| data.trace_len).all_equal() {
		tracing::warn!("Input files were generated from traces of different lengths");
	}

	// Note: We use a `BTreeMap` so policies are drawn in report order
	let mut faults_by_policy = BTreeMap::<PolicyKind, Vec<(usize, usize)>>::new();
	for data in &all_data {
		for policy_data in &data.policies {
			faults_by_policy
				.entry(policy_data.policy)
				.or_default()
				.push((data.frame_size.get(), policy_data.faults));
		}
	}

	let mut fg = Figure::new();
	let fg_axes2d = fg
		.axes2d()
		.set_title("Page faults by frame size", &[])
		.set_x_label("Frame size", &[])
		.set_y_label("Page faults", &[]);

	for (policy, mut points) in faults_by_policy {
		points.sort_unstable();
		let (xs, ys): (Vec<_>, Vec<_>) = points.into_iter().unzip();
		let color = self::policy_color(policy);
		fg_axes2d.lines_points(&xs, &ys, &[
			gnuplot::Caption(policy.name()),
			gnuplot::Color(color.as_str()),
			gnuplot::PointSymbol('O'),
			gnuplot::PointSize(cmd_args.point_size),
		]);
	}

	self::handle_output(&mut fg, &cmd_args.output)
}

/// Reads `pagesim` data from `path`
fn read_data(path: &Path) -> Result<Data, anyhow::Error> {
	let file = fs::File::open(path).with_context(|| format!("Unable to open input file {path:?}"))?;
	let data = serde_json::from_reader::<_, Data>(file).with_context(|| format!("Unable to parse input file {path:?}"))?;
	tracing::debug!(?path, policies = data.policies.len(), "Read data");

	Ok(data)
}

/// Returns the color of a policy, as `#rrggbb`.
///
/// Policies are evenly spread around the hue circle.
fn policy_color(policy: PolicyKind) -> String {
	let policy_idx = PolicyKind::ALL
		.iter()
		.position(|&other| other == policy)
		.unwrap_or(0);
	let hue = 360.0 * policy_idx as f32 / PolicyKind::ALL.len() as f32;

	let color = Srgb::<f32>::from_color(Hsv::<encoding::Srgb, f32>::new(hue, 0.8, 0.8)).into_format::<u8>();
	format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Handles output for a figure
fn handle_output(fg: &mut Figure, output: &args::Output) -> Result<(), anyhow::Error> {
	if let Some(output_file) = &output.file {
		fg.save_to_png(output_file, output.width, output.height)
			.map_err(|err| anyhow::anyhow!("Unable to save output file: {err:?}"))?;
	}

	if output.interactive {
		fg.show()
			.map_err(|err| anyhow::anyhow!("Unable to show figure: {err:?}"))?;
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn policy_colors_are_distinct_hex() {
		let colors = PolicyKind::ALL.map(policy_color);
		for color in &colors {
			assert_eq!(color.len(), 7, "{color}");
			assert!(color.starts_with('#'), "{color}");
		}
		assert!(colors.iter().all_unique());
	}
}
