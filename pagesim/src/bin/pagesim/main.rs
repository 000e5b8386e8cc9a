//! Page replacement simulator (`pagesim`)

// Modules
mod args;
mod config;

// Imports
use {
	self::{args::Args, config::Config},
	anyhow::Context,
	clap::Parser,
	pagesim::{data, report::ReportRow, Report, Simulator, Trace},
	pagesim_util::logger,
	std::{fs, process, time::Duration},
};

fn main() -> Result<(), anyhow::Error> {
	// Get arguments
	// Note: Usage errors exit with 1, instead of clap's default
	let args = match Args::try_parse() {
		Ok(args) => args,
		Err(err) => {
			if err.print().is_err() {
				eprintln!("{err}");
			}
			process::exit(match err.use_stderr() {
				true => 1,
				false => 0,
			});
		},
	};
	logger::pre_init::debug(format!("Args: {args:?}"));

	// Initialize logging
	logger::init(args.log_file.as_deref(), args.log_file_append);

	// Read the config file, if any
	let mut config = match &args.config_file {
		Some(config_file) => {
			let config_file = fs::File::open(config_file).context("Unable to open config file")?;
			serde_json::from_reader::<_, Config>(config_file).context("Unable to parse config file")?
		},
		None => Config::default(),
	};
	if !args.policies.is_empty() {
		config.policies = args.policies.clone();
	}
	tracing::debug!(?config, "Loaded config");

	// Read the trace file
	let trace = Trace::from_path(&args.input_file)?;
	let distinct_pages = trace.distinct_pages();
	tracing::info!(
		len = trace.len(),
		distinct_pages,
		frame_size = args.frame_size.get(),
		"Read trace"
	);
	if args.frame_size.get() >= distinct_pages && !trace.is_empty() {
		tracing::warn!(
			"All {distinct_pages} distinct pages fit in {} frames, every policy will only fault once per page",
			args.frame_size
		);
	}

	// Run the simulator for each policy
	let debug_output_period =
		Duration::try_from_secs_f64(config.debug_output_period_secs).context("Invalid debug output period")?;
	let sim = Simulator::new(config.sample_interval, debug_output_period);
	let rows = config
		.policies
		.iter()
		.map(|&policy| {
			let output = policy.run(&sim, &trace, args.frame_size);
			tracing::info!("{policy}: {}", output.summary());
			ReportRow { policy, output }
		})
		.collect();

	let report = Report {
		frame_size: args.frame_size,
		sample_interval: sim.sample_interval(),
		trace_len: trace.len(),
		rows,
	};

	// Finally write the report and data
	fs::write(&args.output_file, report.to_string()).context("Unable to write report file")?;
	print!("{report}");

	if let Some(data_output_file) = &args.data_output_file {
		let data = data::Data::from_report(&report, distinct_pages);
		let data_output_file = fs::File::create(data_output_file).context("Unable to create data output file")?;
		serde_json::to_writer_pretty(data_output_file, &data).context("Unable to write to data output file")?;
	}

	Ok(())
}
