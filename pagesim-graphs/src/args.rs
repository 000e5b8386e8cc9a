//! Arguments

// Imports
use std::path::PathBuf;

/// Arguments
#[derive(Debug)]
#[derive(clap::Parser)]
pub struct Args {
	/// Log file
	///
	/// Specifies a file to perform verbose logging to.
	/// You can use `RUST_LOG_FILE` to set filtering options
	#[clap(long = "log-file")]
	pub log_file: Option<PathBuf>,

	/// Whether to append to the log file
	#[clap(long = "log-file-append")]
	pub log_file_append: bool,

	/// Sub-command
	#[command(subcommand)]
	pub sub_cmd: SubCmd,
}

/// Sub-command
#[derive(Debug, clap::Subcommand)]
pub enum SubCmd {
	#[clap(name = "fault-rates")]
	FaultRates(FaultRates),

	#[clap(name = "faults-by-frames")]
	FaultsByFrames(FaultsByFrames),
}

/// Creates a graph of the fault rate of each policy over the trace
#[derive(Debug, clap::Args)]
pub struct FaultRates {
	/// Input
	pub input_file: PathBuf,

	/// Output
	#[clap(flatten)]
	pub output: Output,

	/// Line width
	#[clap(long = "line-width", default_value_t = 1.5)]
	pub line_width: f64,
}

/// Creates a graph of the total faults of each policy by frame size, from multiple data
#[derive(Debug, clap::Args)]
pub struct FaultsByFrames {
	/// Input files
	pub input_files: Vec<PathBuf>,

	/// Output
	#[clap(flatten)]
	pub output: Output,

	/// Point size
	#[clap(long = "point-size", default_value_t = 1.0)]
	pub point_size: f64,
}

/// Output
#[derive(Debug, clap::Args)]
pub struct Output {
	/// Interactive mode
	#[clap(long = "interactive")]
	pub interactive: bool,

	/// Output file
	#[clap(short = 'o', long = "output", group = "output-file")]
	pub file: Option<PathBuf>,

	/// Output file width
	#[clap(long = "output-width", requires = "output-file", default_value_t = 640)]
	pub width: u32,

	/// Output file height
	#[clap(long = "output-height", requires = "output-file", default_value_t = 480)]
	pub height: u32,
}
