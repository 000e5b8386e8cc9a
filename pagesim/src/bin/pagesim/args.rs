//! Arguments

// Imports
use {
	pagesim::PolicyKind,
	std::{num::NonZeroUsize, path::PathBuf},
};

/// Arguments
#[derive(Debug)]
#[derive(clap::Parser)]
#[clap(version, about = "Simulates page replacement policies over a trace of page references")]
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

	/// Number of physical page frames
	pub frame_size: NonZeroUsize,

	/// Trace file, with whitespace-separated page numbers
	pub input_file: PathBuf,

	/// Report file
	pub output_file: PathBuf,

	/// Config file
	#[clap(long = "config")]
	pub config_file: Option<PathBuf>,

	/// Data output file, as json.
	///
	/// Can be used by `pagesim-graphs`.
	#[clap(long = "data-output")]
	pub data_output_file: Option<PathBuf>,

	/// Policies to simulate.
	///
	/// Overrides the policies in the config file
	#[clap(long = "policy", value_enum)]
	pub policies: Vec<PolicyKind>,
}
