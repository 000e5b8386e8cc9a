//! Generates synthetic page traces

// Imports
use {
	anyhow::Context,
	clap::Parser,
	pagesim::{PageId, Trace},
	pagesim_util::logger,
	rand::{rngs::StdRng, Rng, SeedableRng},
	std::{fs, io::BufWriter, path::PathBuf},
};

/// Arguments
#[derive(Debug)]
#[derive(clap::Parser)]
struct Args {
	/// Output trace file
	#[clap(short = 'o', long = "output")]
	output_file: PathBuf,

	/// Access pattern
	#[clap(long = "pattern", value_enum, default_value_t = Pattern::Uniform)]
	pattern: Pattern,

	/// Number of references
	#[clap(long = "len", default_value_t = 10000)]
	len: usize,

	/// Number of distinct pages
	#[clap(long = "pages", default_value_t = 100)]
	pages: PageId,

	/// Fraction of pages that are hot, for `hot-set`
	#[clap(long = "hot-fraction", default_value_t = 0.2)]
	hot_fraction: f64,

	/// Probability of referencing a hot page, for `hot-set`
	#[clap(long = "hot-probability", default_value_t = 0.8)]
	hot_probability: f64,

	/// Random seed
	#[clap(long = "seed")]
	seed: Option<u64>,
}

/// Access pattern
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[derive(clap::ValueEnum)]
enum Pattern {
	/// Every page equally likely
	Uniform,

	/// Pages in order, over and over
	Loop,

	/// A small set of pages receives most references
	HotSet,
}

fn main() -> Result<(), anyhow::Error> {
	let args = Args::parse();
	logger::init(None, false);

	anyhow::ensure!(args.pages > 0, "Must have at least 1 page");
	anyhow::ensure!(
		(0.0..=1.0).contains(&args.hot_fraction) && (0.0..=1.0).contains(&args.hot_probability),
		"Hot fraction and probability must be within 0..=1"
	);

	let seed = args.seed.unwrap_or_else(rand::random);
	tracing::info!(seed, pattern = ?args.pattern, "Generating trace");
	let mut rng = StdRng::seed_from_u64(seed);

	let trace = self::generate(&args, &mut rng);
	tracing::info!(
		len = trace.len(),
		distinct_pages = trace.distinct_pages(),
		"Generated trace"
	);

	let file = fs::File::create(&args.output_file).context("Unable to create output file")?;
	trace
		.to_writer(BufWriter::new(file))
		.context("Unable to write trace")?;

	Ok(())
}

/// Generates a trace according to `args`
fn generate(args: &Args, rng: &mut impl Rng) -> Trace {
	match args.pattern {
		Pattern::Uniform => (0..args.len).map(|_| rng.gen_range(0..args.pages)).collect(),
		Pattern::Loop => (0..args.pages).cycle().take(args.len).collect(),
		Pattern::HotSet => {
			let hot_pages = ((args.pages as f64 * args.hot_fraction).ceil() as PageId).clamp(1, args.pages);
			(0..args.len)
				.map(|_| match rng.gen_bool(args.hot_probability) {
					true => rng.gen_range(0..hot_pages),
					false => rng.gen_range(0..args.pages),
				})
				.collect()
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn args(pattern: Pattern) -> Args {
		Args {
			output_file: PathBuf::new(),
			pattern,
			len: 1000,
			pages: 10,
			hot_fraction: 0.2,
			hot_probability: 1.0,
			seed: None,
		}
	}

	#[test]
	fn loop_cycles_through_pages() {
		let trace = generate(&args(Pattern::Loop), &mut StdRng::seed_from_u64(0));
		assert_eq!(trace.len(), 1000);
		assert_eq!(&trace.as_slice()[..12], [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1]);
	}

	#[test]
	fn hot_set_stays_within_hot_pages() {
		let trace = generate(&args(Pattern::HotSet), &mut StdRng::seed_from_u64(0));
		assert!(trace.as_slice().iter().all(|&page| (0..2).contains(&page)));
	}

	#[test]
	fn same_seed_same_trace() {
		let generate_with = |seed| generate(&args(Pattern::Uniform), &mut StdRng::seed_from_u64(seed));
		assert_eq!(generate_with(7), generate_with(7));
		assert!(generate_with(7).as_slice().iter().all(|&page| (0..10).contains(&page)));
	}
}
