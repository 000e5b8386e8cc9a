//! Parses `valgrind`'s `lackey` tool output from stdin,
//! converting it to a page trace.

// Imports
use {
	anyhow::Context,
	clap::Parser,
	pagesim::{PageId, Trace},
	std::{
		fs,
		io::{self, BufRead, BufWriter},
		path::PathBuf,
	},
};

/// Arguments
#[derive(Debug)]
#[derive(clap::Parser)]
struct Args {
	/// Output trace file
	#[clap(short = 'o', long = "output", default_value = "output.trace")]
	output_file: PathBuf,

	/// Page size, as a power of two
	#[clap(long = "page-shift", default_value_t = 12)]
	page_shift: u32,

	/// Whether to include instruction fetches
	#[clap(long = "include-instructions")]
	include_instructions: bool,
}

fn main() -> Result<(), anyhow::Error> {
	let args = Args::parse();
	anyhow::ensure!(args.page_shift < u64::BITS, "Page shift must be below {}", u64::BITS);

	// Start reading the output
	let mut pages = vec![];
	let mut stdin = io::stdin().lock();
	let mut line = String::new();
	while stdin.read_line(&mut line).context("Unable to read line")? != 0 {
		// Get the kind of record
		let record = self::parse_record(&line);
		line.clear();
		let (kind, addr) = match record {
			Some(record) => record.context("Unable to parse record")?,

			// Else ignore line
			None => continue,
		};

		if kind == Kind::Inst && !args.include_instructions {
			continue;
		}

		// Note: Pages above `i64::MAX` wrap around, which still keeps them distinct.
		pages.push((addr >> args.page_shift) as PageId);
	}

	// Finally write the trace
	let trace = Trace::new(pages);
	let file = fs::File::create(&args.output_file).context("Unable to create output file")?;
	trace
		.to_writer(BufWriter::new(file))
		.context("Unable to write trace")?;

	Ok(())
}

/// Parses a `lackey` record line, `<kind> <hex address>,<size>`.
///
/// Returns `None` for lines that aren't records.
fn parse_record(line: &str) -> Option<Result<(Kind, u64), anyhow::Error>> {
	let (kind, rest) = line.trim().split_once(' ')?;
	let kind = match kind {
		"I" => Kind::Inst,
		"L" => Kind::Read,
		"S" => Kind::Write,
		"M" => Kind::Modify,
		_ => return None,
	};

	let addr = rest.trim_start().split(',').next().unwrap_or_default();
	Some(
		u64::from_str_radix(addr, 16)
			.with_context(|| format!("Unable to parse address {addr:?}"))
			.map(|addr| (kind, addr)),
	)
}

/// Record kind
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum Kind {
	Inst,
	Read,
	Write,
	Modify,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_records() {
		assert_eq!(parse_record("I  04017a0,3\n").map(Result::ok), Some(Some((Kind::Inst, 0x04017a0))));
		assert_eq!(parse_record(" L 1ffefffd48,8").map(Result::ok), Some(Some((Kind::Read, 0x1ffefffd48))));
		assert_eq!(parse_record(" S 04222cac,4").map(Result::ok), Some(Some((Kind::Write, 0x04222cac))));
		assert_eq!(parse_record(" M 0421ff00,8").map(Result::ok), Some(Some((Kind::Modify, 0x0421ff00))));
	}

	#[test]
	fn ignores_other_lines() {
		assert!(parse_record("==1234== Lackey, an example Valgrind tool").is_none());
		assert!(parse_record("").is_none());
	}

	#[test]
	fn rejects_bad_addresses() {
		assert!(matches!(parse_record(" L zz,8"), Some(Err(_))));
	}
}
