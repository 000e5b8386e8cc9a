//! Page traces
//!
//! A trace is a plain-text list of page identifiers, separated by any amount
//! of whitespace (including newlines).

// Imports
use {
	anyhow::Context,
	pagesim_util::ReadWords,
	std::{
		collections::HashSet,
		fs,
		io::{self, BufRead},
		path::Path,
	},
};

/// Page identifier
pub type PageId = i64;

/// Page trace.
///
/// Immutable once created, shared read-only by all policies.
#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct Trace {
	/// All pages, in reference order
	pages: Vec<PageId>,
}

impl Trace {
	/// Creates a trace from its pages
	pub fn new(pages: Vec<PageId>) -> Self {
		Self { pages }
	}

	/// Parses a trace from a reader
	pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, anyhow::Error> {
		let mut pages = vec![];
		reader.for_each_word(|word| {
			let page = word
				.parse::<PageId>()
				.with_context(|| format!("Unable to parse page #{} {word:?}", pages.len() + 1))?;
			pages.push(page);

			Ok::<_, anyhow::Error>(())
		})?;

		tracing::debug!(len = pages.len(), "Parsed trace");
		Ok(Self { pages })
	}

	/// Parses a trace from a file
	pub fn from_path(path: &Path) -> Result<Self, anyhow::Error> {
		let file = fs::File::open(path).with_context(|| format!("Unable to open trace file {path:?}"))?;
		Self::from_reader(io::BufReader::new(file)).with_context(|| format!("Unable to parse trace file {path:?}"))
	}

	/// Writes this trace to a writer, one page per line
	pub fn to_writer<W: io::Write>(&self, mut writer: W) -> Result<(), anyhow::Error> {
		for page in &self.pages {
			writeln!(writer, "{page}").context("Unable to write page")?;
		}
		writer.flush().context("Unable to flush writer")?;

		Ok(())
	}

	/// Returns all pages
	pub fn as_slice(&self) -> &[PageId] {
		&self.pages
	}

	/// Returns the number of references in this trace
	pub fn len(&self) -> usize {
		self.pages.len()
	}

	/// Returns if this trace has no references
	pub fn is_empty(&self) -> bool {
		self.pages.is_empty()
	}

	/// Returns the number of distinct pages in this trace
	pub fn distinct_pages(&self) -> usize {
		self.pages.iter().collect::<HashSet<_>>().len()
	}
}

impl FromIterator<PageId> for Trace {
	fn from_iter<I: IntoIterator<Item = PageId>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}
