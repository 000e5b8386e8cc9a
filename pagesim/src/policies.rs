//! Page replacement policies

// Modules
pub mod fifo;
pub mod lfu;
pub mod lru;
pub mod optimal;

// Exports
pub use self::{fifo::Fifo, lfu::Lfu, lru::Lru, optimal::Optimal};

// Imports
use {
	crate::{
		sim::{RunOutput, Simulator},
		trace::{PageId, Trace},
	},
	std::{fmt, num::NonZeroUsize},
};

/// Page replacement policy.
///
/// Owns a frame set of at most `frame_size` resident pages.
pub trait Policy {
	/// Returns the name of this policy
	fn name(&self) -> &'static str;

	/// Returns the capacity of the frame set
	fn frame_size(&self) -> NonZeroUsize;

	/// Returns the number of resident pages
	fn resident_len(&self) -> usize;

	/// Handles a reference to `page`.
	///
	/// `upcoming` are all references after this one, in trace order.
	fn access(&mut self, page: PageId, upcoming: &[PageId]) -> Access;

	/// Formats debug output to `f`.
	fn fmt_debug(&mut self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error>;
}

/// Outcome of [`Policy::access`]
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Access {
	/// Page was resident
	Hit,

	/// Page was not resident and was brought in
	Fault {
		/// Page evicted to make room, if the frame set was full
		evicted: Option<PageId>,
	},
}

impl Access {
	/// Returns if this access was a fault
	pub fn is_fault(self) -> bool {
		matches!(self, Self::Fault { .. })
	}
}

/// Policy kind
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
	Fifo,
	Lru,
	Lfu,
	Optimal,
}

impl PolicyKind {
	/// All policies, in report order
	pub const ALL: [Self; 4] = [Self::Fifo, Self::Lru, Self::Lfu, Self::Optimal];

	/// Returns the display name of this policy
	pub fn name(self) -> &'static str {
		match self {
			Self::Fifo => "FIFO",
			Self::Lru => "LRU",
			Self::Lfu => "LFU",
			Self::Optimal => "Optimal",
		}
	}

	/// Runs this policy over `trace` with `frame_size` frames
	pub fn run(self, sim: &Simulator, trace: &Trace, frame_size: NonZeroUsize) -> RunOutput {
		match self {
			Self::Fifo => sim.run(trace, &mut Fifo::new(frame_size)),
			Self::Lru => sim.run(trace, &mut Lru::new(frame_size)),
			Self::Lfu => sim.run(trace, &mut Lfu::new(frame_size)),
			Self::Optimal => sim.run(trace, &mut Optimal::new(frame_size)),
		}
	}
}

impl fmt::Display for PolicyKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.name())
	}
}

/// Runs `pages` through `policy`, returning the faults of each reference.
///
/// Used by the policy tests.
#[cfg(test)]
pub(crate) fn run_pages(policy: &mut impl Policy, pages: &[PageId]) -> Vec<bool> {
	pages
		.iter()
		.enumerate()
		.map(|(idx, &page)| {
			let access = policy.access(page, &pages[idx + 1..]);
			assert!(policy.resident_len() <= policy.frame_size().get());
			access.is_fault()
		})
		.collect()
}

/// Creates a frame size for tests
#[cfg(test)]
pub(crate) fn frames(frame_size: usize) -> NonZeroUsize {
	NonZeroUsize::new(frame_size).expect("Frame size must be non-zero")
}
