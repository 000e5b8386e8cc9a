//! Optimal (Belady) policy

// Imports
use {
	super::{Access, Policy},
	crate::trace::PageId,
	std::{cmp, fmt, num::NonZeroUsize},
};

/// Optimal policy.
///
/// Evicts the page whose next reference lies farthest in the future, preferring
/// pages that are never referenced again. Requires knowing the rest of the trace,
/// so it only serves as a lower bound for the other policies.
#[derive(Clone, Debug)]
pub struct Optimal {
	/// Frame size
	frame_size: NonZeroUsize,

	/// Resident pages, in frame order
	frames: Vec<PageId>,

	/// Evictions of pages never referenced again
	dead_evictions: usize,
}

impl Optimal {
	/// Creates an empty optimal policy
	pub fn new(frame_size: NonZeroUsize) -> Self {
		Self {
			frame_size,
			frames: Vec::with_capacity(frame_size.get()),
			dead_evictions: 0,
		}
	}

	/// Returns the resident pages, in frame order
	pub fn frames(&self) -> &[PageId] {
		&self.frames
	}

	/// Returns the frame to evict, given the upcoming references.
	///
	/// Ties are broken by the lowest frame index.
	///
	/// # Panics
	/// Panics if there are no frames
	fn victim(&self, upcoming: &[PageId]) -> (usize, NextUse) {
		self.frames
			.iter()
			.map(|&page| NextUse::find(page, upcoming))
			.enumerate()
			.min_by_key(|&(_, next_use)| cmp::Reverse(next_use))
			.expect("Frame set was empty")
	}
}

impl Policy for Optimal {
	fn name(&self) -> &'static str {
		"Optimal"
	}

	fn frame_size(&self) -> NonZeroUsize {
		self.frame_size
	}

	fn resident_len(&self) -> usize {
		self.frames.len()
	}

	fn access(&mut self, page: PageId, upcoming: &[PageId]) -> Access {
		if self.frames.contains(&page) {
			return Access::Hit;
		}

		if self.frames.len() < self.frame_size.get() {
			self.frames.push(page);
			return Access::Fault { evicted: None };
		}

		let (frame_idx, next_use) = self.victim(upcoming);
		if next_use == NextUse::Never {
			self.dead_evictions += 1;
		}
		let evicted = std::mem::replace(&mut self.frames[frame_idx], page);

		Access::Fault { evicted: Some(evicted) }
	}

	fn fmt_debug(&mut self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
		write!(
			f,
			"{} / {} frames ({} evictions of dead pages)",
			self.frames.len(),
			self.frame_size,
			self.dead_evictions
		)
	}
}

/// Next use of a page
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
enum NextUse {
	/// Referenced again, at an offset into the upcoming references
	At(usize),

	/// Never referenced again
	Never,
}

impl NextUse {
	/// Finds the next use of `page` in `upcoming`
	fn find(page: PageId, upcoming: &[PageId]) -> Self {
		match upcoming.iter().position(|&other| other == page) {
			Some(offset) => Self::At(offset),
			None => Self::Never,
		}
	}
}
