//! Least-recently-used policy

// Imports
use {
	super::{Access, Policy},
	crate::trace::PageId,
	std::{collections::VecDeque, fmt, num::NonZeroUsize},
};

/// LRU policy.
///
/// Evicts the page whose last reference is the oldest.
#[derive(Clone, Debug)]
pub struct Lru {
	/// Frame size
	frame_size: NonZeroUsize,

	/// Resident pages, most recently used at the front
	stack: VecDeque<PageId>,
}

impl Lru {
	/// Creates an empty LRU policy
	pub fn new(frame_size: NonZeroUsize) -> Self {
		Self {
			frame_size,
			stack: VecDeque::with_capacity(frame_size.get()),
		}
	}

	/// Returns the resident pages, from most to least recently used
	pub fn pages(&self) -> impl Iterator<Item = PageId> + '_ {
		self.stack.iter().copied()
	}
}

impl Policy for Lru {
	fn name(&self) -> &'static str {
		"LRU"
	}

	fn frame_size(&self) -> NonZeroUsize {
		self.frame_size
	}

	fn resident_len(&self) -> usize {
		self.stack.len()
	}

	fn access(&mut self, page: PageId, _upcoming: &[PageId]) -> Access {
		// On a hit, move the page to the top of the stack
		if let Some(idx) = self.stack.iter().position(|&resident| resident == page) {
			if idx != 0 {
				self.stack.remove(idx);
				self.stack.push_front(page);
			}

			return Access::Hit;
		}

		let evicted = match self.stack.len() >= self.frame_size.get() {
			true => self.stack.pop_back(),
			false => None,
		};
		self.stack.push_front(page);

		Access::Fault { evicted }
	}

	fn fmt_debug(&mut self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
		write!(f, "{} / {} frames", self.stack.len(), self.frame_size)?;
		if let (Some(mru), Some(lru)) = (self.stack.front(), self.stack.back()) {
			write!(f, " (most recent: {mru}, least recent: {lru})")?;
		}

		Ok(())
	}
}
