//! First-in, first-out policy

// Imports
use {
	super::{Access, Policy},
	crate::trace::PageId,
	std::{
		collections::{HashSet, VecDeque},
		fmt,
		num::NonZeroUsize,
	},
};

/// FIFO policy.
///
/// Evicts the page that was brought in the earliest. Hits never reorder pages.
#[derive(Clone, Debug)]
pub struct Fifo {
	/// Frame size
	frame_size: NonZeroUsize,

	/// Resident pages, newest at the front
	queue: VecDeque<PageId>,

	/// Resident pages, for lookup
	resident: HashSet<PageId>,
}

impl Fifo {
	/// Creates an empty FIFO policy
	pub fn new(frame_size: NonZeroUsize) -> Self {
		Self {
			frame_size,
			queue: VecDeque::with_capacity(frame_size.get()),
			resident: HashSet::with_capacity(frame_size.get()),
		}
	}

	/// Returns the resident pages, from newest to oldest
	pub fn pages(&self) -> impl Iterator<Item = PageId> + '_ {
		self.queue.iter().copied()
	}
}

impl Policy for Fifo {
	fn name(&self) -> &'static str {
		"FIFO"
	}

	fn frame_size(&self) -> NonZeroUsize {
		self.frame_size
	}

	fn resident_len(&self) -> usize {
		self.queue.len()
	}

	fn access(&mut self, page: PageId, _upcoming: &[PageId]) -> Access {
		if self.resident.contains(&page) {
			return Access::Hit;
		}

		let evicted = match self.queue.len() >= self.frame_size.get() {
			true => self.queue.pop_back(),
			false => None,
		};
		if let Some(evicted) = evicted {
			self.resident.remove(&evicted);
		}

		self.queue.push_front(page);
		self.resident.insert(page);

		Access::Fault { evicted }
	}

	fn fmt_debug(&mut self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
		write!(f, "{} / {} frames", self.queue.len(), self.frame_size)?;
		if let (Some(newest), Some(oldest)) = (self.queue.front(), self.queue.back()) {
			write!(f, " (newest: {newest}, oldest: {oldest})")?;
		}

		Ok(())
	}
}
