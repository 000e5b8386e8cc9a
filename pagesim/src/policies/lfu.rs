//! Least-frequently-used policy

// Imports
use {
	super::{Access, Policy},
	crate::trace::PageId,
	itertools::Itertools,
	std::{fmt, num::NonZeroUsize},
};

/// LFU policy.
///
/// Keeps resident pages ordered by descending reference count. Among pages
/// with the same count, the one touched most recently sits nearer the front,
/// so the back of the list is always the least frequently used page, ties
/// going to the one that reached its count the earliest.
///
/// Counts start at 1 when a page is brought in and are lost on eviction.
#[derive(Clone, Debug)]
pub struct Lfu {
	/// Frame size
	frame_size: NonZeroUsize,

	/// Resident pages, most frequently used at the front
	entries: Vec<Entry>,
}

/// Resident page with its reference count
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Entry {
	/// Page
	pub page: PageId,

	/// References since being brought in
	pub frequency: u64,
}

impl Lfu {
	/// Creates an empty LFU policy
	pub fn new(frame_size: NonZeroUsize) -> Self {
		Self {
			frame_size,
			entries: Vec::with_capacity(frame_size.get()),
		}
	}

	/// Returns the resident pages, from most to least frequently used
	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	/// Inserts `entry` before the first entry in `..end` with a frequency not above its own,
	/// or at `end` if there is none.
	///
	/// All entries at or after `end` must have a lower frequency than `entry`.
	fn insert(&mut self, entry: Entry, end: usize) {
		let idx = self.entries[..end]
			.iter()
			.position(|other| other.frequency <= entry.frequency)
			.unwrap_or(end);
		self.entries.insert(idx, entry);
	}
}

impl Policy for Lfu {
	fn name(&self) -> &'static str {
		"LFU"
	}

	fn frame_size(&self) -> NonZeroUsize {
		self.frame_size
	}

	fn resident_len(&self) -> usize {
		self.entries.len()
	}

	fn access(&mut self, page: PageId, _upcoming: &[PageId]) -> Access {
		// On a hit, bump the frequency and move the entry forward.
		// Note: Everything behind `idx` has at most the old frequency, so it can only move forward.
		if let Some(idx) = self.entries.iter().position(|entry| entry.page == page) {
			let mut entry = self.entries.remove(idx);
			entry.frequency += 1;
			self.insert(entry, idx);

			return Access::Hit;
		}

		let evicted = match self.entries.len() >= self.frame_size.get() {
			true => self.entries.pop().map(|entry| entry.page),
			false => None,
		};
		self.insert(Entry { page, frequency: 1 }, self.entries.len());

		Access::Fault { evicted }
	}

	fn fmt_debug(&mut self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
		write!(f, "{} / {} frames", self.entries.len(), self.frame_size)?;

		let frequencies = self
			.entries
			.iter()
			.map(|entry| entry.frequency as f64)
			.collect::<average::Variance>();
		if let Some((min, max)) = self.entries.iter().map(|entry| entry.frequency).minmax().into_option() {
			write!(
				f,
				" (frequency: {:.2} ± {:.2}, {min}..={max})",
				frequencies.mean(),
				frequencies.error()
			)?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use {
		super::*,
		crate::policies::{frames, run_pages},
	};

	fn pages_of(lfu: &Lfu) -> Vec<(PageId, u64)> {
		lfu.entries().iter().map(|entry| (entry.page, entry.frequency)).collect()
	}

	#[test]
	fn new_pages_are_fifo_among_themselves() {
		let mut lfu = Lfu::new(frames(3));
		let faults = run_pages(&mut lfu, &[1, 2, 3, 4]);

		assert_eq!(faults, [true, true, true, true]);
		assert_eq!(pages_of(&lfu), [(4, 1), (3, 1), (2, 1)]);
	}

	#[test]
	fn frequent_pages_survive() {
		let mut lfu = Lfu::new(frames(2));
		let faults = run_pages(&mut lfu, &[1, 1, 2, 3, 1]);

		// `2` is evicted for `3`, since `1` has been used twice
		assert_eq!(faults, [true, false, true, true, false]);
		assert_eq!(pages_of(&lfu), [(1, 3), (3, 1)]);
	}

	#[test]
	fn ties_evict_least_recently_bumped() {
		let mut lfu = Lfu::new(frames(2));
		let faults = run_pages(&mut lfu, &[1, 2, 1, 2, 3, 2]);

		// Both `1` and `2` reach frequency 2, but `1` got there first, so it's evicted for `3`
		assert_eq!(faults, [true, true, false, false, true, false]);
		assert_eq!(pages_of(&lfu), [(2, 3), (3, 1)]);
	}

	#[test]
	fn bumped_entry_stays_behind_higher_frequencies() {
		let mut lfu = Lfu::new(frames(3));
		let _ = run_pages(&mut lfu, &[1, 1, 1, 2, 3, 3]);
		assert_eq!(pages_of(&lfu), [(1, 3), (3, 2), (2, 1)]);

		// `2` catches up with `3`, and goes ahead of it
		let _ = run_pages(&mut lfu, &[2]);
		assert_eq!(pages_of(&lfu), [(1, 3), (2, 2), (3, 2)]);
	}

	#[test]
	fn eviction_resets_frequency() {
		let mut lfu = Lfu::new(frames(1));
		let faults = run_pages(&mut lfu, &[1, 1, 2, 1]);

		assert_eq!(faults, [true, false, true, true]);
		assert_eq!(pages_of(&lfu), [(1, 1)]);
	}

	#[test]
	fn classic_reference_strings() {
		let count = |pages: &[PageId], frame_size| {
			run_pages(&mut Lfu::new(frames(frame_size)), pages)
				.into_iter()
				.filter(|&fault| fault)
				.count()
		};

		assert_eq!(count(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5], 3), 10);
		assert_eq!(count(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5], 4), 8);
		assert_eq!(
			count(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1], 3),
			11
		);
	}
}
