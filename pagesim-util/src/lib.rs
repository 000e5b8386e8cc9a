//! Utilities

// Modules
pub mod logger;

// Imports
use std::{cell::RefCell, fmt, io};

/// Extension trait for `R: io::BufRead` types to iterate over whitespace-separated words
#[extend::ext(name = ReadWords)]
pub impl<R: io::BufRead> R {
	/// Calls `f` with every whitespace-separated word of this reader, in order.
	///
	/// Words never span lines. Stops at the first error, either from reading
	/// or returned by `f`.
	fn for_each_word<E: From<io::Error>>(&mut self, mut f: impl FnMut(&str) -> Result<(), E>) -> Result<(), E> {
		let mut line = String::new();
		loop {
			line.clear();
			if self.read_line(&mut line)? == 0 {
				break;
			}

			for word in line.split_whitespace() {
				f(word)?;
			}
		}

		Ok(())
	}
}

/// [`fmt::Display`] helper to display using a `FnMut(&mut fmt::Formatter)`
pub struct DisplayWrapper<F: FnMut(&mut fmt::Formatter) -> fmt::Result>(RefCell<F>);

impl<F: FnMut(&mut fmt::Formatter) -> fmt::Result> DisplayWrapper<F> {
	/// Creates a new display wrapper
	#[must_use]
	pub const fn new(func: F) -> Self {
		Self(RefCell::new(func))
	}
}

impl<F: FnMut(&mut fmt::Formatter) -> fmt::Result> fmt::Display for DisplayWrapper<F> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		// Note: `f` cannot be re-entrant, so this cannot fail
		self.0.borrow_mut()(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn for_each_word_splits_lines_and_spaces() {
		let mut input = io::Cursor::new("1 2\n\n  3\t4\r\n5");
		let mut words = vec![];
		input
			.for_each_word(|word| {
				words.push(word.to_owned());
				Ok::<_, io::Error>(())
			})
			.expect("Reading from a cursor cannot fail");

		assert_eq!(words, ["1", "2", "3", "4", "5"]);
	}

	#[test]
	fn display_wrapper_forwards_to_closure() {
		let wrapper = DisplayWrapper::new(|f| write!(f, "{}-{}", 1, 2));
		assert_eq!(wrapper.to_string(), "1-2");
	}
}
