//! Error type of the binary searches.
//!
//! A search range is validated once at the boundary of the public methods. Its start and exclusive
//! end are checked against the length of the array, whereas a start past the end is simply an
//! empty range and not an error.

use core::fmt::{self, Display, Formatter};
use core::ops::{Bound, RangeBounds};

/// Error returned when a search range exceeds the bounds of the searched array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
	/// The first index of the range lies beyond the end of the array.
	StartOutOfRange {
		/// Resolved first index of the range.
		start: usize,
		/// Length of the searched array.
		len: usize,
	},
	/// The last index of the range lies beyond the end of the array.
	EndOutOfRange {
		/// Resolved exclusive end of the range, i.e., the last index plus one.
		end: usize,
		/// Length of the searched array.
		len: usize,
	},
}

impl Display for SearchError {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::StartOutOfRange { start, len } => {
				write!(f, "range start {start} out of range for array of length {len}")
			}
			Self::EndOutOfRange { end, len } => {
				write!(f, "range end {end} out of range for array of length {len}")
			}
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for SearchError {}

/// Resolves `range` into half-open `start..end` bounds within an array of length `len`.
///
/// A start past the end yields the empty range `start..start`.
pub(crate) fn resolve<R>(range: R, len: usize) -> Result<(usize, usize), SearchError>
where
	R: RangeBounds<usize>,
{
	let start = match range.start_bound() {
		Bound::Included(&start) => start,
		Bound::Excluded(&start) => start.saturating_add(1),
		Bound::Unbounded => 0,
	};
	let end = match range.end_bound() {
		Bound::Included(&last) => last.saturating_add(1),
		Bound::Excluded(&end) => end,
		Bound::Unbounded => len,
	};
	if start > len {
		return Err(SearchError::StartOutOfRange { start, len });
	}
	if end > len {
		return Err(SearchError::EndOutOfRange { end, len });
	}
	Ok((start, end.max(start)))
}

#[cfg(test)]
mod test {
	use super::{SearchError, resolve};

	#[test]
	fn resolves_bounds() {
		assert_eq!(resolve(.., 6), Ok((0, 6)));
		assert_eq!(resolve(0..=5, 6), Ok((0, 6)));
		assert_eq!(resolve(2..4, 6), Ok((2, 4)));
		assert_eq!(resolve(6.., 6), Ok((6, 6)));
		assert_eq!(resolve(.., 0), Ok((0, 0)));
	}

	#[test]
	fn start_past_end_is_empty() {
		#[allow(clippy::reversed_empty_ranges)]
		let range = 4..=2;
		assert_eq!(resolve(range, 6), Ok((4, 4)));
	}

	#[test]
	fn rejects_bounds_beyond_len() {
		assert_eq!(
			resolve(7.., 6),
			Err(SearchError::StartOutOfRange { start: 7, len: 6 })
		);
		assert_eq!(
			resolve(0..=6, 6),
			Err(SearchError::EndOutOfRange { end: 7, len: 6 })
		);
		assert_eq!(
			resolve(0..=0, 0),
			Err(SearchError::EndOutOfRange { end: 1, len: 0 })
		);
	}

	#[cfg(feature = "std")]
	#[test]
	fn displays_bounds() {
		let error = SearchError::EndOutOfRange { end: 7, len: 6 };
		assert_eq!(
			error.to_string(),
			"range end 7 out of range for array of length 6"
		);
	}
}
