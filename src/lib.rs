//! Classic textbook algorithms (e.g., [binary search], [bubble sort], [Shell sort], [quicksort],
//! [heapsort]) for non-contiguous (sub)views into *n*-dimensional arrays of [`ndarray`].
//!
//! Every algorithm is implemented the way it is taught, without hybrid fallbacks or pivot
//! heuristics, which makes them a reference for studying their behavior on arbitrary inputs.
//!
//! # Example
//!
//! ```
//! use ndarray_classics::{ndarray::arr2, Slice1Ext};
//!
//! // 2-dimensional array of 4 rows and 5 columns.
//! let mut v = arr2(&[[-5, 4, 1, -3,  2],   // row 0, axis 0
//!                    [ 8, 3, 2,  4,  8],   // row 1, axis 0
//!                    [38, 9, 3,  0,  3],   // row 2, axis 0
//!                    [ 4, 9, 0,  8, -1]]); // row 3, axis 0
//!
//! // Mutable subview into the last column.
//! let mut column = v.column_mut(4);
//!
//! // Due to row-major memory layout, columns are non-contiguous
//! // and hence cannot be sorted by viewing them as mutable slices.
//! assert_eq!(column.as_slice_mut(), None);
//!
//! // Instead, every algorithm works on mutable (sub)views.
//! column.heap_sort();
//! assert_eq!(column.binary_search_iterative(&3, ..), Ok(Some(2)));
//!
//! assert!(v == arr2(&[[-5, 4, 1, -3, -1],
//!                     [ 8, 3, 2,  4,  2],
//!                     [38, 9, 3,  0,  3],
//!                     [ 4, 9, 0,  8,  8]]));
//! ```
//!
//! # Algorithms
//!
//! Complexities where *n* is the length of the (sub)view. None of the sorts is stable.
//!
//! | Algorithm                                                | Best             | Average          | Worst            | Space            |
//! |----------------------------------------------------------|------------------|------------------|------------------|------------------|
//! | [`binary_search_recursive`](Slice1Ext::binary_search_recursive) | *O*(1)   | *O*(log *n*)     | *O*(log *n*)     | *O*(log *n*)     |
//! | [`binary_search_iterative`](Slice1Ext::binary_search_iterative) | *O*(1)   | *O*(log *n*)     | *O*(log *n*)     | *O*(1)           |
//! | [`bubble_sort`](Slice1Ext::bubble_sort)                  | *O*(*n*²)        | *O*(*n*²)        | *O*(*n*²)        | *O*(1)           |
//! | [`selection_sort`](Slice1Ext::selection_sort)            | *O*(*n*²)        | *O*(*n*²)        | *O*(*n*²)        | *O*(1)           |
//! | [`insertion_sort`](Slice1Ext::insertion_sort)            | *O*(*n*)         | *O*(*n*²)        | *O*(*n*²)        | *O*(1)           |
//! | [`shell_sort`](Slice1Ext::shell_sort)                    | *O*(*n* log *n*) | *O*(*n*^1.5)     | *O*(*n*²)        | *O*(1)           |
//! | [`hoare_quick_sort`](Slice1Ext::hoare_quick_sort)        | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(*n*²)        | *O*(log *n*)     |
//! | [`lomuto_quick_sort`](Slice1Ext::lomuto_quick_sort)      | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(*n*²)        | *O*(log *n*)     |
//! | [`quick_sorted`](Slice1Ext::quick_sorted)                | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(*n*²)        | *O*(*n*)         |
//! | [`heap_sort`](Slice1Ext::heap_sort)                      | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(1)           |
//!
//! [binary search]: https://en.wikipedia.org/wiki/Binary_search_algorithm
//! [bubble sort]: https://en.wikipedia.org/wiki/Bubble_sort
//! [Shell sort]: https://en.wikipedia.org/wiki/Shellsort
//! [quicksort]: https://en.wikipedia.org/wiki/Quicksort
//! [heapsort]: https://en.wikipedia.org/wiki/Heapsort
//!
//! # Features
//!
//!   * `alloc` for the functional [`quick_sorted`](Slice1Ext::quick_sorted). Enabled by `std`.
//!   * `std` for implementing `std::error::Error` on [`SearchError`]. Enabled by `default`.
//!   * `stacker` for growing the stack of the deeply recursing functional quicksort on demand.
//!     Enabled by `default`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

mod binary_search;
mod bubble_sort;
mod error;
mod functional_quick_sort;
mod heap_sort;
mod insertion_sort;
mod partition;
mod quick_sort;
mod selection_sort;
mod shell_sort;

use crate::{
	binary_search::{binary_search_iterative, binary_search_recursive},
	bubble_sort::bubble_sort,
	heap_sort::heap_sort,
	insertion_sort::insertion_sort,
	quick_sort::{hoare_quick_sort, lomuto_quick_sort},
	selection_sort::selection_sort,
	shell_sort::shell_sort,
};
use core::cmp::Ordering::{self, Less};
use core::ops::RangeBounds;
use ndarray::{ArrayBase, Data, DataMut, Ix1};
#[cfg(feature = "alloc")]
use ndarray::Array1;

pub use crate::error::SearchError;
pub use ndarray;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing classic searching and sorting
/// algorithms.
///
/// The in-place sorts permute the array and leave it in ascending order. None of them preserves
/// the order of equal elements. The functional [`quick_sorted`](Slice1Ext::quick_sorted) leaves the
/// array untouched and returns a new sorted one instead.
pub trait Slice1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Binary searches `range` of this sorted array for a given element by recursing into the half
	/// which may still contain it.
	///
	/// Returns `Ok(Some(index))` of a matching element, or `Ok(None)` if there is none within
	/// `range`. If there are multiple matches, then any one of the matches could be returned. A
	/// range whose start lies past its end is empty, e.g., `3..=1`, and yields `Ok(None)`.
	///
	/// The inclusive bounds `first` and `last` translate to `first..=last`, whereas `..` searches
	/// the whole array.
	///
	/// If `range` is not sorted, the returned result is unspecified and meaningless.
	///
	/// # Errors
	///
	/// Returns [`SearchError`] if `range` extends beyond the end of the array.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classics::{ndarray::arr1, SearchError, Slice1Ext};
	///
	/// let s = arr1(&[1, 3, 5, 7, 9, 11]);
	///
	/// assert_eq!(s.binary_search_recursive(&7, 0..=5), Ok(Some(3)));
	/// assert_eq!(s.binary_search_recursive(&4, 0..=5), Ok(None));
	/// assert_eq!(s.binary_search_recursive(&7, 0..=2), Ok(None));
	/// assert_eq!(
	///     s.binary_search_recursive(&7, 0..=6),
	///     Err(SearchError::EndOutOfRange { end: 7, len: 6 }),
	/// );
	/// ```
	fn binary_search_recursive<R>(&self, x: &A, range: R) -> Result<Option<usize>, SearchError>
	where
		A: Ord,
		R: RangeBounds<usize>;
	/// Binary searches `range` of this sorted array with a comparator function by recursing into
	/// the half which may still contain the element.
	///
	/// The comparator function returns whether its argument is `Less`, `Equal` or `Greater` than
	/// the desired target. Apart from that, it's equivalent to [`binary_search_recursive`].
	///
	/// [`binary_search_recursive`]: Slice1Ext::binary_search_recursive
	///
	/// # Errors
	///
	/// Returns [`SearchError`] if `range` extends beyond the end of the array.
	fn binary_search_recursive_by<R, F>(
		&self,
		range: R,
		f: F,
	) -> Result<Option<usize>, SearchError>
	where
		R: RangeBounds<usize>,
		F: FnMut(&A) -> Ordering;

	/// Binary searches `range` of this sorted array for a given element by narrowing the bounds in
	/// a loop.
	///
	/// Probes the same indices and returns the same results as
	/// [`binary_search_recursive`](Slice1Ext::binary_search_recursive).
	///
	/// # Errors
	///
	/// Returns [`SearchError`] if `range` extends beyond the end of the array.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classics::{ndarray::arr1, SearchError, Slice1Ext};
	///
	/// let s = arr1(&[0, 1, 1, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
	///
	/// assert_eq!(s.binary_search_iterative(&13, ..), Ok(Some(9)));
	/// assert_eq!(s.binary_search_iterative(&4, ..), Ok(None));
	/// let r = s.binary_search_iterative(&1, ..);
	/// assert!(match r { Ok(Some(1..=4)) => true, _ => false, });
	/// assert_eq!(
	///     s.binary_search_iterative(&1, 14..),
	///     Err(SearchError::StartOutOfRange { start: 14, len: 13 }),
	/// );
	/// ```
	fn binary_search_iterative<R>(&self, x: &A, range: R) -> Result<Option<usize>, SearchError>
	where
		A: Ord,
		R: RangeBounds<usize>;
	/// Binary searches `range` of this sorted array with a comparator function by narrowing the
	/// bounds in a loop.
	///
	/// See [`binary_search_recursive_by`](Slice1Ext::binary_search_recursive_by).
	///
	/// # Errors
	///
	/// Returns [`SearchError`] if `range` extends beyond the end of the array.
	fn binary_search_iterative_by<R, F>(
		&self,
		range: R,
		f: F,
	) -> Result<Option<usize>, SearchError>
	where
		R: RangeBounds<usize>,
		F: FnMut(&A) -> Ordering;

	/// Sorts the array using bubble sort.
	///
	/// Every pass swaps adjacent out-of-order elements, moving the greatest remaining element to
	/// the end of the pass, whose bound then shrinks by one. *O*(*n*²) comparisons in any case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classics::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[5, 3, 4, 1, 2]);
	///
	/// v.bubble_sort();
	/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
	/// ```
	fn bubble_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with a comparator function using bubble sort.
	///
	/// The comparator function must define a total ordering for the elements in the array. If
	/// the ordering is not total, the order of the elements is unspecified.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classics::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	///
	/// // reverse sorting
	/// v.bubble_sort_by(|a, b| b.cmp(a));
	/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
	/// ```
	fn bubble_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;

	/// Sorts the array using selection sort.
	///
	/// Repeatedly swaps the least element of the unsorted suffix to its front. *O*(*n*²)
	/// comparisons but at most *n* - 1 swaps.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classics::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[3, -7, 0, 12, -1]);
	///
	/// v.selection_sort();
	/// assert!(v == arr1(&[-7, -1, 0, 3, 12]));
	/// ```
	fn selection_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with a comparator function using selection sort.
	fn selection_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;

	/// Sorts the array using insertion sort.
	///
	/// Grows a sorted prefix by shifting its greater elements one place to the right and inserting
	/// the next element into the gap. *O*(*n*) on sorted input, *O*(*n*²) otherwise.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classics::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[1, 2, 4, 3, 5]);
	///
	/// v.insertion_sort();
	/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
	/// ```
	fn insertion_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with a comparator function using insertion sort.
	fn insertion_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;

	/// Sorts the array using Shell sort.
	///
	/// # Current Implementation
	///
	/// Insertion sorts the subsequences of elements a gap apart, halving the gap from `len / 2`
	/// down to one.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classics::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[9, 8, 7, 6, 5, 4, 3, 2, 1]);
	///
	/// v.shell_sort();
	/// assert!(v == arr1(&[1, 2, 3, 4, 5, 6, 7, 8, 9]));
	/// ```
	fn shell_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with a comparator function using Shell sort.
	fn shell_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;

	/// Sorts the array using quicksort with Hoare partitioning.
	///
	/// # Current Implementation
	///
	/// The pivot is the element at the midpoint of the range. Two scans move inward from both ends
	/// and swap pairs of elements on the wrong side of the pivot until they cross. Both partitions
	/// are sorted recursively, the shorter one first and the longer one in a loop, which bounds
	/// the stack depth to *O*(log *n*).
	///
	/// The pivot is not randomized, hence certain inputs degrade it to *O*(*n*²) comparisons.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classics::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.hoare_quick_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn hoare_quick_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with a comparator function using quicksort with Hoare partitioning.
	///
	/// See [`hoare_quick_sort`](Slice1Ext::hoare_quick_sort).
	fn hoare_quick_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;

	/// Sorts the array using quicksort with Lomuto partitioning.
	///
	/// # Current Implementation
	///
	/// The pivot is the last element of the range. A single forward scan swaps every element less
	/// than or equal to the pivot to the front, which finally places the pivot at its sorted
	/// position. The elements before and after it are sorted recursively, the shorter side first.
	///
	/// Sorted or reverse sorted input degrades it to *O*(*n*²) comparisons as every partition
	/// only splits off its pivot.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classics::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.lomuto_quick_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn lomuto_quick_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with a comparator function using quicksort with Lomuto partitioning.
	///
	/// See [`lomuto_quick_sort`](Slice1Ext::lomuto_quick_sort).
	fn lomuto_quick_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;

	/// Returns a sorted copy of the array using functional quicksort, leaving the array
	/// untouched.
	///
	/// See [`quick_sorted`] for the algorithm, which this method applies to clones of the
	/// elements.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classics::{ndarray::arr1, Slice1Ext};
	///
	/// let v = arr1(&["pear", "apple", "mango"]);
	///
	/// assert_eq!(v.quick_sorted(), arr1(&["apple", "mango", "pear"]));
	/// assert_eq!(v, arr1(&["pear", "apple", "mango"]));
	/// ```
	#[cfg(feature = "alloc")]
	#[must_use]
	fn quick_sorted(&self) -> Array1<A>
	where
		A: Ord + Clone;
	/// Returns a sorted copy of the array with a comparator function using functional quicksort,
	/// leaving the array untouched.
	#[cfg(feature = "alloc")]
	#[must_use]
	fn quick_sorted_by<F>(&self, compare: F) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering;

	/// Sorts the array using heapsort.
	///
	/// # Current Implementation
	///
	/// Builds a binary max-heap in place by sifting down every parent from the last one up to the
	/// root. Then repeatedly swaps the root, the greatest remaining element, behind the shrinking
	/// heap and sifts the new root down. *O*(*n* log *n*) worst-case and no auxiliary memory.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classics::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[4, 10, 3, 5, 1]);
	///
	/// v.heap_sort();
	/// assert!(v == arr1(&[1, 3, 4, 5, 10]));
	/// ```
	fn heap_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with a comparator function using heapsort.
	fn heap_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;

	/// Checks if the elements of this array are sorted.
	///
	/// That is, for each element `a` and its following element `b`, `a <= b` must hold. If the
	/// array yields exactly zero or one element, `true` is returned.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classics::{ndarray::arr1, Slice1Ext};
	///
	/// let empty: [i32; 0] = [];
	///
	/// assert!(arr1(&[1, 2, 2, 9]).is_sorted());
	/// assert!(!arr1(&[1, 3, 2, 4]).is_sorted());
	/// assert!(arr1(&[0]).is_sorted());
	/// assert!(arr1(&empty).is_sorted());
	/// assert!(!arr1(&[0.0, 1.0, f32::NAN]).is_sorted());
	/// ```
	#[must_use]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd;
	/// Checks if the elements of this array are sorted using the given comparator function.
	///
	/// Instead of using `PartialOrd::partial_cmp`, this function uses the given `compare`
	/// function to determine the ordering of two elements. Apart from that, it's equivalent to
	/// [`is_sorted`]; see its documentation for more information.
	///
	/// [`is_sorted`]: Slice1Ext::is_sorted
	#[must_use]
	fn is_sorted_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>;
}

impl<A, S> Slice1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn binary_search_recursive<R>(&self, x: &A, range: R) -> Result<Option<usize>, SearchError>
	where
		A: Ord,
		R: RangeBounds<usize>,
	{
		self.binary_search_recursive_by(range, |p| p.cmp(x))
	}
	fn binary_search_recursive_by<R, F>(
		&self,
		range: R,
		mut f: F,
	) -> Result<Option<usize>, SearchError>
	where
		R: RangeBounds<usize>,
		F: FnMut(&A) -> Ordering,
	{
		let (start, end) = error::resolve(range, self.len())?;
		Ok(binary_search_recursive(self.view(), start, end, &mut f))
	}

	#[inline]
	fn binary_search_iterative<R>(&self, x: &A, range: R) -> Result<Option<usize>, SearchError>
	where
		A: Ord,
		R: RangeBounds<usize>,
	{
		self.binary_search_iterative_by(range, |p| p.cmp(x))
	}
	fn binary_search_iterative_by<R, F>(
		&self,
		range: R,
		mut f: F,
	) -> Result<Option<usize>, SearchError>
	where
		R: RangeBounds<usize>,
		F: FnMut(&A) -> Ordering,
	{
		let (start, end) = error::resolve(range, self.len())?;
		Ok(binary_search_iterative(self.view(), start, end, &mut f))
	}

	#[inline]
	fn bubble_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		bubble_sort(self.view_mut(), &mut A::lt);
	}
	#[inline]
	fn bubble_sort_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		bubble_sort(self.view_mut(), &mut |a: &A, b: &A| compare(a, b) == Less);
	}

	#[inline]
	fn selection_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		selection_sort(self.view_mut(), &mut A::lt);
	}
	#[inline]
	fn selection_sort_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		selection_sort(self.view_mut(), &mut |a: &A, b: &A| compare(a, b) == Less);
	}

	#[inline]
	fn insertion_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		insertion_sort(self.view_mut(), &mut A::lt);
	}
	#[inline]
	fn insertion_sort_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		insertion_sort(self.view_mut(), &mut |a: &A, b: &A| compare(a, b) == Less);
	}

	#[inline]
	fn shell_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		shell_sort(self.view_mut(), &mut A::lt);
	}
	#[inline]
	fn shell_sort_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		shell_sort(self.view_mut(), &mut |a: &A, b: &A| compare(a, b) == Less);
	}

	#[inline]
	fn hoare_quick_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		hoare_quick_sort(self.view_mut(), &mut A::lt);
	}
	#[inline]
	fn hoare_quick_sort_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		hoare_quick_sort(self.view_mut(), &mut |a: &A, b: &A| compare(a, b) == Less);
	}

	#[inline]
	fn lomuto_quick_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		lomuto_quick_sort(self.view_mut(), &mut A::lt);
	}
	#[inline]
	fn lomuto_quick_sort_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		lomuto_quick_sort(self.view_mut(), &mut |a: &A, b: &A| compare(a, b) == Less);
	}

	#[cfg(feature = "alloc")]
	#[inline]
	fn quick_sorted(&self) -> Array1<A>
	where
		A: Ord + Clone,
	{
		Array1::from_vec(quick_sorted(self.iter().cloned()))
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn quick_sorted_by<F>(&self, compare: F) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
	{
		Array1::from_vec(quick_sorted_by(self.iter().cloned(), compare))
	}

	#[inline]
	fn heap_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		heap_sort(self.view_mut(), &mut A::lt);
	}
	#[inline]
	fn heap_sort_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		heap_sort(self.view_mut(), &mut |a: &A, b: &A| compare(a, b) == Less);
	}

	#[inline]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd,
	{
		self.is_sorted_by(|a, b| a.partial_cmp(b))
	}
	fn is_sorted_by<F>(&self, mut compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>,
	{
		self.iter()
			.zip(self.iter().skip(1))
			.all(|(a, b)| compare(a, b).is_some_and(|o| o != Ordering::Greater))
	}
}

/// Collects `items` into a new sorted vector using functional quicksort.
///
/// The first element is the pivot. The remaining elements are split into those less than or
/// equal to the pivot and those greater than it, both are sorted recursively and concatenated
/// around the pivot. Every call builds its result anew.
///
/// This sort is unstable, *O*(*n* log *n*) on average, and *O*(*n*²) worst-case, e.g., on sorted
/// input, which also recurses as deep as the input is long. With the `stacker` feature, the stack
/// is grown on demand.
///
/// # Examples
///
/// ```
/// use ndarray_classics::quick_sorted;
///
/// assert_eq!(quick_sorted(["pear", "apple", "mango"]), ["apple", "mango", "pear"]);
/// assert_eq!(quick_sorted(vec![3, -1, 2, -1]), [-1, -1, 2, 3]);
/// ```
#[cfg(feature = "alloc")]
#[must_use]
pub fn quick_sorted<T, I>(items: I) -> Vec<T>
where
	T: Ord,
	I: IntoIterator<Item = T>,
{
	functional_quick_sort::functional_quick_sort(items, &mut T::lt)
}

/// Collects `items` into a new sorted vector with a comparator function using functional
/// quicksort.
///
/// See [`quick_sorted`].
///
/// # Examples
///
/// ```
/// use ndarray_classics::quick_sorted_by;
///
/// let words = ["kiwi", "fig", "banana"];
/// assert_eq!(quick_sorted_by(words, |a, b| a.len().cmp(&b.len())), ["fig", "kiwi", "banana"]);
/// ```
#[cfg(feature = "alloc")]
#[must_use]
pub fn quick_sorted_by<T, I, F>(items: I, mut compare: F) -> Vec<T>
where
	I: IntoIterator<Item = T>,
	F: FnMut(&T, &T) -> Ordering,
{
	functional_quick_sort::functional_quick_sort(items, &mut |a: &T, b: &T| compare(a, b) == Less)
}
