//! Derivative work of [`core::slice::sort`] licensed under `MIT OR Apache-2.0`.
//!
//! [`core::slice::sort`]: https://doc.rust-lang.org/src/core/slice/sort.rs.html

use crate::partition::{hoare_partition, lomuto_partition};
use ndarray::{ArrayViewMut1, Axis};

/// Sorts `v` using quicksort with Hoare partitioning around the middle element, which is
/// *O*(*n* \* log(*n*)) on average but *O*(*n*^2) worst-case.
pub fn hoare_quick_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	loop {
		if v.len() < 2 {
			return;
		}

		let (end, start) = hoare_partition(v.view_mut(), is_less);

		// Split the slice into `left`, the elements equal to the pivot, and `right`.
		let (left, rest) = v.split_at(Axis(0), end);
		let (_, right) = rest.split_at(Axis(0), start - end);

		// Recurse into the shorter side only in order to minimize the total number of recursive
		// calls and consume less stack space. Then just continue with the longer side (this is
		// akin to tail recursion).
		if left.len() < right.len() {
			hoare_quick_sort(left, is_less);
			v = right;
		} else {
			hoare_quick_sort(right, is_less);
			v = left;
		}
	}
}

/// Sorts `v` using quicksort with Lomuto partitioning around the last element, which is
/// *O*(*n* \* log(*n*)) on average but *O*(*n*^2) worst-case, e.g., on sorted input.
pub fn lomuto_quick_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	loop {
		if v.len() < 2 {
			return;
		}

		let mid = lomuto_partition(v.view_mut(), is_less);

		// Split the slice into `left`, `pivot`, and `right`.
		let (left, right) = v.split_at(Axis(0), mid);
		let (_, right) = right.split_at(Axis(0), 1);

		// Same as above.
		if left.len() < right.len() {
			lomuto_quick_sort(left, is_less);
			v = right;
		} else {
			lomuto_quick_sort(right, is_less);
			v = left;
		}
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{hoare_quick_sort, lomuto_quick_sort};
	use ndarray::{Array1, arr1, arr2};
	use quickcheck_macros::quickcheck;

	#[test]
	fn sorts_examples() {
		let mut array = arr1(&[5, 3, 4, 1, 2]);
		hoare_quick_sort(array.view_mut(), &mut i32::lt);
		assert_eq!(array, arr1(&[1, 2, 3, 4, 5]));

		let mut array = arr1(&[-5, 4, 1, -3, 2, 4, 0]);
		lomuto_quick_sort(array.view_mut(), &mut i32::lt);
		assert_eq!(array, arr1(&[-5, -3, 0, 1, 2, 4, 4]));
	}

	#[test]
	fn sorts_rows_of_column() {
		let mut v = arr2(&[[-5, 4, 1, -3, 2], [8, 3, 2, 4, 8], [38, 9, 3, 0, 3], [4, 9, 0, 8, -1]]);
		hoare_quick_sort(v.column_mut(4), &mut i32::lt);
		lomuto_quick_sort(v.column_mut(0), &mut i32::lt);
		assert_eq!(
			v,
			arr2(&[[-5, 4, 1, -3, -1], [4, 3, 2, 4, 2], [8, 9, 3, 0, 3], [38, 9, 0, 8, 8]])
		);
	}

	// Picking the last element as pivot degrades to `n * (n + 1) / 2 - 1` comparisons on sorted
	// input since every partition only splits off its pivot.
	#[test]
	fn lomuto_sorted_input_is_quadratic() {
		let mut comparisons = 0u64;
		let mut array = Array1::from_iter(0..100u32);
		lomuto_quick_sort(array.view_mut(), &mut |a: &u32, b: &u32| {
			comparisons += 1;
			a < b
		});
		assert_eq!(comparisons, 5049);
		assert_eq!(array, Array1::from_iter(0..100u32));
	}

	#[test]
	fn degenerate_inputs_keep_stack_shallow() {
		let len = 10_000u32;
		for mut array in [
			Array1::from_iter(0..len),
			Array1::from_iter((0..len).rev()),
			Array1::from_elem(len as usize, 7),
		] {
			let mut hoare = array.clone();
			hoare_quick_sort(hoare.view_mut(), &mut u32::lt);
			lomuto_quick_sort(array.view_mut(), &mut u32::lt);
			assert_eq!(hoare, array);
			for i in 1..array.len() {
				assert!(array[i - 1] <= array[i]);
			}
		}
	}

	#[quickcheck]
	fn hoare_sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		hoare_quick_sort(array.view_mut(), &mut u32::lt);
		assert_eq!(array, sorted);
	}

	#[quickcheck]
	fn lomuto_sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		lomuto_quick_sort(array.view_mut(), &mut u32::lt);
		assert_eq!(array, sorted);
	}
}
