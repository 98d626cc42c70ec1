//! Partitioning schemes of the in-place quicksorts.

use ndarray::ArrayViewMut1;

/// Partitions `v` around the element at its midpoint using two scans moving inward.
///
/// Returns `(end, start)` such that every element of `v[..end]` is less than or equal to the pivot,
/// every element of `v[start..]` is greater than or equal to it, and `end <= start`. Elements
/// in between are equal to the pivot and already in place.
///
/// The pivot is compared in place and its index is followed across swaps, hence `T` needs not be
/// cloneable.
pub fn hoare_partition<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F) -> (usize, usize)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	debug_assert!(len >= 2);

	let mut pivot = (len - 1) / 2;
	// Scans `v[l]` rightward and `v[r - 1]` leftward.
	let mut l = 0;
	let mut r = len;
	while l < r {
		while is_less(&v[l], &v[pivot]) {
			l += 1;
		}
		while is_less(&v[pivot], &v[r - 1]) {
			r -= 1;
		}
		if l < r {
			v.swap(l, r - 1);
			if pivot == l {
				pivot = r - 1;
			} else if pivot == r - 1 {
				pivot = l;
			}
			l += 1;
			r -= 1;
		}
	}
	(r, l)
}

/// Partitions `v` around its last element with a single forward scan.
///
/// Every element less than or equal to the pivot is swapped to the front. Returns the final index
/// of the pivot, which is always the last element moved.
pub fn lomuto_partition<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F) -> usize
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	debug_assert!(len >= 1);

	let last = len - 1;
	let mut marker = 0;
	for i in 0..len {
		if !is_less(&v[last], &v[i]) {
			v.swap(marker, i);
			marker += 1;
		}
	}
	marker - 1
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{hoare_partition, lomuto_partition};
	use ndarray::{Array1, arr1};
	use quickcheck::TestResult;
	use quickcheck_macros::quickcheck;

	#[test]
	fn hoare_splits_around_middle() {
		let mut v = arr1(&[9, 1, 8, 5, 2, 7, 3]);
		let (end, start) = hoare_partition(v.view_mut(), &mut i32::lt);
		assert!(end <= start);
		assert!(v.iter().take(end).all(|&x| x <= 5));
		assert!(v.iter().skip(start).all(|&x| x >= 5));
	}

	#[test]
	fn lomuto_places_pivot() {
		let mut v = arr1(&[7, 2, 9, 1, 5]);
		let mid = lomuto_partition(v.view_mut(), &mut i32::lt);
		assert_eq!(mid, 2);
		assert_eq!(v, arr1(&[2, 1, 5, 7, 9]));
	}

	#[quickcheck]
	fn hoare_partitioned(xs: Vec<i16>) -> TestResult {
		if xs.len() < 2 {
			return TestResult::discard();
		}
		let pivot = xs[(xs.len() - 1) / 2];
		let mut v = Array1::from_vec(xs);
		let (end, start) = hoare_partition(v.view_mut(), &mut i16::lt);
		TestResult::from_bool(
			end <= start
				&& v.iter().take(end).all(|&x| x <= pivot)
				&& v.iter().take(start).skip(end).all(|&x| x == pivot)
				&& v.iter().skip(start).all(|&x| x >= pivot),
		)
	}

	#[quickcheck]
	fn lomuto_partitioned(xs: Vec<i16>) -> TestResult {
		let Some(&pivot) = xs.last() else {
			return TestResult::discard();
		};
		let mut v = Array1::from_vec(xs);
		let mid = lomuto_partition(v.view_mut(), &mut i16::lt);
		TestResult::from_bool(
			v[mid] == pivot
				&& v.iter().take(mid).all(|&x| x <= pivot)
				&& v.iter().skip(mid + 1).all(|&x| x > pivot),
		)
	}
}
