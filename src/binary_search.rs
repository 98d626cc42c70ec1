//! Binary search within a range of a sorted array, recursively and iteratively.
//!
//! Both variants probe the same sequence of indices. The range is half-open here, `lo..hi`, and
//! the probed index is the floored midpoint of the inclusive bounds `lo` and `hi - 1`.

use core::cmp::Ordering::{self, Equal, Greater, Less};
use ndarray::ArrayView1;

/// Binary searches `v[lo..hi]` by recursing into the half which may still contain the target.
///
/// `f` compares a probed element against the target. Returns the index of a matching element.
pub fn binary_search_recursive<T, F>(
	v: ArrayView1<'_, T>,
	lo: usize,
	hi: usize,
	f: &mut F,
) -> Option<usize>
where
	F: FnMut(&T) -> Ordering,
{
	// The bounds have converged.
	if lo >= hi {
		return None;
	}

	let mid = lo + (hi - 1 - lo) / 2;
	match f(&v[mid]) {
		Equal => Some(mid),
		Greater => binary_search_recursive(v, lo, mid, f),
		Less => binary_search_recursive(v, mid + 1, hi, f),
	}
}

/// Binary searches `v[lo..hi]` by narrowing the bounds in a loop.
///
/// `f` compares a probed element against the target. Returns the index of a matching element.
pub fn binary_search_iterative<T, F>(
	v: ArrayView1<'_, T>,
	mut lo: usize,
	mut hi: usize,
	f: &mut F,
) -> Option<usize>
where
	F: FnMut(&T) -> Ordering,
{
	while lo < hi {
		let mid = lo + (hi - 1 - lo) / 2;
		match f(&v[mid]) {
			Equal => return Some(mid),
			Greater => hi = mid,
			Less => lo = mid + 1,
		}
	}
	None
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{binary_search_iterative, binary_search_recursive};
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[test]
	fn finds_present_target() {
		let v = arr1(&[1, 3, 5, 7, 9, 11]);
		assert_eq!(binary_search_recursive(v.view(), 0, 6, &mut |p| p.cmp(&7)), Some(3));
		assert_eq!(binary_search_iterative(v.view(), 0, 6, &mut |p| p.cmp(&7)), Some(3));
	}

	#[test]
	fn misses_absent_target() {
		let v = arr1(&[1, 3, 5, 7, 9, 11]);
		for x in [0, 4, 12] {
			assert_eq!(binary_search_recursive(v.view(), 0, 6, &mut |p| p.cmp(&x)), None);
			assert_eq!(binary_search_iterative(v.view(), 0, 6, &mut |p| p.cmp(&x)), None);
		}
	}

	#[test]
	fn stays_within_range() {
		let v = arr1(&[1, 3, 5, 7, 9, 11]);
		assert_eq!(binary_search_recursive(v.view(), 0, 3, &mut |p| p.cmp(&7)), None);
		assert_eq!(binary_search_iterative(v.view(), 4, 6, &mut |p| p.cmp(&7)), None);
		assert_eq!(binary_search_iterative(v.view(), 3, 4, &mut |p| p.cmp(&7)), Some(3));
		assert_eq!(binary_search_recursive(v.view(), 2, 2, &mut |p| p.cmp(&5)), None);
	}

	#[quickcheck]
	fn variants_probe_alike(xs: Vec<i32>, x: i32) {
		let mut xs = xs;
		xs.sort_unstable();
		let v = Array1::from_vec(xs);
		let mut recursive_probes = Vec::new();
		let mut iterative_probes = Vec::new();
		let found = binary_search_recursive(v.view(), 0, v.len(), &mut |p: &i32| {
			recursive_probes.push(*p);
			p.cmp(&x)
		});
		let also_found = binary_search_iterative(v.view(), 0, v.len(), &mut |p: &i32| {
			iterative_probes.push(*p);
			p.cmp(&x)
		});
		assert_eq!(found, also_found);
		assert_eq!(recursive_probes, iterative_probes);
		match found {
			Some(i) => assert_eq!(v[i], x),
			None => assert!(!v.iter().any(|&y| y == x)),
		}
	}
}
