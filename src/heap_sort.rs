//! Derivative work of [`core::slice::sort`] licensed under `MIT OR Apache-2.0`.
//!
//! [`core::slice::sort`]: https://doc.rust-lang.org/src/core/slice/sort.rs.html

use ndarray::{ArrayViewMut1, s};

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
pub fn heap_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	// Build the heap in linear time.
	for i in (0..v.len() / 2).rev() {
		sift_down(v.view_mut(), i, is_less);
	}

	// Pop maximal elements from the heap.
	for i in (1..v.len()).rev() {
		v.swap(0, i);
		sift_down(v.slice_mut(s![..i]), 0, is_less);
	}
}

/// Restores the invariant `parent >= child` of the binary heap `v` below `node`, assuming both
/// subtrees of `node` already satisfy it.
///
/// The heap size is the length of `v` and the children of `node` are `2 * node + 1` and
/// `2 * node + 2`.
pub fn sift_down<T, F>(mut v: ArrayViewMut1<'_, T>, mut node: usize, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	loop {
		// Children of `node`.
		let mut child = 2 * node + 1;
		if child >= v.len() {
			break;
		}

		// Choose the greater child.
		if child + 1 < v.len() && is_less(&v[child], &v[child + 1]) {
			child += 1;
		}

		// Stop if the invariant holds at `node`.
		if !is_less(&v[node], &v[child]) {
			break;
		}

		// Swap `node` with the greater child, move one step down, and continue sifting.
		v.swap(node, child);
		node = child;
	}
}
