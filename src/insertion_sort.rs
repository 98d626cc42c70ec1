//! Derivative work of [`core::slice::sort`] licensed under `MIT OR Apache-2.0`.
//!
//! [`core::slice::sort`]: https://doc.rust-lang.org/src/core/slice/sort.rs.html

use ndarray::{ArrayViewMut1, s};

/// Sorts a slice using insertion sort, which is *O*(*n*^2) worst-case and *O*(*n*) on sorted input.
pub fn insertion_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	for i in 1..v.len() {
		shift_tail(v.slice_mut(s![..i + 1]), is_less);
	}
}

/// Shifts the last element to the left until it encounters a smaller or equal element.
///
/// Every greater element of the sorted prefix moves one place to the right.
fn shift_tail<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let mut hole = v.len() - 1;
	while hole > 0 && is_less(&v[hole], &v[hole - 1]) {
		v.swap(hole - 1, hole);
		hole -= 1;
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::insertion_sort;
	use ndarray::{Array1, arr1, arr2};
	use quickcheck_macros::quickcheck;

	#[test]
	fn sorted_input_is_linear() {
		let mut comparisons = 0;
		let mut array = Array1::from_iter(0..100u32);
		insertion_sort(array.view_mut(), &mut |a: &u32, b: &u32| {
			comparisons += 1;
			a < b
		});
		assert_eq!(comparisons, 99);
	}

	#[test]
	fn sorts_column() {
		let mut v = arr2(&[[4, 1], [3, 2], [2, 3], [1, 4]]);
		insertion_sort(v.column_mut(0), &mut i32::lt);
		assert_eq!(v, arr2(&[[1, 1], [2, 2], [3, 3], [4, 4]]));
		assert_eq!(v.column(1), arr1(&[1, 2, 3, 4]));
	}

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut array = Array1::from_vec(xs);
		insertion_sort(array.view_mut(), &mut u32::lt);
		for i in 1..array.len() {
			assert!(array[i - 1] <= array[i]);
		}
	}
}
