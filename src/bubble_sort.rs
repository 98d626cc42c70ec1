use ndarray::ArrayViewMut1;

/// Sorts `v` using bubble sort, which is *O*(*n*^2) worst-case.
///
/// Each pass bubbles the greatest element of `v[..=end]` up to `end`, so the bound of the next pass
/// shrinks by one.
pub fn bubble_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	for end in (1..v.len()).rev() {
		for i in 0..end {
			if is_less(&v[i + 1], &v[i]) {
				v.swap(i, i + 1);
			}
		}
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::bubble_sort;
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[test]
	fn sorts_example() {
		let mut array = arr1(&[5, 3, 4, 1, 2]);
		bubble_sort(array.view_mut(), &mut i32::lt);
		assert_eq!(array, arr1(&[1, 2, 3, 4, 5]));
	}

	#[test]
	fn sorts_pair() {
		let mut array = arr1(&[2, 1]);
		bubble_sort(array.view_mut(), &mut i32::lt);
		assert_eq!(array, arr1(&[1, 2]));
	}

	#[quickcheck]
	fn sorted(xs: Vec<i32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		bubble_sort(array.view_mut(), &mut i32::lt);
		assert_eq!(array, sorted);
	}
}
