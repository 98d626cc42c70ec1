use ndarray::ArrayViewMut1;

/// Sorts `v` using Shell sort with the gap sequence `len / 2`, `len / 4`, ..., `1`.
///
/// Each round is an insertion sort over the interleaved subsequences of elements `gap` apart. The
/// last round has a gap of one and is a plain insertion sort over an almost sorted array.
pub fn shell_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	let mut gap = len / 2;
	while gap > 0 {
		for i in gap..len {
			// Insert `v[i]` into its subsequence `.., i - 2 * gap, i - gap`.
			let mut j = i;
			while j >= gap && is_less(&v[j], &v[j - gap]) {
				v.swap(j - gap, j);
				j -= gap;
			}
		}
		gap /= 2;
	}
}
