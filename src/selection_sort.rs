use ndarray::ArrayViewMut1;

/// Sorts `v` using selection sort, which is *O*(*n*^2) worst-case but swaps at most *n* - 1
/// times.
pub fn selection_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	for i in 0..len.saturating_sub(1) {
		// Select the least element of the unsorted suffix.
		let mut min = i;
		for j in i + 1..len {
			if is_less(&v[j], &v[min]) {
				min = j;
			}
		}
		v.swap(i, min);
	}
}
