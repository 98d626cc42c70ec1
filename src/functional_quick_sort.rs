//! Quicksort building a new sorted sequence instead of permuting its input.
//!
//! The first element is the pivot. The remaining elements are split into those less than or equal
//! to the pivot and those greater than it, both are sorted recursively and concatenated around the
//! pivot. Sorted input leads to a recursion depth equal to its length, hence with the `stacker`
//! feature the stack is grown on demand.

#![cfg(feature = "alloc")]

use alloc::vec::Vec;

/// Remaining stack space below which a new stack segment is allocated.
#[cfg(feature = "stacker")]
const RED_ZONE: usize = 64 * 1024;
/// Size of every newly allocated stack segment.
#[cfg(feature = "stacker")]
const STACK_SIZE: usize = 1024 * 1024;

/// Collects `items` into a new sorted vector using functional quicksort, which is
/// *O*(*n* \* log(*n*)) on average but *O*(*n*^2) worst-case.
pub fn functional_quick_sort<T, I, F>(items: I, is_less: &mut F) -> Vec<T>
where
	I: IntoIterator<Item = T>,
	F: FnMut(&T, &T) -> bool,
{
	recurse(items.into_iter().collect(), is_less)
}

fn recurse<T, F>(items: Vec<T>, is_less: &mut F) -> Vec<T>
where
	F: FnMut(&T, &T) -> bool,
{
	let mut items = items.into_iter();
	let Some(pivot) = items.next() else {
		return Vec::new();
	};

	let (smaller, larger): (Vec<T>, Vec<T>) = items.partition(|item| !is_less(&pivot, item));

	let mut sorted = grow(|| recurse(smaller, is_less));
	sorted.reserve(larger.len() + 1);
	sorted.push(pivot);
	sorted.extend(grow(|| recurse(larger, is_less)));
	sorted
}

#[inline]
fn grow<R>(f: impl FnOnce() -> R) -> R {
	#[cfg(feature = "stacker")]
	{
		stacker::maybe_grow(RED_ZONE, STACK_SIZE, f)
	}
	#[cfg(not(feature = "stacker"))]
	{
		f()
	}
}
