use crate::order::{Comparator, NaturalOrder};

use super::common;

pub fn quick_sort<T: PartialOrd>(v: &mut [T]) {
    quick_sort_by(v, &NaturalOrder);
}

/// Plain recursive quicksort with the last element as pivot.
///
/// There is no depth limit and no pivot sampling: sorted or reverse-sorted
/// input degrades to quadratic time and linear recursion depth. Use
/// [`hybrid_sort_by`](crate::hybrid_sort_by) when that matters.
pub fn quick_sort_by<T, C: Comparator<T>>(v: &mut [T], cmp: &C) {
    if v.len() < 2 {
        return;
    }
    quick_sort_recursive(v, 0, v.len() - 1, cmp);
}

// `min` and `max` are inclusive.
fn quick_sort_recursive<T, C: Comparator<T>>(v: &mut [T], min: usize, max: usize, cmp: &C) {
    if min >= max {
        return;
    }

    let pivot = min + common::partition_lomuto(&mut v[min..=max], cmp);

    if pivot > 0 {
        quick_sort_recursive(v, min, pivot - 1, cmp);
    }
    quick_sort_recursive(v, pivot + 1, max, cmp);
}
