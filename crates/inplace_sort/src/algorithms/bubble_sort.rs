use crate::order::{Comparator, NaturalOrder};

pub fn bubble_sort<T: PartialOrd>(v: &mut [T]) {
    bubble_sort_by(v, &NaturalOrder);
}

/// Full passes over adjacent pairs until a pass makes no swap.
///
/// Sorted input costs exactly one pass of `len - 1` comparisons.
pub fn bubble_sort_by<T, C: Comparator<T>>(v: &mut [T], cmp: &C) {
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut swapped = true;
    while swapped {
        swapped = false;
        for i in 0..len - 1 {
            if cmp.gt(&v[i], &v[i + 1]) {
                v.swap(i, i + 1);
                swapped = true;
            }
        }
    }
}
