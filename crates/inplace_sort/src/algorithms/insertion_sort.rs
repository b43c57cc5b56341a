use crate::order::{Comparator, NaturalOrder};

pub fn insertion_sort<T: PartialOrd>(v: &mut [T]) {
    insertion_sort_by(v, &NaturalOrder);
}

/// Moves each element left past every strictly greater predecessor.
///
/// Also the base case of the hybrid sort for short ranges.
pub fn insertion_sort_by<T, C: Comparator<T>>(v: &mut [T], cmp: &C) {
    let len = v.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let mut j = i;
        while j > 0 && cmp.gt(&v[j - 1], &v[j]) {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}
