use crate::order::{Comparator, NaturalOrder};

pub fn selection_sort<T: PartialOrd>(v: &mut [T]) {
    selection_sort_by(v, &NaturalOrder);
}

pub fn selection_sort_by<T, C: Comparator<T>>(v: &mut [T], cmp: &C) {
    let len = v.len();
    let mut i = 0usize;
    while i + 1 < len {
        let mut min_idx = i;
        for j in (i + 1)..len {
            if cmp.lt(&v[j], &v[min_idx]) {
                min_idx = j;
            }
        }
        v.swap(i, min_idx);
        i += 1;
    }
}
