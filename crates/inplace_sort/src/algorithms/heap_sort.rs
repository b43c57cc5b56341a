use crate::order::{Comparator, NaturalOrder};

pub fn heap_sort<T: PartialOrd>(v: &mut [T]) {
    heap_sort_by(v, &NaturalOrder);
}

/// In-place max-heap sort. `O(n log n)` regardless of input.
///
/// The hybrid sort falls back to this once its depth budget runs out.
pub fn heap_sort_by<T, C: Comparator<T>>(v: &mut [T], cmp: &C) {
    let len = v.len();
    if len < 2 {
        return;
    }

    for root in (0..len / 2).rev() {
        sift_down(v, root, len, cmp);
    }

    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(v, 0, end, cmp);
    }
}

// Restores `parent >= child` below `root`, looking only at `v[..end]`.
#[inline]
fn sift_down<T, C: Comparator<T>>(v: &mut [T], mut root: usize, end: usize, cmp: &C) {
    loop {
        let left = root * 2 + 1;
        let right = left + 1;

        let mut largest = root;
        if left < end && cmp.gt(&v[left], &v[largest]) {
            largest = left;
        }
        if right < end && cmp.gt(&v[right], &v[largest]) {
            largest = right;
        }

        if largest == root {
            break;
        }

        v.swap(root, largest);
        root = largest;
    }
}
