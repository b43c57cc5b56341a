use crate::HYBRID_PARAMS;
use crate::order::Comparator;

#[inline]
pub fn floor_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        usize::BITS as usize - 1 - n.leading_zeros() as usize
    }
}

/// Depth budget handed to the top level of the hybrid sort for `n` elements.
#[inline]
pub fn hybrid_depth_limit(n: usize) -> usize {
    floor_log2(n) * HYBRID_PARAMS.depth_factor
}

/// Index of the median of `v[a]`, `v[b]`, `v[c]`, decided with `lt` only.
#[inline]
pub(crate) fn median3_index<T, C>(v: &[T], a: usize, b: usize, c: usize, cmp: &C) -> usize
where
    C: Comparator<T>,
{
    if cmp.lt(&v[a], &v[b]) {
        if cmp.lt(&v[b], &v[c]) {
            b
        } else if cmp.lt(&v[a], &v[c]) {
            c
        } else {
            a
        }
    } else if cmp.lt(&v[a], &v[c]) {
        a
    } else if cmp.lt(&v[b], &v[c]) {
        c
    } else {
        b
    }
}

/// Lomuto partition around the last element of `v`.
///
/// Elements strictly less than the pivot end up in `v[..p]`, the pivot lands
/// at `v[p]`, and everything else follows. Returns `p`.
#[inline]
pub(crate) fn partition_lomuto<T, C>(v: &mut [T], cmp: &C) -> usize
where
    C: Comparator<T>,
{
    debug_assert!(!v.is_empty());

    let pivot = v.len() - 1;
    let mut store = 0usize;
    for j in 0..pivot {
        if cmp.lt(&v[j], &v[pivot]) {
            v.swap(store, j);
            store += 1;
        }
    }
    v.swap(store, pivot);
    store
}
