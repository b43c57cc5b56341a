use tracing::trace;

use crate::HYBRID_PARAMS;
use crate::order::{Comparator, NaturalOrder};

use super::{common, heap_sort, insertion_sort};

pub fn hybrid_sort<T: PartialOrd>(v: &mut [T]) {
    hybrid_sort_by(v, &NaturalOrder);
}

/// Introspective sort: median-of-three quicksort that hands short ranges to
/// insertion sort and switches to heap sort once `2 * floor(log2(n))` levels
/// of partitioning have been spent.
///
/// Worst case is `O(n log n)` comparisons and the recursion depth never
/// exceeds the budget plus one. Never allocates.
pub fn hybrid_sort_by<T, C: Comparator<T>>(v: &mut [T], cmp: &C) {
    let len = v.len();
    if len < 2 {
        return;
    }
    hybrid_recursive(v, common::hybrid_depth_limit(len), cmp);
}

fn hybrid_recursive<T, C: Comparator<T>>(v: &mut [T], depth_limit: usize, cmp: &C) {
    #[cfg(test)]
    let _level = depth_probe::enter();

    let len = v.len();
    if len < HYBRID_PARAMS.insertion_threshold {
        insertion_sort::insertion_sort_by(v, cmp);
        return;
    }

    if depth_limit == 0 {
        trace!(len, "hybrid sort depth budget exhausted, using heap sort");
        heap_sort::heap_sort_by(v, cmp);
        return;
    }

    let last = len - 1;
    let pivot = common::median3_index(v, 0, len / 2, last, cmp);
    v.swap(pivot, last);

    let split = common::partition_lomuto(v, cmp);
    let (left, rest) = v.split_at_mut(split);
    let right = &mut rest[1..];

    hybrid_recursive(left, depth_limit - 1, cmp);
    hybrid_recursive(right, depth_limit - 1, cmp);
}

#[cfg(test)]
pub(crate) mod depth_probe {
    use std::cell::Cell;

    thread_local! {
        static CURRENT: Cell<usize> = const { Cell::new(0) };
        static DEEPEST: Cell<usize> = const { Cell::new(0) };
    }

    pub(crate) struct Level;

    impl Drop for Level {
        fn drop(&mut self) {
            CURRENT.with(|c| c.set(c.get() - 1));
        }
    }

    pub(crate) fn enter() -> Level {
        let now = CURRENT.with(|c| {
            c.set(c.get() + 1);
            c.get()
        });
        DEEPEST.with(|d| d.set(d.get().max(now)));
        Level
    }

    /// Deepest nesting of `hybrid_recursive` seen on this thread since the last reset.
    pub(crate) fn take_deepest() -> usize {
        DEEPEST.with(|d| d.replace(0))
    }
}
