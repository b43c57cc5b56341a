mod algorithms;
mod order;
mod subrange;

pub use algorithms::bubble_sort::{bubble_sort, bubble_sort_by};
pub use algorithms::common::{floor_log2, hybrid_depth_limit};
pub use algorithms::heap_sort::{heap_sort, heap_sort_by};
pub use algorithms::hybrid_sort::{hybrid_sort, hybrid_sort_by};
pub use algorithms::insertion_sort::{insertion_sort, insertion_sort_by};
pub use algorithms::quick_sort::{quick_sort, quick_sort_by};
pub use algorithms::selection_sort::{selection_sort, selection_sort_by};
pub use order::{ByLess, Comparator, NaturalOrder, Reverse};
pub use subrange::{RangeError, Subrange, subrange};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    QuickSort,
    HeapSort,
    HybridSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 6] = [
    SortAlgorithm::BubbleSort,
    SortAlgorithm::SelectionSort,
    SortAlgorithm::InsertionSort,
    SortAlgorithm::QuickSort,
    SortAlgorithm::HeapSort,
    SortAlgorithm::HybridSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::BubbleSort => "bubble_sort",
        SortAlgorithm::SelectionSort => "selection_sort",
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::QuickSort => "quick_sort",
        SortAlgorithm::HeapSort => "heap_sort",
        SortAlgorithm::HybridSort => "hybrid_sort",
    }
}

/// Whether the worst case of `algo` is quadratic in the input length.
pub fn is_quadratic(algo: SortAlgorithm) -> bool {
    !matches!(algo, SortAlgorithm::HeapSort | SortAlgorithm::HybridSort)
}

#[derive(Clone, Copy, Debug)]
pub struct HybridParams {
    /// Ranges shorter than this go straight to insertion sort.
    pub insertion_threshold: usize,
    /// Depth budget is `depth_factor * floor(log2(n))`.
    pub depth_factor: usize,
}

pub const HYBRID_PARAMS: HybridParams = HybridParams {
    insertion_threshold: 16,
    depth_factor: 2,
};

pub fn sort<T: PartialOrd>(algo: SortAlgorithm, v: &mut [T]) {
    sort_by(algo, v, &NaturalOrder);
}

pub fn sort_by<T, C: Comparator<T>>(algo: SortAlgorithm, v: &mut [T], cmp: &C) {
    match algo {
        SortAlgorithm::BubbleSort => bubble_sort_by(v, cmp),
        SortAlgorithm::SelectionSort => selection_sort_by(v, cmp),
        SortAlgorithm::InsertionSort => insertion_sort_by(v, cmp),
        SortAlgorithm::QuickSort => quick_sort_by(v, cmp),
        SortAlgorithm::HeapSort => heap_sort_by(v, cmp),
        SortAlgorithm::HybridSort => hybrid_sort_by(v, cmp),
    }
}
