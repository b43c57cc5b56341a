pub mod bubble_sort;
pub mod common;
pub mod heap_sort;
pub mod hybrid_sort;
pub mod insertion_sort;
pub mod quick_sort;
pub mod selection_sort;
