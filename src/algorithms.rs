pub mod chain;
pub mod insertion;
pub mod merge_insertion;
pub mod pairing;

use std::time::Duration;

/// Counts element comparisons when the `counters` feature is enabled
#[allow(dead_code)]
pub static COMPARISON_COUNTER: crate::data::GlobalCounter = crate::data::GlobalCounter::new();

/// A sorting algorithm working on a copy of its input
pub trait Sort {
    /// Sort a copy of `values` in non-decreasing order
    ///
    /// Returns the sorted copy and the time spent building the container and sorting it.
    fn sort<T: Ord + Clone>(values: &[T]) -> (Vec<T>, Duration);
}

/// The container strategies the driver compares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Contiguous storage, cheap random access but linear insertion shifts
    Vector,
    /// Ring buffer storage, insertion shifts towards the closer end
    Deque,
}

impl Strategy {
    /// All strategies, in reporting order
    pub const ALL: [Strategy; 2] = [Strategy::Vector, Strategy::Deque];

    /// The name of the underlying container
    pub fn container(self) -> String {
        match self {
            Strategy::Vector => <chain::Contiguous as chain::Storage>::display(),
            Strategy::Deque => <chain::Segmented as chain::Storage>::display(),
        }
    }

    /// The sort function for this strategy using `order`
    pub fn sorter<T: Ord + Clone>(self, order: Order) -> fn(&[T]) -> (Vec<T>, Duration) {
        use merge_insertion::{Jacobsthal, MergeInsertionSort, Sequential};

        match (self, order) {
            (Strategy::Vector, Order::Sequential) => {
                <MergeInsertionSort<chain::Contiguous, Sequential> as Sort>::sort
            }
            (Strategy::Vector, Order::Jacobsthal) => {
                <MergeInsertionSort<chain::Contiguous, Jacobsthal> as Sort>::sort
            }
            (Strategy::Deque, Order::Sequential) => {
                <MergeInsertionSort<chain::Segmented, Sequential> as Sort>::sort
            }
            (Strategy::Deque, Order::Jacobsthal) => {
                <MergeInsertionSort<chain::Segmented, Jacobsthal> as Sort>::sort
            }
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.container())
    }
}

/// The order pending minima are inserted in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Order {
    /// Pairing order
    #[default]
    Sequential,
    /// Jacobsthal groups, each search bounded by the partner of the inserted minimum
    Jacobsthal,
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&match self {
            Order::Sequential => {
                <merge_insertion::Sequential as merge_insertion::InsertionOrder>::display()
            }
            Order::Jacobsthal => {
                <merge_insertion::Jacobsthal as merge_insertion::InsertionOrder>::display()
            }
        })
    }
}
