//! Runs the merge-insertion sort once per container strategy and reports the timings

use std::{fmt, time::Duration};

use crate::{
    algorithms::{Order, Strategy},
    data::PositiveInt,
};

/// The measured duration of one strategy run
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    pub strategy: Strategy,
    pub elapsed: Duration,
}

impl Timing {
    /// The elapsed time in microseconds
    pub fn micros(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000_000.0
    }
}

/// The outcome of [`sort_and_report`]
#[derive(Debug, Clone)]
pub struct SortReport {
    /// The input, unchanged
    pub original: Vec<PositiveInt>,
    /// The sorted input
    pub sorted: Vec<PositiveInt>,
    /// One timing per strategy, in [`Strategy::ALL`] order
    pub timings: [Timing; 2],
}

/// Sort `input` with every [`Strategy`] using the default insertion [`Order`]
pub fn sort_and_report(input: Vec<PositiveInt>) -> SortReport {
    sort_and_report_with(input, Order::default())
}

/// Sort `input` with every [`Strategy`], inserting pending elements in `order`
pub fn sort_and_report_with(input: Vec<PositiveInt>, order: Order) -> SortReport {
    let (sorted, vector) = timed_sort(&input, Strategy::Vector, order);
    let (deque_sorted, deque) = timed_sort(&input, Strategy::Deque, order);

    debug_assert_eq!(sorted, deque_sorted, "strategies disagree on {input:?}");

    SortReport {
        original: input,
        sorted,
        timings: [vector, deque],
    }
}

/// Sort a copy of `input` with `strategy` and measure the time
///
/// The measurement covers copying `input` into the strategy's container and sorting it, but
/// not the conversion of the result back into a [`Vec`].
pub fn timed_sort<T: Ord + Clone>(
    input: &[T],
    strategy: Strategy,
    order: Order,
) -> (Vec<T>, Timing) {
    let (sorted, elapsed) = strategy.sorter(order)(input);

    log::debug!(
        "{strategy} ({order}) sorted {} elements in {elapsed:?}",
        input.len()
    );

    (sorted, Timing { strategy, elapsed })
}

/// Writes `values` separated by single spaces
fn write_values(f: &mut fmt::Formatter<'_>, values: &[PositiveInt]) -> fmt::Result {
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{value}")?;
    }

    Ok(())
}

impl fmt::Display for SortReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Before: ")?;
        write_values(f, &self.original)?;
        f.write_str("\nAfter: ")?;
        write_values(f, &self.sorted)?;

        for timing in &self.timings {
            write!(
                f,
                "\nTime to process a range of {} elements with {:<8} : {:.5} us",
                self.original.len(),
                timing.strategy.container(),
                timing.micros()
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(values: &[u32]) -> Vec<PositiveInt> {
        values
            .iter()
            .map(|&value| PositiveInt::new(value).unwrap())
            .collect()
    }

    fn sorted(input: &[u32]) -> Vec<u32> {
        sort_and_report(values(input))
            .sorted
            .into_iter()
            .map(PositiveInt::get)
            .collect()
    }

    #[test]
    pub fn scenarios() {
        assert_eq!(sorted(&[3, 5, 1]), [1, 3, 5]);
        assert_eq!(sorted(&[5, 3, 5, 3]), [3, 3, 5, 5]);
        assert_eq!(sorted(&[9, 8, 7, 6, 5, 4, 3, 2, 1]), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    pub fn boundaries() {
        let report = sort_and_report(Vec::new());
        assert!(report.original.is_empty());
        assert!(report.sorted.is_empty());
        assert!(report.timings.iter().all(|timing| timing.micros() >= 0.0));

        let report = sort_and_report(values(&[1]));
        assert_eq!(report.sorted, values(&[1]));
        assert!(report.timings.iter().all(|timing| timing.micros() >= 0.0));
    }

    #[test]
    pub fn keeps_original() {
        let input = values(&[4, 2, 9, 2, 7]);
        let report = sort_and_report_with(input.clone(), Order::Jacobsthal);

        assert_eq!(report.original, input);
        assert_eq!(report.sorted, values(&[2, 2, 4, 7, 9]));
        assert_eq!(report.timings[0].strategy, Strategy::Vector);
        assert_eq!(report.timings[1].strategy, Strategy::Deque);
    }

    #[test]
    pub fn strategies_agree() {
        let mut rng = crate::test::test_rng();

        for size in [0, 1, 2, 3, 17, 256, 1001] {
            let input = crate::test::random_values(&mut rng, size, 50);
            let (vector, _) = timed_sort(&input, Strategy::Vector, Order::Sequential);
            let (deque, _) = timed_sort(&input, Strategy::Deque, Order::Jacobsthal);

            assert_eq!(vector, deque, "size {size}");
        }
    }

    #[test]
    pub fn timing_excludes_result_conversion() {
        let input: Vec<u32> = (1..=20_000).rev().collect();

        for order in [Order::Sequential, Order::Jacobsthal] {
            let now = std::time::Instant::now();
            let (sorted, timing) = timed_sort(&input, Strategy::Deque, order);
            let total = now.elapsed();

            assert!(sorted.iter().copied().eq(1..=20_000));
            assert!(timing.elapsed <= total, "{order}: {:?} > {total:?}", timing.elapsed);
        }
    }

    #[test]
    pub fn report_format() {
        let mut report = sort_and_report(values(&[3, 5, 1]));
        report.timings[0].elapsed = Duration::from_nanos(1_234);
        report.timings[1].elapsed = Duration::from_nanos(2_345);

        assert_eq!(
            report.to_string(),
            "Before: 3 5 1\n\
             After: 1 3 5\n\
             Time to process a range of 3 elements with Vec      : 1.23400 us\n\
             Time to process a range of 3 elements with VecDeque : 2.34500 us"
        );
    }
}
