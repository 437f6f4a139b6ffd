//! Splitting a sequence into adjacent pairs

use super::chain::Chain;

/// The result of [`split_pairs`]
#[derive(Debug)]
pub struct Split<T, C> {
    /// The larger element of each pair
    pub maxes: C,
    /// The smaller element of each pair, `mins[i]` belongs to `maxes[i]`
    pub mins: C,
    /// The unpaired last element for odd lengths
    pub straggler: Option<T>,
}

/// Pair the elements at `(0, 1), (2, 3), ...` of `input` and split each pair into its
/// maximum and minimum
pub fn split_pairs<T: Ord, C: Chain<T>>(input: C) -> Split<T, C> {
    let pairs = input.len() / 2;
    let mut maxes = C::with_capacity(pairs);
    let mut mins = C::with_capacity(pairs);
    let mut straggler = None;

    let mut iter = input.into_iter();
    while let Some(first) = iter.next() {
        let Some(second) = iter.next() else {
            straggler = Some(first);
            break;
        };

        #[cfg(feature = "counters")]
        super::COMPARISON_COUNTER.increase(1);

        // Equal elements: the second one counts as the maximum
        let (max, min) = if first > second {
            (first, second)
        } else {
            (second, first)
        };
        maxes.push(max);
        mins.push(min);
    }

    Split {
        maxes,
        mins,
        straggler,
    }
}
