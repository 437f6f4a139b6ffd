//! Binary insertion into a sorted [`Chain`] and the Ford-Johnson insertion order

use super::chain::Chain;

/// Returns the first index in `chain` whose element is not less than `value`
///
/// `chain` has to be sorted.
pub fn lower_bound<T: Ord, C: Chain<T>>(chain: &C, value: &T) -> usize {
    lower_bound_in(chain, chain.len(), value)
}

/// Like [`lower_bound`], but only searches the prefix `0..end` of `chain`
///
/// Returns `end` if every element of the prefix is less than `value`.
pub fn lower_bound_in<T: Ord, C: Chain<T>>(chain: &C, end: usize, value: &T) -> usize {
    debug_assert!(end <= chain.len(), "search end out of bounds");

    let mut left = 0;
    let mut right = end;

    while left < right {
        let middle = left + (right - left) / 2;

        #[cfg(feature = "counters")]
        super::COMPARISON_COUNTER.increase(1);

        if chain.at(middle) < value {
            left = middle + 1;
        } else {
            right = middle;
        }
    }

    left
}

/// Insert `value` into the sorted `chain`, in front of all elements equal to it
pub fn binary_insert<T: Ord, C: Chain<T>>(chain: &mut C, value: T) {
    let index = lower_bound(chain, &value);
    chain.insert(index, value);
}

/// Returns a permutation of `0..count` in Ford-Johnson insertion order
///
/// The first element comes first, then each group `(previous, current]` of one-based
/// positions follows in descending order, where `previous` and `current` are consecutive
/// Jacobsthal numbers `1, 3, 5, 11, 21, 43, ...`. This gives `0, 2, 1, 4, 3, 10, 9, ..., 5, ...`.
///
/// Inserting an element of group `k` then never has to search more than `2^k - 1` elements.
pub fn jacobsthal_order(count: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(count);
    if count == 0 {
        return order;
    }
    order.push(0);

    let (mut previous, mut current) = (1usize, 3usize);
    while order.len() < count {
        let top = current.min(count);
        order.extend((previous + 1..=top).rev().map(|position| position - 1));

        let next = current.saturating_add(2 * previous);
        previous = current;
        current = next;
    }

    order
}
