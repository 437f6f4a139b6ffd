//! The merge-insertion (Ford-Johnson) sort implementation

use std::time::Duration;

use super::{
    chain::{Chain, Storage},
    insertion::{binary_insert, jacobsthal_order, lower_bound_in},
    pairing::{Split, split_pairs},
};

/// The default [`Storage`] to use
pub type DefaultStorage = super::chain::Contiguous;

/// The default [`InsertionOrder`] to use
pub type DefaultInsertionOrder = Sequential;

/// The merge-insertion [`super::Sort`]
pub struct MergeInsertionSort<
    S: Storage = DefaultStorage,
    O: InsertionOrder = DefaultInsertionOrder,
>(std::marker::PhantomData<S>, std::marker::PhantomData<O>);

impl<S: Storage, O: InsertionOrder> super::Sort for MergeInsertionSort<S, O> {
    fn sort<T: Ord + Clone>(values: &[T]) -> (Vec<T>, Duration) {
        let now = std::time::Instant::now();
        let chain: S::Chain<T> = std::hint::black_box(values.iter().cloned().collect());
        let sorted = O::sort::<T, S>(chain);
        let elapsed = now.elapsed();

        (sorted.into_iter().collect(), elapsed)
    }
}

/// Specifies the order in which the pending minima are inserted into the main chain
pub trait InsertionOrder {
    /// String representation of this order
    fn display() -> String;

    /// Sort `sequence` inserting its pending minima in this order
    fn sort<T: Ord, S: Storage>(sequence: S::Chain<T>) -> S::Chain<T>;
}

/// Insert in pairing order, each into the whole chain, see [`merge_insertion`]
#[derive(Debug, Clone, Copy)]
pub struct Sequential;

impl InsertionOrder for Sequential {
    fn display() -> String {
        "sequential".to_string()
    }

    fn sort<T: Ord, S: Storage>(sequence: S::Chain<T>) -> S::Chain<T> {
        merge_insertion::<T, S::Chain<T>>(sequence)
    }
}

/// Insert in Jacobsthal groups, each bounded by its partner, see [`ford_johnson`]
#[derive(Debug, Clone, Copy)]
pub struct Jacobsthal;

impl InsertionOrder for Jacobsthal {
    fn display() -> String {
        "jacobsthal".to_string()
    }

    fn sort<T: Ord, S: Storage>(sequence: S::Chain<T>) -> S::Chain<T> {
        ford_johnson::<T, S>(sequence)
    }
}

/// Sort `sequence` by pairing its elements, recursively sorting the larger element of each
/// pair and binary inserting the smaller ones and the straggler into the result
pub fn merge_insertion<T: Ord, C: Chain<T>>(sequence: C) -> C {
    if sequence.len() < 2 {
        return sequence;
    }

    let Split {
        maxes,
        mins,
        straggler,
    } = split_pairs(sequence);

    log::trace!(
        "split into {} pairs, straggler: {}",
        maxes.len(),
        straggler.is_some()
    );

    let mut chain = merge_insertion::<T, C>(maxes);
    chain.reserve(mins.len() + 1);

    for min in mins {
        binary_insert(&mut chain, min);
    }
    if let Some(straggler) = straggler {
        binary_insert(&mut chain, straggler);
    }

    chain
}

/// An element tagged with an id that is unique within one recursion level, ordered by value only
#[derive(Debug)]
struct Tagged<T> {
    value: T,
    tag: usize,
}

impl<T: Ord> PartialEq for Tagged<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Ord> Eq for Tagged<T> {}

impl<T: Ord> PartialOrd for Tagged<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Tagged<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

/// Sort `sequence` with the Ford-Johnson algorithm
///
/// Unlike [`merge_insertion`] every minimum remembers the maximum it was paired with. The
/// first minimum goes in front of the chain without comparisons, the others follow in
/// [`jacobsthal_order`] and only search the chain up to their partner. The straggler is the
/// last pending element and searches the whole chain.
pub fn ford_johnson<T: Ord, S: Storage>(sequence: S::Chain<T>) -> S::Chain<T> {
    let tagged: S::Chain<Tagged<T>> = sequence
        .into_iter()
        .enumerate()
        .map(|(tag, value)| Tagged { value, tag })
        .collect();

    ford_johnson_tagged::<T, S>(tagged)
        .into_iter()
        .map(|tagged| tagged.value)
        .collect()
}

fn ford_johnson_tagged<T: Ord, S: Storage>(
    sequence: S::Chain<Tagged<T>>,
) -> S::Chain<Tagged<T>> {
    if sequence.len() < 2 {
        return sequence;
    }

    let Split {
        maxes,
        mins,
        straggler,
    } = split_pairs(sequence);

    log::trace!(
        "split into {} pairs, straggler: {}",
        maxes.len(),
        straggler.is_some()
    );

    // The recursion sees the pair index as tag
    let mut tags = Vec::with_capacity(maxes.len());
    let maxes: S::Chain<Tagged<T>> = maxes
        .into_iter()
        .enumerate()
        .map(|(pair, max)| {
            tags.push(max.tag);
            Tagged {
                value: max.value,
                tag: pair,
            }
        })
        .collect();
    let mut mins: Vec<Option<Tagged<T>>> = mins.into_iter().map(Some).collect();

    // pending[j] is the minimum paired with the maximum tagged partners[j]
    let mut pending = Vec::with_capacity(mins.len() + 1);
    let mut partners = Vec::with_capacity(mins.len());
    let mut chain: S::Chain<Tagged<T>> = ford_johnson_tagged::<T, S>(maxes)
        .into_iter()
        .map(|max| {
            let tag = tags[max.tag];
            pending.push(mins[max.tag].take());
            partners.push(tag);
            Tagged {
                value: max.value,
                tag,
            }
        })
        .collect();
    if let Some(straggler) = straggler {
        pending.push(Some(straggler));
    }

    chain.reserve(pending.len());
    for index in jacobsthal_order(pending.len()) {
        let Some(value) = pending[index].take() else {
            continue;
        };

        let position = if index == 0 {
            // Not larger than its partner, the smallest element of the chain
            0
        } else {
            let end = match partners.get(index) {
                Some(&partner) => position_of(&chain, partner, index),
                None => chain.len(),
            };
            lower_bound_in(&chain, end, &value)
        };
        chain.insert(position, value);
    }

    chain
}

/// Returns the index of the element tagged `tag`, looking no earlier than `start`
fn position_of<T, C: Chain<Tagged<T>>>(chain: &C, tag: usize, start: usize) -> usize {
    (start..chain.len())
        .find(|&index| chain.at(index).tag == tag)
        .unwrap_or(chain.len())
}
