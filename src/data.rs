use std::{fmt, num::NonZeroU32, sync::atomic};

use rand::{Rng as _, distr::Distribution as _, rngs::StdRng, seq::SliceRandom as _};

/// A positive integer in `1..=i32::MAX`, the element type sorted by the experiments
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositiveInt(NonZeroU32);

impl PositiveInt {
    /// The largest accepted value
    pub const MAX_VALUE: u32 = i32::MAX as u32;

    /// Returns `Some` if `value` is in `1..=Self::MAX_VALUE`
    pub fn new(value: u32) -> Option<Self> {
        if value > Self::MAX_VALUE {
            return None;
        }

        NonZeroU32::new(value).map(Self)
    }

    /// Clamp `value` into the accepted range
    pub fn clamped(value: u64) -> Self {
        let value = value.clamp(1, Self::MAX_VALUE as u64) as u32;

        Self(NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN))
    }

    /// The wrapped value
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for PositiveInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

impl std::str::FromStr for PositiveInt {
    type Err = crate::cli::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::cli::parse_positive_int(s)
    }
}

/// A trait for generalizing sorting data creation
pub trait Data {
    /// Initialize a vector of the given size
    fn initialize(size: usize, rng: &mut StdRng) -> anyhow::Result<Vec<PositiveInt>>;
}

/// Uniformly distributed values over the whole range
#[derive(Debug)]
pub struct UniformData;

impl Data for UniformData {
    fn initialize(size: usize, rng: &mut StdRng) -> anyhow::Result<Vec<PositiveInt>> {
        Ok(std::iter::repeat_with(|| {
            PositiveInt::clamped(rng.random_range(1..=PositiveInt::MAX_VALUE) as u64)
        })
        .take(size)
        .collect())
    }
}

/// A random permutation of `1..=size`
#[derive(Debug)]
pub struct PermutationData;

impl Data for PermutationData {
    fn initialize(size: usize, rng: &mut StdRng) -> anyhow::Result<Vec<PositiveInt>> {
        let mut values: Vec<PositiveInt> = (1..=size as u64).map(PositiveInt::clamped).collect();
        values.shuffle(rng);

        Ok(values)
    }
}

/// The Zipf exponent used by [`ZipfData`]
pub const ZIPF_EXPONENT: f64 = 1.1;

/// Zipf distributed values in `1..=size`, containing a lot of duplicates
#[derive(Debug)]
pub struct ZipfData;

impl Data for ZipfData {
    fn initialize(size: usize, rng: &mut StdRng) -> anyhow::Result<Vec<PositiveInt>> {
        let distribution = rand_distr::Zipf::new(size.max(1) as f64, ZIPF_EXPONENT)?;

        Ok(distribution
            .sample_iter(rng)
            .take(size)
            .map(|value| PositiveInt::clamped(value as u64))
            .collect())
    }
}

/// The values `size..=1` in descending order
#[derive(Debug)]
pub struct ReversedData;

impl Data for ReversedData {
    fn initialize(size: usize, _rng: &mut StdRng) -> anyhow::Result<Vec<PositiveInt>> {
        Ok((1..=size as u64).rev().map(PositiveInt::clamped).collect())
    }
}

/// A global counter, used for counting comparisons when the `counters` feature is enabled
#[derive(Debug)]
pub struct GlobalCounter(atomic::AtomicU64);

impl GlobalCounter {
    pub const fn new() -> Self {
        Self(atomic::AtomicU64::new(0))
    }

    /// Increase the counter by `amount`
    #[allow(dead_code)]
    pub fn increase(&self, amount: u64) {
        self.0.fetch_add(amount, atomic::Ordering::Relaxed);
    }

    /// Return the current value and reset the counter to zero
    #[allow(dead_code)]
    pub fn take(&self) -> u64 {
        self.0.swap(0, atomic::Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;

    const SIZE: usize = 1_000;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(crate::test::TEST_SEED)
    }

    #[test]
    pub fn positive_int_bounds() {
        assert_eq!(PositiveInt::new(0), None);
        assert_eq!(PositiveInt::new(1).map(PositiveInt::get), Some(1));
        assert_eq!(
            PositiveInt::new(PositiveInt::MAX_VALUE).map(PositiveInt::get),
            Some(2_147_483_647)
        );
        assert_eq!(PositiveInt::new(PositiveInt::MAX_VALUE + 1), None);

        assert_eq!(PositiveInt::clamped(0).get(), 1);
        assert_eq!(PositiveInt::clamped(u64::MAX).get(), PositiveInt::MAX_VALUE);
        assert_eq!(PositiveInt::clamped(42).to_string(), "42");
    }

    #[test]
    pub fn permutation() {
        let mut values = PermutationData::initialize(SIZE, &mut rng()).unwrap();
        assert_eq!(values.len(), SIZE);

        values.sort();
        assert!(values.iter().map(|value| value.get()).eq(1..=SIZE as u32));
    }

    #[test]
    pub fn generators_fill_size() {
        let mut rng = rng();

        for values in [
            UniformData::initialize(SIZE, &mut rng).unwrap(),
            ZipfData::initialize(SIZE, &mut rng).unwrap(),
            ReversedData::initialize(SIZE, &mut rng).unwrap(),
        ] {
            assert_eq!(values.len(), SIZE);
        }

        assert!(ZipfData::initialize(0, &mut rng).unwrap().is_empty());
    }

    #[test]
    pub fn zipf_in_range() {
        let values = ZipfData::initialize(SIZE, &mut rng()).unwrap();

        assert!(values.iter().all(|value| value.get() <= SIZE as u32));
    }

    #[test]
    pub fn reversed() {
        let values = ReversedData::initialize(4, &mut rng()).unwrap();

        assert_eq!(
            values.iter().map(|value| value.get()).collect::<Vec<_>>(),
            [4, 3, 2, 1]
        );
    }

    #[test]
    pub fn counter() {
        let counter = GlobalCounter::new();
        counter.increase(3);
        counter.increase(4);

        assert_eq!(counter.take(), 7);
        assert_eq!(counter.take(), 0);
    }
}
