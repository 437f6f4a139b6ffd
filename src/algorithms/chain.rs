//! The sequence containers the merge-insertion sort can build its main chain in

use std::collections::VecDeque;

/// An ordered sequence with random access and insertion at arbitrary indices
pub trait Chain<T>: IntoIterator<Item = T> + FromIterator<T> {
    /// Create an empty chain able to hold `capacity` elements without reallocating
    fn with_capacity(capacity: usize) -> Self;

    /// The number of elements
    fn len(&self) -> usize;

    /// The element at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds
    fn at(&self, index: usize) -> &T;

    /// Append `value` at the end
    fn push(&mut self, value: T);

    /// Insert `value` at `index`, shifting all following elements back
    fn insert(&mut self, index: usize, value: T);

    /// Reserve space for at least `additional` more elements
    fn reserve(&mut self, additional: usize);
}

impl<T> Chain<T> for Vec<T> {
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    fn insert(&mut self, index: usize, value: T) {
        Vec::insert(self, index, value);
    }

    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional);
    }
}

impl<T> Chain<T> for VecDeque<T> {
    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn at(&self, index: usize) -> &T {
        &self[index]
    }

    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    // Shifts towards whichever end is closer
    fn insert(&mut self, index: usize, value: T) {
        VecDeque::insert(self, index, value);
    }

    fn reserve(&mut self, additional: usize) {
        VecDeque::reserve(self, additional);
    }
}

/// A family of [`Chain`]s, one for each element type
pub trait Storage {
    /// The chain used for elements of type `T`
    type Chain<T>: Chain<T>;

    /// String representation of this storage
    fn display() -> String;
}

/// Contiguous storage, backed by [`Vec`]
#[derive(Debug, Clone, Copy)]
pub struct Contiguous;

impl Storage for Contiguous {
    type Chain<T> = Vec<T>;

    fn display() -> String {
        "Vec".to_string()
    }
}

/// Double-ended ring buffer storage, backed by [`VecDeque`]
#[derive(Debug, Clone, Copy)]
pub struct Segmented;

impl Storage for Segmented {
    type Chain<T> = VecDeque<T>;

    fn display() -> String {
        "VecDeque".to_string()
    }
}
