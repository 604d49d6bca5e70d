use alloc::vec::Vec;

use crate::RangeSetValue;

/// Smallest number of ranges the backing arrays are sized for.
pub const MIN_CAPACITY: usize = 4;

/// Two parallel arrays of inclusive range bounds.
///
/// `starts[i]..=ends[i]` is the `i`-th range. The storage does not know
/// about ordering; it only keeps both arrays the same length and applies
/// the growth policy: capacity starts at [`MIN_CAPACITY`], doubles whenever
/// a range is added to full storage, and never shrinks.
#[derive(Clone)]
pub(crate) struct RangeStorage<T: RangeSetValue> {
    starts: Vec<T>,
    ends: Vec<T>,
    capacity: usize,
}

impl<T: RangeSetValue> RangeStorage<T> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MIN_CAPACITY);
        Self {
            starts: Vec::with_capacity(capacity),
            ends: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Adopts already populated arrays. Both must have the same length.
    pub(crate) fn from_parts(starts: Vec<T>, ends: Vec<T>) -> Self {
        debug_assert_eq!(starts.len(), ends.len());
        let capacity = starts.len().max(MIN_CAPACITY);
        let mut storage = Self {
            starts,
            ends,
            capacity,
        };
        storage.reserve_to_capacity();
        storage
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.starts.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn starts(&self) -> &[T] {
        &self.starts
    }

    #[inline]
    pub(crate) fn ends(&self) -> &[T] {
        &self.ends
    }

    #[inline]
    pub(crate) fn start(&self, index: usize) -> T {
        self.starts[index]
    }

    #[inline]
    pub(crate) fn end(&self, index: usize) -> T {
        self.ends[index]
    }

    #[inline]
    pub(crate) fn set_start(&mut self, index: usize, value: T) {
        self.starts[index] = value;
    }

    #[inline]
    pub(crate) fn set_end(&mut self, index: usize, value: T) {
        self.ends[index] = value;
    }

    /// Appends a range after the last one.
    pub(crate) fn push(&mut self, start: T, end: T) {
        self.grow_if_full();
        self.starts.push(start);
        self.ends.push(end);
    }

    /// Inserts a range at `index`, shifting every later range one slot right.
    pub(crate) fn insert(&mut self, index: usize, start: T, end: T) {
        self.grow_if_full();
        self.starts.insert(index, start);
        self.ends.insert(index, end);
    }

    /// Removes the range at `index`, shifting every later range one slot left.
    ///
    /// Capacity is left untouched.
    pub(crate) fn remove(&mut self, index: usize) {
        self.starts.remove(index);
        self.ends.remove(index);
    }

    fn grow_if_full(&mut self) {
        if self.len() < self.capacity {
            return;
        }
        let grown = self.capacity.saturating_mul(2);
        log::trace!(
            "growing range storage from {} to {} ranges",
            self.capacity,
            grown
        );
        self.capacity = grown;
        self.reserve_to_capacity();
    }

    fn reserve_to_capacity(&mut self) {
        let additional = self.capacity - self.len();
        self.starts.reserve_exact(additional);
        self.ends.reserve_exact(additional);
    }
}
