use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::error::RangeSetError;
use crate::iter::{Iter, Ranges};
use crate::storage::RangeStorage;
use crate::RangeSetValue;

/// Multiplier used when folding range bounds into the hash code.
const HASH_MULTIPLIER: u64 = 0x517c_c1b7_2722_0a95;

/// A set of unsigned integers stored as sorted, disjoint, inclusive ranges.
///
/// The set keeps its ranges in canonical form after every insertion:
/// - every range satisfies `start <= end`
/// - ranges are strictly increasing and never touch: `starts[i + 1] > ends[i] + 1`
///
/// so runs of consecutive members cost a single pair of bounds no matter
/// how long they are, and membership is a binary search over the ranges.
///
/// # Type Parameters
/// - `T`: The member type (`u16`, `u32`, `u64`, or `usize`). Defaults to `u32`.
///
/// # Equality
/// `==` compares the stored range arrays, which for two `RangeSet`s is the
/// same as comparing members. To compare against a set held in some other
/// representation use [`contains_all`](Self::contains_all), which only
/// looks at members.
///
/// # Removal
/// Members cannot be removed; [`remove`](Self::remove) always fails with
/// [`RangeSetError::UnsupportedOperation`].
///
/// # Concurrency
/// The cached hash code uses interior mutability, so a `RangeSet` is `Send`
/// but not `Sync`. Sharing one between threads requires an external lock.
#[derive(Clone)]
pub struct RangeSet<T: RangeSetValue = u32> {
    storage: RangeStorage<T>,
    len: usize,
    hash: Cell<Option<u64>>,
}

impl<T: RangeSetValue> RangeSet<T> {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: RangeStorage::new(),
            len: 0,
            hash: Cell::new(None),
        }
    }

    /// Creates an empty set whose range storage can hold `capacity` ranges
    /// before growing. Capacities below [`MIN_CAPACITY`](crate::MIN_CAPACITY)
    /// are rounded up.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: RangeStorage::with_capacity(capacity),
            len: 0,
            hash: Cell::new(None),
        }
    }

    /// Adopts two parallel arrays of range bounds without copying them.
    ///
    /// `starts[i]..=ends[i]` becomes the `i`-th range. The caller must pass
    /// ranges that are already in canonical form (ordered, disjoint and
    /// non-adjacent); this is only checked in debug builds.
    ///
    /// # Errors
    /// Returns [`RangeSetError::InvalidArgument`] if the arrays differ in length.
    ///
    /// # Examples
    /// ```
    /// use range_set::{RangeSet, RangeSetError};
    ///
    /// let set = RangeSet::<u32>::from_ranges(vec![1, 10], vec![3, 11]).unwrap();
    /// assert_eq!(set.len(), 5);
    /// assert!(set.contains(2));
    ///
    /// let err = RangeSet::<u32>::from_ranges(vec![1, 10], vec![3]).unwrap_err();
    /// assert_eq!(err, RangeSetError::InvalidArgument { starts: 2, ends: 1 });
    /// ```
    pub fn from_ranges(starts: Vec<T>, ends: Vec<T>) -> Result<Self, RangeSetError> {
        if starts.len() != ends.len() {
            return Err(RangeSetError::InvalidArgument {
                starts: starts.len(),
                ends: ends.len(),
            });
        }
        debug_assert!(
            is_canonical(&starts, &ends),
            "ranges must be ordered, disjoint and non-adjacent"
        );
        let len = starts
            .iter()
            .zip(&ends)
            .fold(0usize, |len, (&start, &end)| {
                len.saturating_add(T::span_len(start, end))
            });
        Ok(Self {
            storage: RangeStorage::from_parts(starts, ends),
            len,
            hash: Cell::new(None),
        })
    }

    /// Returns the number of members in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    /// Returns the number of stored ranges.
    #[inline]
    pub fn range_count(&self) -> usize {
        self.storage.len()
    }

    /// Returns how many ranges fit in the backing arrays before they grow.
    ///
    /// Capacity starts at [`MIN_CAPACITY`](crate::MIN_CAPACITY), doubles when
    /// full and never shrinks.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Borrowed view of the range starts, one per stored range.
    ///
    /// This is the live backing array, not a copy: it is valid until the
    /// next mutation and is meant for bulk consumers such as serializers.
    #[inline]
    pub fn starts(&self) -> &[T] {
        self.storage.starts()
    }

    /// Borrowed view of the range ends, index-aligned with
    /// [`starts`](Self::starts). Same contract as `starts`.
    #[inline]
    pub fn ends(&self) -> &[T] {
        self.storage.ends()
    }

    /// Returns the smallest member.
    #[inline]
    pub fn first(&self) -> Option<T> {
        self.storage.starts().first().copied()
    }

    /// Returns the largest member.
    #[inline]
    pub fn last(&self) -> Option<T> {
        self.storage.ends().last().copied()
    }

    /// Returns `true` if `value` is a member.
    ///
    /// Runs in `O(log R)` where `R` is the number of stored ranges.
    ///
    /// # Examples
    /// ```
    /// use range_set::RangeSet;
    ///
    /// let mut set = RangeSet::<u32>::new();
    /// set.insert_range(10, 20);
    /// assert!(set.contains(10));
    /// assert!(set.contains(20));
    /// assert!(!set.contains(21));
    /// ```
    pub fn contains(&self, value: T) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) if first <= value && value <= last => {
                self.find(value).is_ok()
            }
            _ => false,
        }
    }

    /// Returns `true` if every member yielded by `other` is in this set.
    ///
    /// Only members are compared, so `other` can be any collection of
    /// integers, including another `RangeSet`. Stops at the first value that
    /// is not a member.
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeSet;
    /// use range_set::RangeSet;
    ///
    /// let set: RangeSet<u32> = [1, 2, 3, 10].into_iter().collect();
    /// let other: BTreeSet<u32> = [2, 3, 10].into_iter().collect();
    /// assert!(set.contains_all(other.iter().copied()));
    /// assert!(!set.contains_all([4]));
    /// ```
    pub fn contains_all<I>(&self, other: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        other.into_iter().all(|value| self.contains(value))
    }

    /// Adds `value` to the set.
    ///
    /// Returns `true` if the set did not already contain it.
    ///
    /// The value extends a neighboring range when it touches one, joins two
    /// ranges when it fills the single gap between them, and otherwise
    /// becomes a new single-member range.
    ///
    /// # Examples
    /// ```
    /// use range_set::RangeSet;
    ///
    /// let mut set = RangeSet::<u32>::new();
    /// assert!(set.insert(5));
    /// assert!(set.insert(7));
    /// assert_eq!(set.range_count(), 2);
    ///
    /// assert!(set.insert(6));
    /// assert_eq!(set.range_count(), 1);
    /// assert!(!set.insert(6));
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let Some(last) = self.storage.len().checked_sub(1) else {
            self.storage.push(value, value);
            self.mark_inserted(1);
            return true;
        };

        let last_end = self.storage.end(last);
        let first_start = self.storage.start(0);

        if value > last_end {
            if value - T::one() == last_end {
                self.storage.set_end(last, value);
            } else {
                self.storage.push(value, value);
            }
        } else if value < first_start {
            if value + T::one() == first_start {
                self.storage.set_start(0, value);
            } else {
                self.storage.insert(0, value, value);
            }
        } else {
            let next = match self.find(value) {
                Ok(_) => return false,
                Err(next) => next,
            };
            // `value` lies strictly between ranges `prev` and `next`.
            let prev = next - 1;
            let joins_prev = value - T::one() == self.storage.end(prev);
            let joins_next = value + T::one() == self.storage.start(next);
            match (joins_prev, joins_next) {
                (true, true) => {
                    let end = self.storage.end(next);
                    self.storage.set_end(prev, end);
                    self.storage.remove(next);
                }
                (true, false) => self.storage.set_end(prev, value),
                (false, true) => self.storage.set_start(next, value),
                (false, false) => self.storage.insert(next, value, value),
            }
        }

        self.mark_inserted(1);
        true
    }

    /// Adds every integer in `low..=high` to the set.
    ///
    /// Ranges above the current maximum are added in amortized `O(1)`, and
    /// ranges below the current minimum with a single shift of the stored
    /// ranges. Any other range is inserted one value at a time, which costs
    /// `O(high - low)` insertions.
    /// Does nothing when `low > high`.
    ///
    /// # Examples
    /// ```
    /// use range_set::RangeSet;
    ///
    /// let mut set = RangeSet::<u32>::new();
    /// set.insert_range(1, 3);
    /// set.insert_range(4, 6);
    /// set.insert_range(10, 11);
    /// assert_eq!(set.starts(), &[1, 10]);
    /// assert_eq!(set.ends(), &[6, 11]);
    /// assert_eq!(set.len(), 8);
    /// ```
    pub fn insert_range(&mut self, low: T, high: T) {
        if low > high {
            return;
        }

        match self.storage.len().checked_sub(1) {
            None => self.storage.push(low, high),
            Some(last) => {
                let last_end = self.storage.end(last);
                let first_start = self.storage.start(0);
                if low > last_end {
                    if low - T::one() == last_end {
                        self.storage.set_end(last, high);
                    } else {
                        self.storage.push(low, high);
                    }
                } else if high < first_start {
                    if high + T::one() == first_start {
                        self.storage.set_start(0, low);
                    } else {
                        self.storage.insert(0, low, high);
                    }
                } else {
                    self.insert_each(low, high);
                    return;
                }
            }
        }

        self.mark_inserted(T::span_len(low, high));
    }

    /// Always fails: a range set cannot remove members.
    ///
    /// Removing a value from the interior of a range would mean splitting
    /// it, which this representation does not do. Callers that need removal
    /// must use a different set type.
    ///
    /// # Errors
    /// Always returns [`RangeSetError::UnsupportedOperation`], for members and
    /// non-members alike.
    pub fn remove(&mut self, _value: T) -> Result<bool, RangeSetError> {
        Err(RangeSetError::UnsupportedOperation)
    }

    /// Returns an ascending iterator over every member.
    ///
    /// # Examples
    /// ```
    /// use range_set::RangeSet;
    ///
    /// let set: RangeSet<u32> = [3, 1, 2, 8].into_iter().collect();
    /// let members: Vec<u32> = set.iter().collect();
    /// assert_eq!(members, vec![1, 2, 3, 8]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.storage.starts(), self.storage.ends(), self.len)
    }

    /// Returns an ascending iterator over the stored ranges.
    #[inline]
    pub fn ranges(&self) -> Ranges<'_, T> {
        Ranges::new(self.storage.starts(), self.storage.ends())
    }

    /// Returns the hash code of the stored ranges.
    ///
    /// The code depends on the order of the ranges and is computed on first
    /// use, then cached until the set next changes.
    pub fn hash_code(&self) -> u64 {
        if let Some(hash) = self.hash.get() {
            return hash;
        }
        let hash = self
            .storage
            .starts()
            .iter()
            .zip(self.storage.ends())
            .fold(self.storage.len() as u64, |hash, (&start, &end)| {
                let hash = (hash.rotate_left(5) ^ start.widen()).wrapping_mul(HASH_MULTIPLIER);
                (hash.rotate_left(5) ^ end.widen()).wrapping_mul(HASH_MULTIPLIER)
            });
        self.hash.set(Some(hash));
        hash
    }

    #[cfg(test)]
    pub(crate) fn cached_hash(&self) -> Option<u64> {
        self.hash.get()
    }

    /// Binary search for the range holding `value`.
    ///
    /// Returns `Ok(i)` if range `i` contains `value`, or `Err(i)` where `i`
    /// is the index of the first range starting above `value`.
    fn find(&self, value: T) -> Result<usize, usize> {
        let starts = self.storage.starts();
        let ends = self.storage.ends();
        let mut low = 0;
        let mut high = starts.len();
        while low < high {
            let mid = low + (high - low) / 2;
            if ends[mid] < value {
                low = mid + 1;
            } else if starts[mid] > value {
                high = mid;
            } else {
                return Ok(mid);
            }
        }
        Err(low)
    }

    fn insert_each(&mut self, low: T, high: T) {
        log::debug!(
            "range {:?}..={:?} lies within the current span, inserting one value at a time",
            low,
            high
        );
        let mut value = low;
        loop {
            self.insert(value);
            if value == high {
                break;
            }
            value = value + T::one();
        }
    }

    #[inline]
    fn mark_inserted(&mut self, count: usize) {
        self.len = self.len.saturating_add(count);
        self.hash.set(None);
    }
}

/// Checks that `starts`/`ends` describe ordered, disjoint, non-adjacent ranges.
fn is_canonical<T: RangeSetValue>(starts: &[T], ends: &[T]) -> bool {
    let bounds_ok = starts.iter().zip(ends).all(|(start, end)| start <= end);
    let gaps_ok = ends
        .iter()
        .zip(starts.iter().skip(1))
        .all(|(&end, &next_start)| end < next_start && next_start - end > T::one());
    bounds_ok && gaps_ok
}

impl<T: RangeSetValue> Default for RangeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RangeSetValue> PartialEq for RangeSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.range_count() == other.range_count()
            && self.starts() == other.starts()
            && self.ends() == other.ends()
    }
}

impl<T: RangeSetValue> Eq for RangeSet<T> {}

impl<T: RangeSetValue> Hash for RangeSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<T: RangeSetValue> fmt::Debug for RangeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ranges()).finish()
    }
}

impl<T: RangeSetValue> Extend<T> for RangeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: RangeSetValue> FromIterator<T> for RangeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, T: RangeSetValue> IntoIterator for &'a RangeSet<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
