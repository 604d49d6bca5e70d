use core::iter::{FusedIterator, Zip};
use core::ops::RangeInclusive;
use core::slice;

use crate::RangeSetValue;

/// Ascending iterator over every member of a [`RangeSet`](crate::RangeSet).
///
/// Created by [`RangeSet::iter`](crate::RangeSet::iter). The iterator walks
/// the ranges in order and steps a cursor through each one, so it yields
/// individual members rather than range bounds. Once exhausted it stays
/// exhausted; call `iter` again to start over.
#[derive(Debug, Clone)]
pub struct Iter<'a, T: RangeSetValue> {
    starts: &'a [T],
    ends: &'a [T],
    range: usize,
    cursor: T,
    remaining: usize,
}

impl<'a, T: RangeSetValue> Iter<'a, T> {
    pub(crate) fn new(starts: &'a [T], ends: &'a [T], len: usize) -> Self {
        Self {
            starts,
            ends,
            range: 0,
            cursor: starts.first().copied().unwrap_or_else(T::zero),
            remaining: len,
        }
    }
}

impl<T: RangeSetValue> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let end = *self.ends.get(self.range)?;
        let value = self.cursor;
        if value == end {
            // Never step past `end`, which may be `T::max_value()`.
            self.range += 1;
            if let Some(&start) = self.starts.get(self.range) {
                self.cursor = start;
            }
        } else {
            self.cursor = value + T::one();
        }
        self.remaining = self.remaining.saturating_sub(1);
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: RangeSetValue> ExactSizeIterator for Iter<'_, T> {}

impl<T: RangeSetValue> FusedIterator for Iter<'_, T> {}

/// Iterator over the stored ranges of a [`RangeSet`](crate::RangeSet), in
/// ascending order.
#[derive(Debug, Clone)]
pub struct Ranges<'a, T: RangeSetValue> {
    inner: Zip<slice::Iter<'a, T>, slice::Iter<'a, T>>,
}

impl<'a, T: RangeSetValue> Ranges<'a, T> {
    pub(crate) fn new(starts: &'a [T], ends: &'a [T]) -> Self {
        Self {
            inner: starts.iter().zip(ends.iter()),
        }
    }
}

impl<T: RangeSetValue> Iterator for Ranges<'_, T> {
    type Item = RangeInclusive<T>;

    #[inline]
    fn next(&mut self) -> Option<RangeInclusive<T>> {
        self.inner.next().map(|(&start, &end)| start..=end)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: RangeSetValue> DoubleEndedIterator for Ranges<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<RangeInclusive<T>> {
        self.inner.next_back().map(|(&start, &end)| start..=end)
    }
}

impl<T: RangeSetValue> ExactSizeIterator for Ranges<'_, T> {}

impl<T: RangeSetValue> FusedIterator for Ranges<'_, T> {}
