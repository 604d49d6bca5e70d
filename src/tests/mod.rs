mod iter_tests;

use crate::{RangeSet, RangeSetValue};

/// Asserts the canonical-form invariants and that `len` matches the ranges.
pub(crate) fn assert_canonical<T: RangeSetValue>(set: &RangeSet<T>) {
    let starts = set.starts();
    let ends = set.ends();
    assert_eq!(starts.len(), ends.len());
    assert_eq!(starts.len(), set.range_count());
    assert!(set.range_count() <= set.capacity());

    for (start, end) in starts.iter().zip(ends) {
        assert!(start <= end, "range {:?}..={:?} is inverted", start, end);
    }
    for (&end, &next_start) in ends.iter().zip(starts.iter().skip(1)) {
        assert!(
            end < next_start && next_start - end > T::one(),
            "ranges ending at {:?} and starting at {:?} should have been merged",
            end,
            next_start
        );
    }

    let len = starts
        .iter()
        .zip(ends)
        .map(|(&start, &end)| T::span_len(start, end))
        .sum::<usize>();
    assert_eq!(set.len(), len);
}
