extern crate std;

use super::assert_canonical;
use crate::RangeSet;
use alloc::vec;
use alloc::vec::Vec;

// =============================================================================
// Member Iterator Tests
// =============================================================================

#[test]
fn test_iter_empty() {
    let set = RangeSet::<u32>::new();
    let mut iter = set.iter();
    assert_eq!(iter.len(), 0);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iter_yields_every_member() {
    let mut set = RangeSet::<u32>::new();
    set.insert_range(1, 3);
    set.insert(7);
    set.insert_range(10, 12);

    let collected: Vec<_> = set.iter().collect();
    assert_eq!(collected, vec![1, 2, 3, 7, 10, 11, 12]);
}

#[test]
fn test_iter_exact_size() {
    let mut set = RangeSet::<u32>::new();
    set.insert_range(0, 4);
    set.insert_range(10, 14);

    let mut iter = set.iter();
    assert_eq!(iter.len(), 10);
    iter.next();
    iter.next();
    assert_eq!(iter.size_hint(), (8, Some(8)));
    assert_eq!(iter.by_ref().count(), 8);
    assert_eq!(iter.len(), 0);
}

#[test]
fn test_iter_is_not_restartable() {
    let set: RangeSet<u32> = [1, 2, 5].into_iter().collect();
    let mut iter = set.iter();
    assert_eq!(iter.by_ref().collect::<Vec<_>>(), vec![1, 2, 5]);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);

    // A fresh iterator starts from the beginning again.
    assert_eq!(set.iter().next(), Some(1));
}

#[test]
fn test_iter_ends_at_max_value() {
    let mut set = RangeSet::<u16>::new();
    set.insert_range(u16::MAX - 2, u16::MAX);
    let collected: Vec<_> = set.iter().collect();
    assert_eq!(collected, vec![u16::MAX - 2, u16::MAX - 1, u16::MAX]);
}

#[test]
fn test_iter_by_ref_into_iterator() {
    let set: RangeSet<u32> = [4, 3, 9].into_iter().collect();
    let mut collected = Vec::new();
    for value in &set {
        collected.push(value);
    }
    assert_eq!(collected, vec![3, 4, 9]);
}

// =============================================================================
// Range Iterator Tests
// =============================================================================

#[test]
fn test_ranges() {
    let set: RangeSet<u32> = [1, 2, 3, 10, 20, 21].into_iter().collect();
    let ranges: Vec<_> = set.ranges().collect();
    assert_eq!(ranges, vec![1..=3, 10..=10, 20..=21]);
    assert_eq!(set.ranges().len(), 3);
}

#[test]
fn test_ranges_reversed() {
    let set: RangeSet<u32> = [1, 2, 3, 10].into_iter().collect();
    let ranges: Vec<_> = set.ranges().rev().collect();
    assert_eq!(ranges, vec![10..=10, 1..=3]);
}

// =============================================================================
// Property-Based Tests
// =============================================================================

mod proptest_tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use proptest::prelude::*;

    /// Groups ascending values into maximal runs of consecutive integers.
    fn runs(values: &[u32]) -> (Vec<u32>, Vec<u32>) {
        let mut starts = Vec::new();
        let mut ends: Vec<u32> = Vec::new();
        for &value in values {
            match ends.last_mut() {
                Some(end) if *end + 1 == value => *end = value,
                _ => {
                    starts.push(value);
                    ends.push(value);
                }
            }
        }
        (starts, ends)
    }

    proptest! {
        #[test]
        fn iter_is_ascending_and_complete(values in prop::collection::vec(0u32..400, 0..150)) {
            let set: RangeSet<u32> = values.iter().copied().collect();
            assert_canonical(&set);

            let members: Vec<u32> = set.iter().collect();
            prop_assert_eq!(members.len(), set.len());
            prop_assert!(members.windows(2).all(|pair| pair[0] < pair[1]));

            let expected: Vec<u32> = values.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
            prop_assert_eq!(&members, &expected);

            let (starts, ends) = runs(&members);
            prop_assert_eq!(set.starts(), starts.as_slice());
            prop_assert_eq!(set.ends(), ends.as_slice());
        }
    }
}
