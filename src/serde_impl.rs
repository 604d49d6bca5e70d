//! Serialization as a sequence of `(start, end)` pairs, behind the `serde`
//! feature.

use alloc::vec::Vec;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::{RangeSet, RangeSetValue};

impl<T> Serialize for RangeSet<T>
where
    T: RangeSetValue + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.range_count()))?;
        for (start, end) in self.starts().iter().zip(self.ends()) {
            seq.serialize_element(&(start, end))?;
        }
        seq.end()
    }
}

/// Pairs are sorted and merged before the set is built, so input that is
/// unordered or has overlapping pairs still deserializes to a canonical set
/// in `O(n log n)` for `n` pairs.
impl<'de, T> Deserialize<'de> for RangeSet<T>
where
    T: RangeSetValue + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut pairs = Vec::<(T, T)>::deserialize(deserializer)?;
        if let Some(&(start, end)) = pairs.iter().find(|(start, end)| start > end) {
            return Err(serde::de::Error::custom(format_args!(
                "range start {:?} exceeds end {:?}",
                start, end
            )));
        }
        pairs.sort_unstable_by_key(|&(start, _)| start);

        let mut starts: Vec<T> = Vec::with_capacity(pairs.len());
        let mut ends: Vec<T> = Vec::with_capacity(pairs.len());
        for (start, end) in pairs {
            match ends.last_mut() {
                Some(last_end) if start <= *last_end || start - T::one() == *last_end => {
                    if end > *last_end {
                        *last_end = end;
                    }
                }
                _ => {
                    starts.push(start);
                    ends.push(end);
                }
            }
        }
        RangeSet::from_ranges(starts, ends).map_err(<D::Error as serde::de::Error>::custom)
    }
}
