use core::fmt;
use core::hash::Hash;

use num_traits::{AsPrimitive, PrimInt, Unsigned};

/// Sealed trait module to prevent external implementations.
mod private {
    pub trait Sealed {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for usize {}
}

/// Trait for integer types that can be members of a `RangeSet`.
///
/// This trait is sealed and only implemented for `u16`, `u32`, `u64`, and `usize`.
/// Members are always non-negative, so only unsigned types qualify.
///
/// | Type    | Min | Max                        |
/// |---------|-----|----------------------------|
/// | `u16`   | 0   | 65,535                     |
/// | `u32`   | 0   | 4,294,967,295              |
/// | `u64`   | 0   | 18,446,744,073,709,551,615 |
/// | `usize` | 0   | platform dependent         |
pub trait RangeSetValue:
    private::Sealed
    + PrimInt
    + Unsigned
    + Hash
    + fmt::Debug
    + AsPrimitive<usize>
    + AsPrimitive<u64>
    + 'static
{
    /// Number of members in the inclusive range `start..=end`.
    ///
    /// Saturates at `usize::MAX` when the range covers more values than
    /// `usize` can count.
    #[inline]
    fn span_len(start: Self, end: Self) -> usize {
        debug_assert!(start <= end, "start must not exceed end");
        let width = AsPrimitive::<u64>::as_(end - start);
        usize::try_from(width).map_or(usize::MAX, |width| width.saturating_add(1))
    }

    /// Widens the value for hashing.
    #[inline]
    fn widen(self) -> u64 {
        AsPrimitive::<u64>::as_(self)
    }
}

impl RangeSetValue for u16 {}
impl RangeSetValue for u32 {}
impl RangeSetValue for u64 {}
impl RangeSetValue for usize {}
