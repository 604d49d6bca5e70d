#![no_std]
#![doc = include_str!("../README.md")]
//!
//! # Quick Start
//!
//! ```rust
//! use range_set::RangeSet;
//!
//! let mut set = RangeSet::<u32>::new();
//! set.insert(5);
//! set.insert(7);
//! set.insert(6); // joins [5, 5] and [7, 7] into [5, 7]
//! set.insert_range(10, 20);
//!
//! assert_eq!(set.len(), 14);
//! assert_eq!(set.range_count(), 2);
//! assert!(set.contains(6));
//! assert!(!set.contains(8));
//!
//! // Iterate over every member in ascending order
//! for value in &set {
//!     println!("{}", value);
//! }
//! ```
//!
//! # Member Type Support
//!
//! `RangeSet` supports `u16`, `u32`, `u64`, and `usize` members. The set
//! stores two bounds per range, so its size depends on how many runs of
//! consecutive values it holds rather than on how many values:
//!
//! ```rust
//! use range_set::RangeSet;
//!
//! let mut set = RangeSet::<u64>::new();
//! set.insert_range(0, 1_000_000);
//! assert_eq!(set.len(), 1_000_001);
//! assert_eq!(set.range_count(), 1);
//! ```
//!
//! # Equality
//!
//! Two `RangeSet`s are equal when their stored ranges are equal. Comparing
//! against any other collection of integers goes through
//! [`RangeSet::contains_all`], which only looks at members:
//!
//! ```rust
//! use range_set::RangeSet;
//!
//! let mut a = RangeSet::<u32>::new();
//! for value in [1, 2, 3, 10, 11] {
//!     a.insert(value);
//! }
//!
//! let mut b = RangeSet::<u32>::new();
//! b.insert_range(1, 3);
//! b.insert_range(10, 11);
//!
//! assert_eq!(a, b);
//! assert!(a.contains_all(&b) && b.contains_all(&a));
//! assert!(a.contains_all(vec![2, 3, 11]));
//! ```

extern crate alloc;

mod error;
mod iter;
mod range_set;
#[cfg(feature = "serde")]
mod serde_impl;
mod storage;
mod value;

pub use error::RangeSetError;
pub use iter::{Iter, Ranges};
pub use range_set::RangeSet;
pub use storage::MIN_CAPACITY;
pub use value::RangeSetValue;

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
