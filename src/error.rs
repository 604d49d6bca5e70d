use thiserror::Error;

/// Errors returned by [`RangeSet`](crate::RangeSet) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeSetError {
    /// The range representation cannot remove members.
    #[error("removing members is not supported by a range set")]
    UnsupportedOperation,
    /// The parallel bound arrays passed to `from_ranges` differ in length.
    #[error("invalid argument: {starts} range starts but {ends} range ends")]
    InvalidArgument { starts: usize, ends: usize },
}
