use thiserror::Error;

/// Errors that can occur when operating on the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ListError {
    /// The operation needs at least one element.
    #[error("list is empty")]
    EmptyList,

    /// A positional argument fell outside the valid range.
    #[error("list index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The index that was requested
        index: usize,
        /// Length of the list at the time of the call
        len: usize,
    },
}
