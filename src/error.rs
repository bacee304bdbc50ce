use thiserror::Error;

/// Error types for `DynArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum DynArrayError {
    /// Index or position is outside the currently valid bounds.
    ///
    /// Raised for `index >= length` on access and erase, and for
    /// `index > length` on insert.
    #[error("index {index} is out of range for length {length}")]
    OutOfRange {
        /// Index or position that was requested
        index: usize,
        /// Length of the array at the time of the request
        length: usize,
    },
}

/// A type alias for `Result<T, DynArrayError>`
pub type Result<T> = core::result::Result<T, DynArrayError>;
