//! Errors used by the [`Grid`][crate::board::Grid].

use thiserror::Error;

/// Reason why a field of the requested size could not be created.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum GridError {
    /// The field must have at least one cell.
    #[error("field size must be nonzero")]
    ZeroSize,
    /// The number of cells does not fit in a `usize`.
    #[error("field size {0} is too large")]
    TooLarge(usize),
}
