use thiserror::Error;

use crate::ships::ShipKind;

/// Error returned when no position could be found for a ship.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum PlaceError {
    /// Every attempt in the retry budget failed. The field was not modified.
    #[error("no valid position for a {kind} after {attempts} attempts")]
    Exhausted {
        /// Kind of ship that was requested.
        kind: ShipKind,
        /// Number of attempts that were made.
        attempts: usize,
    },
}

impl PlaceError {
    /// Kind of ship the failed request was for.
    pub fn kind(&self) -> ShipKind {
        match *self {
            PlaceError::Exhausted { kind, .. } => kind,
        }
    }

    /// Number of attempts made before giving up.
    pub fn attempts(&self) -> usize {
        match *self {
            PlaceError::Exhausted { attempts, .. } => attempts,
        }
    }
}
