//! Error type for tour construction and refinement.

use thiserror::Error;

/// Errors produced by matrix construction, tour construction, and refinement.
///
/// All variants except [`SolveError::IncompleteTour`] describe invalid input
/// and are raised before any work is done; the operations never partially
/// execute.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The cost matrix has no rows.
    #[error("cost matrix is empty")]
    EmptyMatrix,

    /// A row of the cost matrix does not match the matrix dimension.
    #[error("cost matrix row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Actual entry count of that row.
        len: usize,
        /// Expected entry count (the number of rows).
        expected: usize,
    },

    /// The requested start index does not address a matrix row.
    #[error("start index {start} out of range for {size} stops")]
    StartOutOfRange {
        /// Requested start index.
        start: usize,
        /// Matrix dimension.
        size: usize,
    },

    /// A route's length does not match the matrix dimension.
    #[error("route has {route_len} stops, cost matrix has {size}")]
    LengthMismatch {
        /// Length of the supplied route.
        route_len: usize,
        /// Matrix dimension.
        size: usize,
    },

    /// A route repeats an index or addresses one outside the matrix.
    #[error("route is not a permutation: index {index} is repeated or out of range")]
    NotAPermutation {
        /// The offending index.
        index: usize,
    },

    /// Construction terminated before placing every stop.
    ///
    /// Surfaced by the solver when the nearest-neighbor pass returns a tour
    /// shorter than the matrix dimension (inconsistent visited-state
    /// bookkeeping). The short tour is never silently refined or returned.
    #[error("construction placed {placed} of {expected} stops")]
    IncompleteTour {
        /// Stops actually placed.
        placed: usize,
        /// Matrix dimension.
        expected: usize,
    },
}
