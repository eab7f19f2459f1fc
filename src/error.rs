//! Error types for hover classification.
//!
//! Everything here is a configuration error: a malformed grid, a grid name
//! nothing registered, or a zone code with no interpreter. The dispatcher
//! absorbs these and degrades to "no drop" - a drag session must never
//! abort because of a bad grid set.

use thiserror::Error;

use crate::grid::ZoneCode;

/// Errors that can occur while resolving a hover request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HoverError {
    /// The request named a grid that is not registered with the engine
    #[error("unknown drop grid {0:?}")]
    UnknownGrid(String),

    /// A grid was constructed with no rows or columns
    #[error("drop grid has zero dimension")]
    EmptyGrid,

    /// A grid row does not match the grid's dimension
    #[error("drop grid is not square: row {row} has {got} columns, expected {expected}")]
    NotSquare {
        row: usize,
        got: usize,
        expected: usize,
    },

    /// A grid cell resolved to a zone with no registered interpreter
    #[error("no interpreter registered for zone {code:?}")]
    MissingInterpreter { code: ZoneCode },

    /// A serialized grid referenced a numeric code outside the enumeration
    #[error("unknown zone code {0}")]
    UnknownZoneCode(u16),
}

/// Result type alias for hover operations
pub type HoverResult<T> = Result<T, HoverError>;
