//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, PartialEq)]
pub enum GeopaintTypesError {
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
}
