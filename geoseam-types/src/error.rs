//! Error type used by the crate.

use thiserror::Error;

use crate::geo::TransformError;

/// Error enum.
#[derive(Debug, Clone, Error)]
pub enum GeoseamTypesError {
    /// Malformed spatial reference string or byte sequence.
    #[error("invalid spatial reference format: {0}")]
    InvalidFormat(String),

    /// Spatial reference authority is not recognized and could not be
    /// resolved through an external registry.
    #[error("unknown spatial reference authority: {0}")]
    UnknownAuthority(String),

    /// Source and target dimensionality disagree, or a coordinate buffer does
    /// not match the advertised dimensions.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A coordinate transform failed for every point of a batch.
    #[error("coordinate transform failed: {0}")]
    Transform(#[from] TransformError),
}
