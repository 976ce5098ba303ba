//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, Error)]
pub enum GeoseamPathError {
    /// The drawing command stream violated the reader protocol.
    #[error("invalid command sequence: {0}")]
    InvalidSequence(String),
}
