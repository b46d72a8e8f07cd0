//! Exchange error types.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur while encoding, decoding or restoring automata
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExchangeError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Record is malformed in a way the builder cannot express
    #[error("Record validation failed: {0}")]
    ValidationFailed(String),

    /// Replaying the record through the builder failed
    #[error("Record rejected by builder: {0}")]
    Build(#[from] BuildError),
}
