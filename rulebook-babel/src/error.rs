//! Error types for format operations

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    /// No format registered under that name
    #[error("Format '{0}' not found")]
    FormatNotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The output sink refused a write
    #[error("Failed to write output: {0}")]
    Write(#[from] fmt::Error),
}
