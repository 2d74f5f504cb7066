//! Error types for cinterns
//!
//! Each layer has its own `thiserror` enum; [`CinternsError`] wraps them for
//! callers that drive the whole pipeline.

use std::path::PathBuf;
use thiserror::Error;

use crate::commands::CommandError;
use crate::domain::ports::StorageError;
use crate::domain::value_objects::FieldError;
use crate::parser::ParseError;

/// Result type alias for cinterns operations
pub type CinternsResult<T> = Result<T, CinternsError>;

/// Main error type for cinterns operations
#[derive(Error, Debug)]
pub enum CinternsError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Config file exists but could not be parsed
    #[error("invalid config in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
