//! ApplicationRepository port
//!
//! Loads and saves the whole [`ApplicationBook`]. The stored form is an
//! infrastructure concern; loading must re-validate every field.

use std::path::{Path, PathBuf};

use crate::domain::entities::ApplicationBook;
use crate::domain::value_objects::FieldError;

pub trait ApplicationRepository {
    /// Load the book. A missing data file yields an empty book.
    fn load(&self) -> Result<ApplicationBook, StorageError>;

    /// Persist the whole book, replacing the previous content.
    fn save(&self, book: &ApplicationBook) -> Result<(), StorageError>;

    /// Location of the backing file
    fn path(&self) -> &Path;
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to access data file: {message}")]
    Access { message: String },

    #[error("Failed to serialize applications: {message}")]
    Serialization { message: String },

    #[error(
        "data file corrupted: {path}\n  → Fix: repair the JSON or move the file away to start empty\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },

    /// A record parsed as JSON but one of its fields is missing or invalid
    #[error("application #{} in data file is invalid: {source}", .index + 1)]
    InvalidRecord {
        /// Zero-based position of the record in the file
        index: usize,
        #[source]
        source: FieldError,
    },

    #[error("Application list contains duplicate application(s).")]
    DuplicateApplication,
}
