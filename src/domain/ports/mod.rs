//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod application_repository;
pub mod file_system;

pub use application_repository::{ApplicationRepository, StorageError};
pub use file_system::{FileSystem, FsError, FsResult};
