//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local)
//! - `repositories/` - Repository implementations (JSON application book)

pub mod fs;
pub mod repositories;

pub use fs::LocalFs;
pub use repositories::JsonApplicationRepository;
