//! Configuration module for cinterns
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CINTERNS_*)
//! 3. Project config (./cinterns.toml)
//! 4. User config (~/.config/cinterns/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{Config, OutputConfig, StorageConfig, Verbosity, DEFAULT_DATA_FILE};
