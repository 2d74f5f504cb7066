//! cinterns - job and internship application tracker
//!
//! Applications are entered as short prefixed commands
//! (`add c/Google ct/65218000 e/careers@google.com p/SWE d/2022-01-01`),
//! validated field by field, and kept in a JSON data file.
//!
//! Pipeline: [`parser`] turns text into a [`commands::Command`], built from
//! the validated value objects in [`domain::value_objects`]; the command runs
//! against a [`domain::entities::ApplicationBook`]; the
//! [`infrastructure::JsonApplicationRepository`] persists the book.

pub mod application;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod parser;

// Re-exports for convenience
pub use commands::{Command, CommandError, CommandResult};
pub use config::Config;
pub use domain::entities::{Application, ApplicationBook, Interview};
pub use error::{CinternsError, CinternsResult};
pub use parser::{parse_command, ParseError};
