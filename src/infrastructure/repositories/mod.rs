//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod json_application;

pub use json_application::{
    JsonApplicationRecord, JsonApplicationRepository, JsonInterviewRecord, JsonSerializableBook,
};
