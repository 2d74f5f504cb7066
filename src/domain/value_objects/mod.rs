//! Domain Value Objects
//!
//! Immutable, validated field values. Each type implements [`Field`], so
//! `is_valid` and `parse` share one predicate.

mod contact;
mod email;
mod field;
mod temporal;
mod text;

pub use contact::Contact;
pub use email::Email;
pub use field::{Field, FieldError};
pub use temporal::{Date, InterviewDate, InterviewTime, DATE_FORMAT, TIME_FORMAT};
pub use text::{Company, Location, Position, Round};
