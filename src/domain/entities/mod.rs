//! Domain Entities
//!
//! - `Interview` - one scheduled interview
//! - `Application` - a submitted application and its interviews
//! - `ApplicationBook` - the ordered collection commands act on

mod application;
mod application_book;
mod interview;

pub use application::Application;
pub use application_book::ApplicationBook;
pub use interview::Interview;
