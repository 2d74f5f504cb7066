//! Domain Layer
//!
//! Pure business logic of the tracker, free of I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Validated field values (Company, Email, InterviewTime, ...)
//! - `entities/` - Interview, Application, ApplicationBook
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Valid by construction** - A value object exists only if it passed its field's rule
//! 3. **Ports & Adapters** - Persistence goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
