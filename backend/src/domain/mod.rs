//! Domain types and ports.
//!
//! Transport-agnostic core: the student aggregate with its validation rules,
//! the error payload adapters render to clients, and the persistence port the
//! outbound layer implements. Nothing in this module knows about HTTP or SQL.

pub mod error;
pub mod ports;
pub mod student;

pub use self::error::{Error, ErrorBody, ErrorCode};
pub use self::student::{Student, StudentPatch, StudentValidationError};
