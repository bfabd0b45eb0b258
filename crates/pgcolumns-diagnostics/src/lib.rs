//! pgcolumns diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the
//! column type registry and the statement renderer: error codes, non-fatal
//! diagnostics, and the [`SchemaError`] type.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for pgcolumns operations
pub type Result<T> = std::result::Result<T, SchemaError>;
