//! pgcolumns column types
//!
//! This crate maps semantic column type names from a schema description
//! onto PostGIS column behavior:
//! - Table, column and generalized table specs
//! - The [`ColumnType`] contract and its scalar and geometry variants
//! - Declarative column type definitions
//! - The [`ColumnTypeRegistry`]

pub mod column_type;
pub mod definition;
pub mod registry;
pub mod spec;

pub use column_type::*;
pub use definition::*;
pub use registry::*;
pub use spec::*;
