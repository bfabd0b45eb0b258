//! PostGIS column types for Rust
//!
//! This crate turns a table description into the SQL fragments an importer
//! needs:
//! - A registry of semantic column types (`string`, `int64`, `geometry`, ...)
//! - Insert placeholders with the casts each type requires
//! - Simplified select expressions for generalized tables
//!
//! # Example
//!
//! ```
//! use pgcolumns::{ColumnTypeRegistry, TableSpec, render};
//!
//! let registry = ColumnTypeRegistry::with_defaults();
//! let roads = TableSpec::new("import", "roads", "linestring")
//!     .with_column("osm_id", "int64")
//!     .with_column("geometry", "geometry");
//!
//! let sql = render::insert_sql(&registry, &roads)?;
//! assert_eq!(
//!     sql,
//!     r#"INSERT INTO "import"."roads" ("osm_id", "geometry") VALUES ($1, $2::Geometry)"#
//! );
//! # Ok::<(), pgcolumns::SchemaError>(())
//! ```

// Re-export all public APIs from internal crates
pub use pgcolumns_diagnostics as diagnostics;
pub use pgcolumns_types as types;

pub mod render;

// Convenience re-exports
pub use pgcolumns_diagnostics::{Diagnostic, Result, SchemaError, Severity};
pub use pgcolumns_types::{
    ColumnSpec, ColumnType, ColumnTypeDef, ColumnTypeRegistry, GeneralizedColumn,
    GeneralizedTableSpec, TableSpec,
};
