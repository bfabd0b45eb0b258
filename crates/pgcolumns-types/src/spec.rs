//! Table, column and generalized table specs
//!
//! These are the shapes handed over by the schema description parser.
//! Column types only read from them.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Geometry kind that `validated_geometry` columns always produce
pub const POLYGON: &str = "polygon";

/// A single column of a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column identifier
    pub name: String,
    /// Semantic type name, e.g. `geometry` or `int32`
    #[serde(rename = "type")]
    pub type_name: String,
}

impl ColumnSpec {
    /// Create a new column spec
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// An import table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Database schema the table lives in
    pub schema: String,
    /// Table name
    pub name: String,
    /// Declared geometry kind of the table (`polygon`, `linestring`, `point`, ...)
    pub geometry_type: String,
    /// Columns in insert order
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

impl TableSpec {
    /// Create a new table spec without columns
    pub fn new(
        schema: impl Into<String>,
        name: impl Into<String>,
        geometry_type: impl Into<String>,
    ) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
            geometry_type: geometry_type.into(),
            columns: Vec::new(),
        }
    }

    /// Append a column
    pub fn with_column(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.columns.push(ColumnSpec::new(name, type_name));
        self
    }

    /// Quoted, schema qualified table name
    pub fn full_name(&self) -> String {
        qualified_name(&self.schema, &self.name)
    }
}

/// A simplified copy of an import table
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralizedTableSpec {
    /// Database schema the table lives in
    pub schema: String,
    /// Table name
    pub name: String,
    /// Simplification tolerance, in units of the geometry's SRS
    pub tolerance: f64,
    /// Table the generalized table is derived from
    pub source: Arc<TableSpec>,
    /// Optional SQL condition restricting the copied rows
    pub where_clause: Option<String>,
}

impl GeneralizedTableSpec {
    /// Create a generalized table of `source` in the source's schema
    pub fn new(name: impl Into<String>, source: Arc<TableSpec>, tolerance: f64) -> Self {
        Self {
            schema: source.schema.clone(),
            name: name.into(),
            tolerance,
            source,
            where_clause: None,
        }
    }

    /// Restrict the generalized rows
    pub fn with_where(mut self, condition: impl Into<String>) -> Self {
        self.where_clause = Some(condition.into());
        self
    }

    /// Quoted, schema qualified table name
    pub fn full_name(&self) -> String {
        qualified_name(&self.schema, &self.name)
    }
}

fn qualified_name(schema: &str, name: &str) -> String {
    format!("\"{}\".\"{}\"", schema, name)
}
