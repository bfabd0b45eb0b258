//! Declarative column type definitions
//!
//! Hosts that add column types from configuration describe them as data
//! instead of implementing [`ColumnType`] themselves:
//!
//! ```json
//! {
//!     "ltree": { "kind": "simple", "sql_name": "LTREE" },
//!     "multipolygon": { "kind": "validated_geometry", "sql_name": "GEOMETRY" }
//! }
//! ```

use crate::column_type::{
    ColumnType, GeometryColumnType, HstoreColumnType, SimpleColumnType,
    ValidatedGeometryColumnType,
};
use indexmap::IndexMap;
use pgcolumns_diagnostics::{Result, SchemaError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A column type described by its variant and SQL type literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnTypeDef {
    Simple { sql_name: String },
    Hstore { sql_name: String },
    Geometry { sql_name: String },
    ValidatedGeometry { sql_name: String },
}

impl ColumnTypeDef {
    /// SQL type literal of the definition
    pub fn sql_name(&self) -> &str {
        match self {
            Self::Simple { sql_name }
            | Self::Hstore { sql_name }
            | Self::Geometry { sql_name }
            | Self::ValidatedGeometry { sql_name } => sql_name,
        }
    }

    /// Instantiate the column type
    pub fn build(&self) -> Arc<dyn ColumnType> {
        match self {
            Self::Simple { sql_name } => Arc::new(SimpleColumnType::new(sql_name.clone())),
            Self::Hstore { sql_name } => Arc::new(HstoreColumnType::new(sql_name.clone())),
            Self::Geometry { sql_name } => Arc::new(GeometryColumnType::new(sql_name.clone())),
            Self::ValidatedGeometry { sql_name } => {
                Arc::new(ValidatedGeometryColumnType::new(sql_name.clone()))
            }
        }
    }
}

/// Parse a JSON object mapping semantic type names to definitions.
///
/// Entries keep the order of the document.
pub fn parse_definitions(json: &str) -> Result<IndexMap<String, ColumnTypeDef>> {
    let defs: IndexMap<String, ColumnTypeDef> =
        serde_json::from_str(json).map_err(|e| SchemaError::InvalidDefinition {
            name: "<document>".to_string(),
            message: e.to_string(),
        })?;

    for (name, def) in &defs {
        if def.sql_name().trim().is_empty() {
            return Err(SchemaError::InvalidDefinition {
                name: name.clone(),
                message: "sql_name must not be empty".to_string(),
            });
        }
    }
    Ok(defs)
}
