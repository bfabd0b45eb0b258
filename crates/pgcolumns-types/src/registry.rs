//! Column type registry
//!
//! Maps semantic type names to column types. A registry is populated once,
//! optionally extended by the host, then frozen and shared read-only
//! (typically behind an `Arc`) with everything that renders SQL.

use crate::column_type::{
    ColumnType, GeometryColumnType, HstoreColumnType, SimpleColumnType,
    ValidatedGeometryColumnType,
};
use crate::definition::ColumnTypeDef;
use indexmap::IndexMap;
use pgcolumns_diagnostics::{Result, SchemaError};
use std::sync::Arc;

/// Registry of column types keyed by semantic type name
#[derive(Debug, Default)]
pub struct ColumnTypeRegistry {
    types: IndexMap<String, Arc<dyn ColumnType>>,
    frozen: bool,
}

impl ColumnTypeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in PostGIS column types
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let defaults: [(&str, Arc<dyn ColumnType>); 18] = [
            ("string", Arc::new(SimpleColumnType::new("VARCHAR"))),
            ("bool", Arc::new(SimpleColumnType::new("BOOL"))),
            ("int8", Arc::new(SimpleColumnType::new("SMALLINT"))),
            ("int32", Arc::new(SimpleColumnType::new("INT"))),
            ("int64", Arc::new(SimpleColumnType::new("BIGINT"))),
            ("float32", Arc::new(SimpleColumnType::new("REAL"))),
            ("hstore_string", Arc::new(HstoreColumnType::new("HSTORE"))),
            ("geometry", Arc::new(GeometryColumnType::new("GEOMETRY"))),
            ("validated_geometry", Arc::new(ValidatedGeometryColumnType::new("GEOMETRY"))),
            ("geometry_noindex", Arc::new(GeometryColumnType::new("GEOMETRYNOINDEX"))),
            ("point", Arc::new(GeometryColumnType::new("POINT"))),
            ("linestring", Arc::new(GeometryColumnType::new("LINESTRING"))),
            // JSON needs PostgreSQL >= 9.2, JSONB >= 9.4
            ("json_string", Arc::new(SimpleColumnType::new("JSON"))),
            ("jsonb_string", Arc::new(SimpleColumnType::new("JSONB"))),
            ("date", Arc::new(SimpleColumnType::new("DATE"))),
            ("time", Arc::new(SimpleColumnType::new("TIME"))),
            ("timestamp", Arc::new(SimpleColumnType::new("TIMESTAMP"))),
            // PostgreSQL single-byte internal type
            ("char1", Arc::new(SimpleColumnType::new("\"char\""))),
        ];
        for (name, column_type) in defaults {
            registry.types.insert(name.to_string(), column_type);
        }
        registry
    }

    /// Register a column type, failing if the name is taken or the registry is frozen
    pub fn try_register(
        &mut self,
        name: impl Into<String>,
        column_type: Arc<dyn ColumnType>,
    ) -> Result<()> {
        let name = name.into();
        if self.frozen {
            return Err(SchemaError::RegistryFrozen { name });
        }
        if self.types.contains_key(&name) {
            return Err(SchemaError::DuplicateColumnType { name });
        }
        log::debug!("registering column type {} as {}", name, column_type.name());
        self.types.insert(name, column_type);
        Ok(())
    }

    /// Register a column type.
    ///
    /// # Panics
    ///
    /// Panics if `name` is already registered or the registry is frozen.
    /// Both are configuration mistakes that would otherwise surface as wrong
    /// SQL much later.
    pub fn register(&mut self, name: impl Into<String>, column_type: Arc<dyn ColumnType>) {
        if let Err(err) = self.try_register(name, column_type) {
            panic!("{}", err);
        }
    }

    /// Register declarative definitions in iteration order, stopping at the first failure
    pub fn register_defs<I, S>(&mut self, defs: I) -> Result<()>
    where
        I: IntoIterator<Item = (S, ColumnTypeDef)>,
        S: Into<String>,
    {
        for (name, def) in defs {
            self.try_register(name, def.build())?;
        }
        Ok(())
    }

    /// Reject all further registrations
    pub fn freeze(&mut self) {
        log::debug!("freezing column type registry with {} types", self.types.len());
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Look up a column type by semantic type name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ColumnType>> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over registered types in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn ColumnType>)> {
        self.types.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    /// Registered semantic type names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}
