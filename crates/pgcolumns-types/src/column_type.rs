//! Column types
//!
//! A column type knows the SQL type literal used in DDL and how a column of
//! that type is rendered in two places: as the bound parameter of an
//! `INSERT`, and as the select expression that fills a generalized table.
//!
//! Variants that refine another one embed it and delegate explicitly:
//! [`HstoreColumnType`] wraps [`SimpleColumnType`],
//! [`ValidatedGeometryColumnType`] wraps [`GeometryColumnType`].

use crate::spec::{ColumnSpec, GeneralizedTableSpec, POLYGON, TableSpec};
use pgcolumns_diagnostics::{Diagnostic, PGC0100};
use std::fmt::Debug;

/// Behavior shared by all column types
pub trait ColumnType: Debug + Send + Sync {
    /// SQL type literal used in DDL, e.g. `VARCHAR` or `GEOMETRY`
    fn name(&self) -> &str;

    /// Whether the column holds spatial data
    fn is_geometry(&self) -> bool;

    /// Placeholder for the `index`-th bound parameter (1-based) of an insert
    fn prepare_insert_sql(&self, index: usize, table: &TableSpec) -> String;

    /// Select-list expression that fills this column of a generalized table
    fn generalize_sql(&self, column: &ColumnSpec, spec: &GeneralizedTableSpec) -> GeneralizedColumn;
}

/// Rendered generalize expression of one column
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralizedColumn {
    /// Select-list expression
    pub sql: String,
    /// Non-fatal finding about the column, never affects `sql`
    pub diagnostic: Option<Diagnostic>,
}

impl GeneralizedColumn {
    /// Expression without diagnostic
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            diagnostic: None,
        }
    }

    /// Attach a diagnostic
    pub fn with_diagnostic(mut self, diagnostic: Diagnostic) -> Self {
        self.diagnostic = Some(diagnostic);
        self
    }
}

fn placeholder(index: usize) -> String {
    debug_assert!(index >= 1, "insert parameters are 1-based");
    format!("${}", index)
}

fn simplify_sql(column: &ColumnSpec, tolerance: f64) -> String {
    format!(
        "ST_SimplifyPreserveTopology(\"{}\", {:.6})",
        column.name, tolerance
    )
}

/// Plain scalar column (strings, numbers, json, temporal types)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleColumnType {
    name: String,
}

impl SimpleColumnType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ColumnType for SimpleColumnType {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_geometry(&self) -> bool {
        false
    }

    fn prepare_insert_sql(&self, index: usize, _table: &TableSpec) -> String {
        placeholder(index)
    }

    fn generalize_sql(&self, column: &ColumnSpec, _spec: &GeneralizedTableSpec) -> GeneralizedColumn {
        GeneralizedColumn::new(format!("\"{}\"", column.name))
    }
}

/// Key-value map column, inserted with an explicit `hstore` cast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HstoreColumnType {
    base: SimpleColumnType,
}

impl HstoreColumnType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: SimpleColumnType::new(name),
        }
    }
}

impl ColumnType for HstoreColumnType {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn is_geometry(&self) -> bool {
        self.base.is_geometry()
    }

    fn prepare_insert_sql(&self, index: usize, table: &TableSpec) -> String {
        format!("{}::hstore", self.base.prepare_insert_sql(index, table))
    }

    fn generalize_sql(&self, column: &ColumnSpec, spec: &GeneralizedTableSpec) -> GeneralizedColumn {
        self.base.generalize_sql(column, spec)
    }
}

/// Spatial column, simplified with topology preservation when generalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometryColumnType {
    name: String,
}

impl GeometryColumnType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ColumnType for GeometryColumnType {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_geometry(&self) -> bool {
        true
    }

    fn prepare_insert_sql(&self, index: usize, _table: &TableSpec) -> String {
        format!("{}::Geometry", placeholder(index))
    }

    fn generalize_sql(&self, column: &ColumnSpec, spec: &GeneralizedTableSpec) -> GeneralizedColumn {
        GeneralizedColumn::new(format!(
            "{} as \"{}\"",
            simplify_sql(column, spec.tolerance),
            column.name
        ))
    }
}

/// Spatial column whose simplified geometry is repaired with a zero buffer.
///
/// The buffer turns every geometry into a polygon, so generalizing a table
/// whose source geometry kind is not `polygon` yields a warning diagnostic.
// TODO: report the non-polygon source while validating the schema description
// instead of at generation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedGeometryColumnType {
    base: GeometryColumnType,
}

impl ValidatedGeometryColumnType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: GeometryColumnType::new(name),
        }
    }
}

impl ColumnType for ValidatedGeometryColumnType {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn is_geometry(&self) -> bool {
        self.base.is_geometry()
    }

    fn prepare_insert_sql(&self, index: usize, table: &TableSpec) -> String {
        self.base.prepare_insert_sql(index, table)
    }

    fn generalize_sql(&self, column: &ColumnSpec, spec: &GeneralizedTableSpec) -> GeneralizedColumn {
        let rendered = GeneralizedColumn::new(format!(
            "ST_Buffer({}, 0) as \"{}\"",
            simplify_sql(column, spec.tolerance),
            column.name
        ));

        if spec.source.geometry_type == POLYGON {
            return rendered;
        }

        let full_name = spec.full_name();
        rendered.with_diagnostic(
            Diagnostic::warning(
                PGC0100,
                format!("validated_geometry column returns polygon geometries for {}", full_name),
            )
            .with_subject(full_name)
            .with_help(format!("source geometry type is {}", spec.source.geometry_type)),
        )
    }
}
