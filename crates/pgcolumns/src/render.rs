//! Statement rendering over whole tables
//!
//! Column types render single fragments; this module resolves every column
//! of a table through a [`ColumnTypeRegistry`] and assembles the statements
//! an importer executes. Unknown semantic type names are reported here,
//! with the table and column they were found in.

use pgcolumns_diagnostics::{Diagnostic, Result, SchemaError, Severity};
use pgcolumns_types::{ColumnSpec, ColumnType, ColumnTypeRegistry, GeneralizedTableSpec, TableSpec};
use std::sync::Arc;

/// `CREATE TABLE ... AS` statement for a generalized table
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralizedTable {
    pub sql: String,
    /// Findings collected while rendering, in column order
    pub diagnostics: Vec<Diagnostic>,
}

fn resolve<'r>(
    registry: &'r ColumnTypeRegistry,
    table: &TableSpec,
    column: &ColumnSpec,
) -> Result<&'r Arc<dyn ColumnType>> {
    registry
        .get(&column.type_name)
        .ok_or_else(|| SchemaError::UnknownColumnType {
            table: table.full_name(),
            column: column.name.clone(),
            type_name: column.type_name.clone(),
        })
}

fn column_list(table: &TableSpec) -> String {
    table
        .columns
        .iter()
        .map(|col| format!("\"{}\"", col.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parameterized insert statement for one row of `table`
pub fn insert_sql(registry: &ColumnTypeRegistry, table: &TableSpec) -> Result<String> {
    if table.columns.is_empty() {
        return Err(SchemaError::EmptyTable {
            table: table.full_name(),
        });
    }

    let placeholders = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| Ok(resolve(registry, table, col)?.prepare_insert_sql(i + 1, table)))
        .collect::<Result<Vec<_>>>()?;

    Ok(format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table.full_name(),
        column_list(table),
        placeholders.join(", ")
    ))
}

/// Statement creating `spec` from its source table.
///
/// Diagnostics raised by column types are returned and logged.
pub fn generalized_table_sql(
    registry: &ColumnTypeRegistry,
    spec: &GeneralizedTableSpec,
) -> Result<GeneralizedTable> {
    let source = &spec.source;
    if source.columns.is_empty() {
        return Err(SchemaError::EmptyTable {
            table: source.full_name(),
        });
    }

    let mut columns = Vec::with_capacity(source.columns.len());
    let mut diagnostics = Vec::new();
    for col in &source.columns {
        let rendered = resolve(registry, source, col)?.generalize_sql(col, spec);
        columns.push(rendered.sql);
        diagnostics.extend(rendered.diagnostic);
    }

    let filter = match &spec.where_clause {
        Some(condition) => format!(" WHERE {}", condition),
        None => String::new(),
    };
    let sql = format!(
        "CREATE TABLE {} AS (SELECT {} FROM {}{})",
        spec.full_name(),
        columns.join(", "),
        source.full_name(),
        filter
    );

    emit(&diagnostics);
    Ok(GeneralizedTable { sql, diagnostics })
}

/// Log diagnostics at the level matching their severity
pub fn emit(diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        match diag.severity {
            Severity::Error => log::error!("{}", diag),
            Severity::Warning => log::warn!("{}", diag),
            Severity::Info => log::info!("{}", diag),
        }
    }
}
