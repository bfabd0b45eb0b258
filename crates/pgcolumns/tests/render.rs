//! Statement rendering tests
//!
//! Covers:
//! - Insert statements with per-type placeholders
//! - Generalized table statements with simplification and filters
//! - Diagnostics collected from validated geometry columns
//! - Unknown column types and empty tables

mod common;

use common::{generalize, landusages, roads};
use pgcolumns::render::{generalized_table_sql, insert_sql};
use pgcolumns::{ColumnTypeDef, ColumnTypeRegistry, SchemaError, Severity, TableSpec};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::Arc;

fn registry() -> ColumnTypeRegistry {
    let mut registry = ColumnTypeRegistry::with_defaults();
    registry.freeze();
    registry
}

// === Insert statements ===

#[test]
fn test_insert_landusages() {
    let sql = insert_sql(&registry(), &landusages()).unwrap();

    assert_eq!(
        sql,
        concat!(
            r#"INSERT INTO "import"."osm_landusages" ("osm_id", "name", "tags", "geometry") "#,
            r#"VALUES ($1, $2, $3::hstore, $4::Geometry)"#
        )
    );
}

#[test]
fn test_insert_unknown_type() {
    let table = TableSpec::new("import", "osm_places", "point")
        .with_column("osm_id", "int64")
        .with_column("population", "uint32");

    let err = insert_sql(&registry(), &table).unwrap_err();
    assert_eq!(
        err,
        SchemaError::UnknownColumnType {
            table: r#""import"."osm_places""#.to_string(),
            column: "population".to_string(),
            type_name: "uint32".to_string(),
        }
    );
    assert!(err.to_string().contains("uint32"));
}

#[test]
fn test_insert_empty_table() {
    let table = TableSpec::new("import", "empty", "point");
    assert!(matches!(
        insert_sql(&registry(), &table),
        Err(SchemaError::EmptyTable { .. })
    ));
}

#[test]
fn test_insert_with_custom_type() {
    let mut registry = ColumnTypeRegistry::with_defaults();
    registry
        .register_defs([(
            "ltree",
            ColumnTypeDef::Simple {
                sql_name: "LTREE".to_string(),
            },
        )])
        .unwrap();
    registry.freeze();

    let table = TableSpec::new("import", "routes", "linestring")
        .with_column("path", "ltree")
        .with_column("geometry", "linestring");

    assert_eq!(
        insert_sql(&registry, &table).unwrap(),
        r#"INSERT INTO "import"."routes" ("path", "geometry") VALUES ($1, $2::Geometry)"#
    );
}

// === Generalized tables ===

#[test]
fn test_generalize_roads() {
    let spec = generalize(roads(), "gen0", 0.5).with_where("type IN ('motorway', 'trunk')");
    let table = generalized_table_sql(&registry(), &spec).unwrap();

    assert_eq!(
        table.sql,
        concat!(
            r#"CREATE TABLE "import"."osm_roads_gen0" AS (SELECT "osm_id", "type", "#,
            r#"ST_SimplifyPreserveTopology("geometry", 0.500000) as "geometry" "#,
            r#"FROM "import"."osm_roads" WHERE type IN ('motorway', 'trunk'))"#
        )
    );
    assert!(table.diagnostics.is_empty());
}

#[test]
fn test_generalize_landusages_buffers_geometry() {
    let spec = generalize(landusages(), "gen1", 50.0);
    let table = generalized_table_sql(&registry(), &spec).unwrap();

    assert_eq!(
        table.sql,
        concat!(
            r#"CREATE TABLE "import"."osm_landusages_gen1" AS (SELECT "osm_id", "name", "tags", "#,
            r#"ST_Buffer(ST_SimplifyPreserveTopology("geometry", 50.000000), 0) as "geometry" "#,
            r#"FROM "import"."osm_landusages")"#
        )
    );
    assert!(table.diagnostics.is_empty());
}

#[rstest]
#[case("linestring")]
#[case("point")]
#[case("geometry")]
fn test_validated_geometry_on_non_polygon_source(#[case] geometry_type: &str) {
    let source = Arc::new(
        TableSpec::new("import", "osm_features", geometry_type)
            .with_column("geometry", "validated_geometry")
            .with_column("outline", "validated_geometry"),
    );
    let polygon_source = Arc::new(TableSpec {
        geometry_type: "polygon".to_string(),
        ..(*source).clone()
    });

    let warned = generalized_table_sql(&registry(), &generalize(source, "gen0", 1.0)).unwrap();
    let clean = generalized_table_sql(&registry(), &generalize(polygon_source, "gen0", 1.0)).unwrap();

    assert_eq!(warned.diagnostics.len(), 2);
    assert!(warned.diagnostics.iter().all(|d| d.severity == Severity::Warning));
    assert_eq!(
        warned.diagnostics[0].subject.as_deref(),
        Some(r#""import"."osm_features_gen0""#)
    );
    assert!(clean.diagnostics.is_empty());
    assert_eq!(warned.sql, clean.sql);
}

#[test]
fn test_generalize_unknown_type_reports_source_table() {
    let source = Arc::new(TableSpec::new("import", "osm_water", "polygon").with_column("geometry", "raster"));
    let err = generalized_table_sql(&registry(), &generalize(source, "gen0", 1.0)).unwrap_err();

    match err {
        SchemaError::UnknownColumnType { table, column, .. } => {
            assert_eq!(table, r#""import"."osm_water""#);
            assert_eq!(column, "geometry");
        }
        other => panic!("Expected UnknownColumnType, got: {:?}", other),
    }
}

#[test]
fn test_generalize_from_json_table() {
    let source: TableSpec = serde_json::from_str(
        r#"{
            "schema": "public",
            "name": "buildings",
            "geometry_type": "polygon",
            "columns": [
                {"name": "height", "type": "float32"},
                {"name": "geometry", "type": "geometry"}
            ]
        }"#,
    )
    .unwrap();
    let spec = generalize(Arc::new(source), "gen0", 2.0);

    assert_eq!(
        generalized_table_sql(&registry(), &spec).unwrap().sql,
        concat!(
            r#"CREATE TABLE "public"."buildings_gen0" AS (SELECT "height", "#,
            r#"ST_SimplifyPreserveTopology("geometry", 2.000000) as "geometry" "#,
            r#"FROM "public"."buildings")"#
        )
    );
}
