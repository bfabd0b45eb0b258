//! Shared table fixtures for rendering tests

use pgcolumns::{GeneralizedTableSpec, TableSpec};
use std::sync::Arc;

pub fn landusages() -> Arc<TableSpec> {
    Arc::new(
        TableSpec::new("import", "osm_landusages", "polygon")
            .with_column("osm_id", "int64")
            .with_column("name", "string")
            .with_column("tags", "hstore_string")
            .with_column("geometry", "validated_geometry"),
    )
}

pub fn roads() -> Arc<TableSpec> {
    Arc::new(
        TableSpec::new("import", "osm_roads", "linestring")
            .with_column("osm_id", "int64")
            .with_column("type", "string")
            .with_column("geometry", "geometry"),
    )
}

pub fn generalize(source: Arc<TableSpec>, suffix: &str, tolerance: f64) -> GeneralizedTableSpec {
    let name = format!("{}_{}", source.name, suffix);
    GeneralizedTableSpec::new(name, source, tolerance)
}
