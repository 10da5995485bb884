use super::*;
use crate::clusterer::{SelfOrganizingMap, fit_som_matrix};
use crate::map::MapBuilder;
use crate::table::Column;

fn sample_table() -> Table {
    Table::from_columns(vec![
        Column::from_values("name", ["a", "b", "c", "d"]),
        Column::from_values("lat", [40.0, 40.5, 41.0, 41.5]),
        Column::from_values("lon", [-89.0, -88.5, -88.0, -87.5]),
        Column::from_values("beds", [10.0, 20.0, 30.0, 40.0]),
    ])
    .unwrap()
}

#[test]
fn test_export_writes_all_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("illinois");

    let table = sample_table();
    let data = table.numeric_matrix(&["beds"]).unwrap();
    let som = SelfOrganizingMap::builder(2, 1, 1).seed(4).build().unwrap();
    let result = fit_som_matrix(&data, vec!["beds".to_string()], Some(som), 20).unwrap();

    let map = MapBuilder::new("lat", "lon", [40.0, -89.0])
        .size("beds")
        .popup("name")
        .build(&table)
        .unwrap();

    let mut exporter = MapExporter::new(&out, "Illinois").unwrap();
    exporter.record_clusters(&result);
    let html = exporter.write_map("utilization", &map).unwrap();
    let csv = exporter.write_table(CLUSTERS_FILE, &table).unwrap();
    let manifest_path = exporter.finish().unwrap();

    assert!(html.ends_with("utilization.html"));
    assert!(out.join("utilization.geojson").exists());
    assert!(fs::read_to_string(&html).unwrap().contains("leaflet"));
    assert!(fs::read_to_string(&csv).unwrap().starts_with("name,lat,lon,beds\n"));
    assert!(manifest_path.ends_with(MANIFEST_FILE));

    let manifest = read_manifest(&out).unwrap();
    assert_eq!(manifest.state, "Illinois");
    assert_eq!(manifest.maps, vec!["utilization.html"]);
    assert_eq!(manifest.tables, vec![CLUSTERS_FILE]);
    assert_eq!(manifest.stats.hospital_count, 4);
    assert_eq!((manifest.stats.grid_rows, manifest.stats.grid_cols), (2, 1));
    assert!(manifest.generator.starts_with("bedmap v"));
    assert!(chrono::DateTime::parse_from_rfc3339(&manifest.created_at).is_ok());
}

#[test]
fn test_missing_manifest_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_manifest(dir.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to read manifest"));
}
