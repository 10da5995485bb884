use super::*;
use crate::table::{Column, Table, TableError};

fn hospitals() -> Table {
    Table::from_columns(vec![
        Column::from_values("Latitude", [40.0, 41.0, 42.0]),
        Column::from_values("Longitude", [-89.0, -88.0, -87.0]),
        Column::from_values("HOSPITAL_NAME", ["A", "B", "C"]),
        Column::from_values("beds", [10.0, 20.0, 30.0]),
        Column::from_values("level", ["medium", "low", "high"]),
    ])
    .unwrap()
}

fn builder() -> MapBuilder {
    MapBuilder::new("Latitude", "Longitude", [40.0, -89.0])
}

#[test]
fn test_defaults_without_size_or_color() {
    let map = builder().build(&hospitals()).unwrap();
    assert_eq!(map.zoom, 12);
    assert_eq!(map.tiles, Tiles::CartoDbPositron);
    assert_eq!(map.circles.len(), 3);
    for c in &map.circles {
        assert_eq!(c.radius, DEFAULT_RADIUS);
        assert_eq!(c.color, DEFAULT_COLOR);
        assert!(c.fill);
        assert_eq!(c.popup, None);
    }
    assert_eq!(map.circles[1].location, [41.0, -88.0]);
    assert!(map.pins.is_empty());
    assert!(map.legend.is_none());
}

#[test]
fn test_size_rescales_to_radius_range() {
    let map = builder().size("beds").build(&hospitals()).unwrap();
    let radii: Vec<f64> = map.circles.iter().map(|c| c.radius).collect();
    assert_eq!(radii, vec![3.0, 9.0, 15.0]);
    assert!(map.circles.iter().all(|c| c.color == DEFAULT_COLOR));
}

#[test]
fn test_min_max_scale_constant() {
    assert_eq!(min_max_scale(&[7.0, 7.0], RADIUS_RANGE), vec![3.0, 3.0]);
    assert!(min_max_scale(&[], RADIUS_RANGE).is_empty());
}

#[test]
fn test_color_by_sorted_position() {
    let map = builder()
        .color("level")
        .colors(UTILIZATION_PALETTE.iter().copied())
        .popup("HOSPITAL_NAME")
        .build(&hospitals())
        .unwrap();

    // sorted: high, low, medium
    let colors: Vec<&str> = map.circles.iter().map(|c| c.color.as_str()).collect();
    assert_eq!(colors, vec!["#4363d8", "#3cb44b", "#e6194B"]);
    assert!(map.circles.iter().all(|c| c.radius == DEFAULT_RADIUS));
    assert_eq!(map.circles[0].popup.as_deref(), Some("A"));
}

#[test]
fn test_palette_smaller_than_distinct_values_fails() {
    let table = Table::from_columns(vec![
        Column::from_values("Latitude", [1.0, 2.0, 3.0, 4.0]),
        Column::from_values("Longitude", [1.0, 2.0, 3.0, 4.0]),
        Column::from_values("cluster", [0i64, 1, 2, 3]),
    ])
    .unwrap();
    let err = builder()
        .color("cluster")
        .colors(["red", "green", "blue"])
        .build(&table)
        .unwrap_err();
    assert_eq!(
        err,
        MapError::PaletteTooSmall {
            column: "cluster".to_string(),
            distinct: 4,
            colors: 3
        }
    );
}

#[test]
fn test_legend_follows_assignment_order() {
    let map = builder()
        .color("level")
        .colors(["#111111", "#222222", "#333333"])
        .legend(true)
        .build(&hospitals())
        .unwrap();
    let legend = map.legend.unwrap();
    assert_eq!(legend.title, "level");
    let labels: Vec<&str> = legend.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["high", "low", "medium"]);
    assert_eq!(legend.entries[0].color, "#111111");

    let html = legend_html(&legend);
    assert!(html.contains("<b>level:</b>"));
    assert!(html.find("high").unwrap() < html.find("medium").unwrap());
}

#[test]
fn test_legend_needs_color_column() {
    let map = builder().legend(true).build(&hospitals()).unwrap();
    assert!(map.legend.is_none());
}

#[test]
fn test_numeric_color_column_sorts_numerically() {
    let table = Table::from_columns(vec![
        Column::from_values("Latitude", [1.0, 2.0, 3.0]),
        Column::from_values("Longitude", [1.0, 2.0, 3.0]),
        Column::from_values("cluster", [10i64, 2, 1]),
    ])
    .unwrap();
    let map = builder()
        .color("cluster")
        .colors(["a", "b", "c"])
        .legend(true)
        .build(&table)
        .unwrap();
    let colors: Vec<&str> = map.circles.iter().map(|c| c.color.as_str()).collect();
    assert_eq!(colors, vec!["c", "b", "a"]);
    let labels: Vec<&str> = map
        .legend
        .as_ref()
        .unwrap()
        .entries
        .iter()
        .map(|e| e.label.as_str())
        .collect();
    assert_eq!(labels, vec!["1", "2", "10"]);
}

#[test]
fn test_random_colors_seeded() {
    let a = random_colors(5, Some(11));
    let b = random_colors(5, Some(11));
    assert_eq!(a, b);
    assert!(a.iter().all(|c| c.len() == 7 && c.starts_with('#')));

    let m1 = builder().color("level").seed(3).build(&hospitals()).unwrap();
    let m2 = builder().color("level").seed(3).build(&hospitals()).unwrap();
    assert_eq!(m1.circles, m2.circles);
}

#[test]
fn test_marker_three_values_default_palette() {
    let map = builder().marker("level").build(&hospitals()).unwrap();
    assert_eq!(map.pins.len(), 3);
    assert!(map.pins.iter().all(|p| p.color == "orange"));
    // grouped by sorted value: high, low, medium
    let popups: Vec<&str> = map.pins.iter().map(|p| p.popup.as_str()).collect();
    assert_eq!(popups, vec!["high", "low", "medium"]);
}

#[test]
fn test_marker_too_many_values() {
    let table = Table::from_columns(vec![
        Column::from_values("Latitude", [1.0, 2.0, 3.0, 4.0]),
        Column::from_values("Longitude", [1.0, 2.0, 3.0, 4.0]),
        Column::from_values("kind", ["a", "b", "c", "d"]),
    ])
    .unwrap();
    let err = builder().marker("kind").build(&table).unwrap_err();
    assert_eq!(
        err,
        MapError::MarkerCardinality {
            column: "kind".to_string(),
            distinct: 4,
            palette: 3
        }
    );
    assert!(err.to_string().starts_with("marker has uniques > 3"));
}

#[test]
fn test_marker_binary_pins_only_second_value() {
    let table = Table::from_columns(vec![
        Column::from_values("Latitude", [1.0, 2.0, 3.0, 4.0]),
        Column::from_values("Longitude", [5.0, 6.0, 7.0, 8.0]),
        Column::from_values("centroids", [0i64, 1, 0, 1]),
    ])
    .unwrap();
    let map = builder()
        .marker("centroids")
        .marker_palette(["red", "blue"])
        .build(&table)
        .unwrap();
    assert_eq!(map.pins.len(), 2);
    assert_eq!(map.pins[0].location, [2.0, 6.0]);
    assert_eq!(map.pins[1].location, [4.0, 8.0]);
    assert!(map.pins.iter().all(|p| p.color == "red" && p.popup == "1"));
}

#[test]
fn test_missing_coordinate_fails() {
    let table = Table::from_columns(vec![
        Column::from_values("Latitude", [Some(1.0), None]),
        Column::from_values("Longitude", [1.0, 2.0]),
    ])
    .unwrap();
    let err = builder().build(&table).unwrap_err();
    assert_eq!(
        err,
        MapError::Table(TableError::MissingValue {
            column: "Latitude".to_string(),
            row: 1
        })
    );
}

#[test]
fn test_unknown_column_fails() {
    let err = builder().size("nope").build(&hospitals()).unwrap_err();
    assert_eq!(err, MapError::Table(TableError::UnknownColumn("nope".to_string())));
}

#[test]
fn test_tiles_parse() {
    assert_eq!("cartodbpositron".parse::<Tiles>().unwrap(), Tiles::CartoDbPositron);
    assert_eq!("Stamen Terrain".parse::<Tiles>().unwrap(), Tiles::StamenTerrain);
    assert_eq!("openstreetmap".parse::<Tiles>().unwrap(), Tiles::OpenStreetMap);
    assert!("mapbox".parse::<Tiles>().is_err());
}

#[test]
fn test_render_html_and_geojson() {
    let map = builder()
        .zoom(6)
        .size("beds")
        .color("level")
        .colors(UTILIZATION_PALETTE.iter().copied())
        .legend(true)
        .popup("HOSPITAL_NAME")
        .build(&hospitals())
        .unwrap();

    let html = map.to_html();
    assert!(html.contains("L.map(\"map\").setView([40.0,-89.0], 6)"));
    assert!(html.contains("basemaps.cartocdn.com"));
    assert!(html.contains("fa fa-circle"));

    let geo = map.to_geojson();
    assert_eq!(geo["type"], "FeatureCollection");
    let features = geo["features"].as_array().unwrap();
    assert_eq!(features.len(), 3);
    assert_eq!(features[0]["geometry"]["coordinates"][0], -89.0);
    assert_eq!(features[2]["properties"]["radius"], 15.0);
}

#[test]
fn test_html_escapes_script_breakout() {
    let table = Table::from_columns(vec![
        Column::from_values("Latitude", [1.0]),
        Column::from_values("Longitude", [1.0]),
        Column::from_values("name", ["</script><b>x"]),
    ])
    .unwrap();
    let html = builder().popup("name").build(&table).unwrap().to_html();
    assert!(!html.contains("</script><b>"));
}
