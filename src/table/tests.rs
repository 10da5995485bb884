use super::*;

fn sample() -> Table {
    Table::from_columns(vec![
        Column::from_values("name", ["b", "a", "c"]),
        Column::from_values("beds", [Some(10.0), None, Some(30.0)]),
        Column::from_values("cluster", [2i64, 0, 2]),
    ])
    .unwrap()
}

#[test]
fn test_distinct_sorted_numbers() {
    let col = Column::from_values("cluster", [3i64, 1, 10, 1, 2]);
    let distinct = col.distinct_sorted();
    assert_eq!(
        distinct,
        vec![
            CellValue::Int(1),
            CellValue::Int(2),
            CellValue::Int(3),
            CellValue::Int(10)
        ]
    );
}

#[test]
fn test_distinct_sorted_text_is_lexicographic() {
    let col = Column::from_values("level", ["medium", "low", "high", "low"]);
    let distinct: Vec<String> = col.distinct_sorted().iter().map(|v| v.to_string()).collect();
    assert_eq!(distinct, vec!["high", "low", "medium"]);
}

#[test]
fn test_mixed_ordering_numbers_then_text_then_missing() {
    let col = Column::new(
        "mixed",
        vec![
            CellValue::Missing,
            CellValue::from("x"),
            CellValue::Float(2.5),
            CellValue::Int(1),
        ],
    );
    let distinct = col.distinct_sorted();
    assert_eq!(distinct[0], CellValue::Int(1));
    assert_eq!(distinct[1], CellValue::Float(2.5));
    assert_eq!(distinct[2], CellValue::from("x"));
    assert_eq!(distinct[3], CellValue::Missing);
}

#[test]
fn test_int_and_float_are_same_value() {
    assert!(CellValue::Int(1).same_as(&CellValue::Float(1.0)));
    let col = Column::new("n", vec![CellValue::Int(1), CellValue::Float(1.0)]);
    assert_eq!(col.distinct_sorted().len(), 1);
}

#[test]
fn test_position_in_sorted() {
    let col = Column::from_values("level", ["medium", "low", "high"]);
    let sorted = col.distinct_sorted();
    assert_eq!(position_in(&sorted, &CellValue::from("high")), Some(0));
    assert_eq!(position_in(&sorted, &CellValue::from("medium")), Some(2));
    assert_eq!(position_in(&sorted, &CellValue::from("none")), None);
}

#[test]
fn test_push_column_length_mismatch() {
    let mut table = sample();
    let err = table
        .push_column(Column::from_values("short", [1i64]))
        .unwrap_err();
    assert_eq!(
        err,
        TableError::LengthMismatch {
            name: "short".to_string(),
            expected: 3,
            got: 1
        }
    );
}

#[test]
fn test_push_duplicate_column() {
    let mut table = sample();
    let err = table
        .push_column(Column::from_values("name", ["x", "y", "z"]))
        .unwrap_err();
    assert_eq!(err, TableError::DuplicateColumn("name".to_string()));
}

#[test]
fn test_set_column_replaces() {
    let mut table = sample();
    table
        .set_column(Column::from_values("cluster", [5i64, 5, 5]))
        .unwrap();
    assert_eq!(table.columns().len(), 3);
    assert_eq!(table.value("cluster", 1).unwrap(), &CellValue::Int(5));
}

#[test]
fn test_unknown_column() {
    let table = sample();
    assert_eq!(
        table.column("nope").unwrap_err(),
        TableError::UnknownColumn("nope".to_string())
    );
}

#[test]
fn test_numeric_matrix_reports_missing_cell() {
    let table = sample();
    let err = table.numeric_matrix(&["cluster", "beds"]).unwrap_err();
    assert_eq!(
        err,
        TableError::MissingValue {
            column: "beds".to_string(),
            row: 1
        }
    );
}

#[test]
fn test_numeric_rejects_text() {
    let table = sample();
    let err = table.numeric_matrix(&["name"]).unwrap_err();
    assert!(err.to_string().contains("Non-numeric"));
}

#[test]
fn test_drop_missing_and_matrix() {
    let table = sample().drop_missing();
    assert_eq!(table.len(), 2);
    let matrix = table.numeric_matrix(&["beds", "cluster"]).unwrap();
    assert_eq!(matrix, vec![vec![10.0, 2.0], vec![30.0, 2.0]]);
}

#[test]
fn test_nan_counts_as_missing() {
    let table = Table::from_columns(vec![Column::from_values("x", [1.0, f64::NAN])]).unwrap();
    assert_eq!(table.drop_missing().len(), 1);
}

#[test]
fn test_filter_eq() {
    let table = sample();
    let filtered = table.filter_eq("cluster", &CellValue::Int(2)).unwrap();
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered.value("name", 1).unwrap(), &CellValue::from("c"));
}

#[test]
fn test_select_keeps_order() {
    let table = sample().select(&["cluster", "name"]).unwrap();
    assert_eq!(table.column_names(), vec!["cluster", "name"]);
    assert_eq!(table.len(), 3);
}

#[test]
fn test_write_csv() {
    let table = sample();
    let mut out = Vec::new();
    table.write_csv(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "name,beds,cluster\nb,10,2\na,,0\nc,30,2\n");
}
