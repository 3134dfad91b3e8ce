use {
    super::write_employees,
    crate::cmd::{load, load_dataset, metadata, Error},
    def::{parse_date, parse_datetime, DataType, Value},
    std::fs,
    tempfile::tempdir,
};

#[test]
fn loads_columns_and_values() -> Result<(), Error> {
    let dir = tempdir().unwrap();
    let dataset = load_dataset(&write_employees(&dir))?;

    assert_eq!(dataset.row_count(), 5);
    assert_eq!(dataset.label(), Some("Employee roster"));

    let name = &dataset.columns()[1];
    assert_eq!(name.declared_type, DataType::Character);
    assert_eq!(name.label, "Full name");
    assert_eq!(name.length, Some(20));
    assert_eq!(dataset.columns()[4].format.as_deref(), Some("DATE9."));

    let rows = dataset.rows();
    assert_eq!(rows[0][0], Value::Integer(1));
    assert_eq!(rows[0][1], Value::from("Ann"));
    assert_eq!(rows[0][4], Value::Timestamp(parse_date("2019-04-01").unwrap()));
    assert_eq!(rows[2][2], Value::Null);
    assert_eq!(rows[3][2], Value::Float(45.5));
    assert_eq!(
        rows[3][4],
        Value::Timestamp(parse_datetime("2015-06-30T08:00:00").unwrap())
    );

    dir.close().unwrap();

    Ok(())
}

#[test]
fn dates_only_in_numeric_columns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dates.json");
    fs::write(
        &path,
        r#"{"columns": [{"name": "D", "type": "char"}, {"name": "N", "type": "num"}],
            "rows": [["2020-01-01", "not a date"]]}"#,
    )
    .unwrap();

    let dataset = load_dataset(&path).unwrap();
    assert_eq!(dataset.rows()[0][0], Value::from("2020-01-01"));
    assert_eq!(dataset.rows()[0][1], Value::from("not a date"));
    assert_eq!(dataset.label(), None);
}

#[test]
fn rejects_malformed_documents() {
    let dir = tempdir().unwrap();
    let cases = [
        ("missing.json", None),
        ("garbage.json", Some("{ not json")),
        (
            "width.json",
            Some(r#"{"columns": [{"name": "A", "type": "numeric"}], "rows": [[1, 2]]}"#),
        ),
        ("type.json", Some(r#"{"columns": [{"name": "A", "type": "date"}]}"#)),
        (
            "nested.json",
            Some(r#"{"columns": [{"name": "A", "type": "numeric"}], "rows": [[[1]]]}"#),
        ),
    ];

    for (file, contents) in cases {
        let path = dir.path().join(file);
        if let Some(contents) = contents {
            fs::write(&path, contents).unwrap();
        }

        let err = load_dataset(&path).unwrap_err();
        match file {
            "missing.json" => assert!(matches!(err, Error::ReadFile { .. })),
            "garbage.json" => assert!(matches!(err, Error::Document { .. })),
            "width.json" => {
                assert!(matches!(err, Error::Dataset { .. }));
                assert_eq!(
                    err.to_string(),
                    "row 0 has 2 values but the dataset declares 1 columns"
                );
            }
            "type.json" => assert!(matches!(err, Error::ColumnType { .. })),
            _ => assert!(matches!(err, Error::UnsupportedValue { row: 0, .. })),
        }
    }
}

#[test]
fn metadata_document() {
    let dir = tempdir().unwrap();
    let path = write_employees(&dir);

    let output = metadata(&path).unwrap();
    assert_eq!(output["total_rows"], 5);
    assert_eq!(output["total_variables"], 5);
    assert_eq!(output["dataset_label"], "Employee roster");
    assert_eq!(output["variables"][1]["name"], "Name");
    assert_eq!(output["variables"][1]["type"], "character");
    assert_eq!(output["variables"][1]["length"], 20);
    assert_eq!(output["variables"][0]["format"], serde_json::Value::Null);

    let unlabeled = dir.path().join("trial_07.json");
    fs::write(&unlabeled, r#"{"columns": [{"name": "A", "type": "numeric"}]}"#).unwrap();

    let output = metadata(&unlabeled).unwrap();
    assert_eq!(output["dataset_label"], "Dataset: trial_07");
    assert_eq!(output["total_rows"], 0);
}

#[test]
fn load_document() {
    let dir = tempdir().unwrap();
    let path = write_employees(&dir);

    let output = load(&path).unwrap();
    assert_eq!(output["success"], true);
    assert_eq!(output["metadata"], metadata(&path).unwrap());

    assert!(matches!(
        load(&dir.path().join("missing.json")),
        Err(Error::ReadFile { .. })
    ));
}
