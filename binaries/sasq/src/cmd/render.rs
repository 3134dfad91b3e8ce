use {
    def::{DatasetMetadata, Value},
    executor::QueryResult,
    serde_json::{json, Map, Value as Json},
    std::path::Path,
};

fn value(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Integer(v) => json!(v),
        // NaN and infinities have no JSON form
        Value::Float(v) => serde_json::Number::from_f64(*v).map_or(Json::Null, Json::Number),
        Value::Text(v) => json!(v),
        Value::Boolean(v) => json!(v),
        Value::Timestamp(v) => json!(v.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
    }
}

pub fn query_result(result: &QueryResult) -> Json {
    let data: Vec<_> = result
        .page_rows
        .iter()
        .map(|row| {
            result
                .columns_in_page
                .iter()
                .zip(row.values())
                .map(|(name, v)| (name.clone(), value(v)))
                .collect::<Map<_, _>>()
        })
        .collect();

    json!({
        "data": data,
        "total_rows": result.total_rows,
        "filtered_rows": result.filtered_rows,
        "start_row": result.start_row,
        "returned_rows": result.returned_rows,
        "columns": result.columns_in_page,
    })
}

pub fn metadata(metadata: &DatasetMetadata, path: &Path) -> Json {
    let variables: Vec<_> = metadata
        .variables
        .iter()
        .map(|column| {
            json!({
                "name": column.name,
                "type": column.declared_type.as_str(),
                "label": column.label,
                "format": column.format,
                "length": column.length,
            })
        })
        .collect();

    let label = match &metadata.dataset_label {
        Some(label) => label.clone(),
        None => format!(
            "Dataset: {}",
            path.file_stem().unwrap_or_default().to_string_lossy()
        ),
    };

    json!({
        "total_rows": metadata.total_rows,
        "total_variables": metadata.total_variables,
        "variables": variables,
        "file_path": path.display().to_string(),
        "dataset_label": label,
    })
}
