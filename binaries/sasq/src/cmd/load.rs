use {
    super::error::{
        ColumnTypeSnafu, DatasetSnafu, DocumentSnafu, ReadFileSnafu, Result, UnsupportedValueSnafu,
    },
    def::{parse_date, parse_datetime, ColumnMeta, DataType, Dataset, Row, Value},
    serde::Deserialize,
    serde_json::Value as Json,
    snafu::prelude::*,
    std::{fs, path::Path},
};

/// The on-disk form of a dataset, as exported from a SAS file.
#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    label: Option<String>,
    columns: Vec<DocumentColumn>,
    #[serde(default)]
    rows: Vec<Vec<Json>>,
}

#[derive(Debug, Deserialize)]
struct DocumentColumn {
    name: String,
    #[serde(default)]
    label: String,
    #[serde(rename = "type")]
    declared_type: String,
    #[serde(default)]
    format: Option<String>,
    #[serde(default)]
    length: Option<usize>,
}

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let text = fs::read_to_string(path).context(ReadFileSnafu { path })?;
    let document: Document = serde_json::from_str(&text).context(DocumentSnafu { path })?;

    let columns = document
        .columns
        .into_iter()
        .map(|column| -> Result<ColumnMeta> {
            let declared_type = column
                .declared_type
                .parse::<DataType>()
                .context(ColumnTypeSnafu {
                    column: column.name.as_str(),
                })?;

            let mut meta = ColumnMeta::new(column.name, declared_type).with_label(column.label);
            if let Some(format) = column.format {
                meta = meta.with_format(format);
            }
            if let Some(length) = column.length {
                meta = meta.with_length(length);
            }

            Ok(meta)
        })
        .collect::<Result<Vec<_>>>()?;

    let rows = document
        .rows
        .into_iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .into_iter()
                .zip(columns.iter().map(Some).chain(std::iter::repeat(None)))
                .map(|(cell, column)| to_value(cell, column, row))
                .collect::<Result<Vec<_>>>()
                .map(Row::new)
        })
        .collect::<Result<Vec<_>>>()?;

    let dataset = Dataset::new(columns, rows).context(DatasetSnafu)?;

    tracing::debug!(
        path = %path.display(),
        rows = dataset.row_count(),
        columns = dataset.columns().len(),
        "loaded dataset"
    );

    Ok(match document.label {
        Some(label) => dataset.with_label(label),
        None => dataset,
    })
}

/// Converts one JSON cell. Cells past the declared columns are converted
/// as-is so the width check can report them.
fn to_value(cell: Json, column: Option<&ColumnMeta>, row: usize) -> Result<Value> {
    Ok(match cell {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Boolean(b),
        Json::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Value::Integer(i),
            (None, Some(f)) => Value::Float(f),
            (None, None) => {
                return UnsupportedValueSnafu {
                    row,
                    column: column.map(|c| c.name.clone()).unwrap_or_default(),
                    value: Json::Number(n),
                }
                .fail()
            }
        },
        Json::String(s) => match column.map(|c| c.declared_type) {
            Some(DataType::Numeric) => match parse_datetime(&s).or_else(|| parse_date(&s)) {
                Some(ts) => Value::Timestamp(ts),
                None => Value::Text(s),
            },
            _ => Value::Text(s),
        },
        value @ (Json::Array(_) | Json::Object(_)) => {
            return UnsupportedValueSnafu {
                row,
                column: column.map(|c| c.name.clone()).unwrap_or_default(),
                value,
            }
            .fail()
        }
    })
}
