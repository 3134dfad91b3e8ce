use {
    crate::{
        error::{Result, RowWidthSnafu},
        ColumnMeta, Value,
    },
    common::pub_fields_struct,
    std::ops::Index,
};

/// One record, holding a value per column in dataset column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row(Vec<Value>);

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    pub fn get(&self, idx: usize) -> Option<&Value> {
        self.0.get(idx)
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds a new row holding the values at `indices`, in that order.
    pub fn project(&self, indices: &[usize]) -> Row {
        Row(indices.iter().map(|&i| self.0[i].clone()).collect())
    }
}

impl Index<usize> for Row {
    type Output = Value;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.0[idx]
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

/// A fully materialized table. Immutable once built; queries only read it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<ColumnMeta>,
    rows: Vec<Row>,
    label: Option<String>,
}

pub_fields_struct! {
    #[derive(Debug, Clone, PartialEq)]
    struct DatasetMetadata {
        total_rows: usize,
        total_variables: usize,
        variables: Vec<ColumnMeta>,
        dataset_label: Option<String>,
    }
}

impl Dataset {
    pub fn new(columns: Vec<ColumnMeta>, rows: Vec<Row>) -> Result<Self> {
        let expected = columns.len();

        if let Some((row, actual)) = rows
            .iter()
            .map(Row::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return RowWidthSnafu {
                row,
                expected,
                actual,
            }
            .fail();
        }

        Ok(Self {
            columns,
            rows,
            label: None,
        })
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into()).filter(|l: &String| !l.trim().is_empty());
        self
    }

    pub fn columns(&self) -> &[ColumnMeta] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn metadata(&self) -> DatasetMetadata {
        DatasetMetadata {
            total_rows: self.rows.len(),
            total_variables: self.columns.len(),
            variables: self.columns.clone(),
            dataset_label: self.label.clone(),
        }
    }
}
