mod column;
mod data_type;
mod dataset;
pub mod error;
mod value;

pub use {
    column::ColumnMeta,
    data_type::DataType,
    dataset::{Dataset, DatasetMetadata, Row},
    value::{parse_date, parse_datetime, Timestamp, Value},
};
