use {
    snafu::prelude::*,
    std::{io, path::PathBuf},
};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display("failed to read {}: {}", path.display(), source))]
    ReadFile { path: PathBuf, source: io::Error },

    #[snafu(display("{} is not a valid dataset document: {}", path.display(), source))]
    Document {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[snafu(display("column '{}': {}", column, source))]
    ColumnType {
        column: String,
        #[snafu(backtrace)]
        source: def::error::Error,
    },

    #[snafu(display("row {}, column '{}': unsupported value {}", row, column, value))]
    UnsupportedValue {
        row: usize,
        column: String,
        value: serde_json::Value,
    },

    #[snafu(display("{}", source))]
    Dataset {
        #[snafu(backtrace)]
        source: def::error::Error,
    },

    #[snafu(display("{}", source))]
    Query { source: executor::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
