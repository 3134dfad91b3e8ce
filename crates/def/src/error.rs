use snafu::{prelude::*, Backtrace};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display(
        "row {} has {} values but the dataset declares {} columns",
        row,
        actual,
        expected
    ))]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
        backtrace: Backtrace,
    },

    #[snafu(display(r#"unknown column type "{}", expected "numeric" or "character""#, name))]
    UnknownDataType { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
