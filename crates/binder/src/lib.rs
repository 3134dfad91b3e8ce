mod bind;
mod registry;

pub use registry::ColumnRegistry;

use snafu::prelude::*;

#[derive(Debug, Snafu, PartialEq)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("column names must be unique ignoring case, found '{}' twice", name))]
    DuplicateColumn { name: String },

    #[snafu(display(
        "unknown column '{}'. Available columns include: {}",
        name,
        candidates.join(", ")
    ))]
    UnknownColumn {
        name: String,
        candidates: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
