mod error;
mod load;
mod render;

#[cfg(test)]
mod tests;

pub use {error::Error, load::load_dataset};

use {
    error::{QuerySnafu, Result},
    executor::{Executor, QueryRequest},
    serde_json::{json, Value as Json},
    snafu::prelude::*,
    std::path::Path,
};

pub fn metadata(path: &Path) -> Result<Json> {
    let dataset = load_dataset(path)?;

    Ok(render::metadata(&dataset.metadata(), path))
}

/// Confirms the dataset loads and reports its metadata alongside a success flag.
pub fn load(path: &Path) -> Result<Json> {
    Ok(json!({ "success": true, "metadata": metadata(path)? }))
}

pub fn data(path: &Path, request: QueryRequest) -> Result<Json> {
    let dataset = load_dataset(path)?;
    let executor = Executor::new(&dataset).context(QuerySnafu)?;

    let result = executor.query(&request).context(QuerySnafu)?;

    Ok(render::query_result(&result))
}
