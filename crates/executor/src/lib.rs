mod query;
mod result;

pub use {
    bound_ast::Expression,
    query::{QueryRequest, DEFAULT_PAGE_SIZE},
    result::QueryResult,
};

use {
    binder::ColumnRegistry,
    def::Dataset,
    parser::Parser,
    snafu::prelude::*,
    std::time::Instant,
};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("dataset has an invalid column list: {}", source))]
    Registry { source: binder::Error },

    #[snafu(display("invalid filter: {}", source))]
    Parse { source: parser::Error },

    #[snafu(display("{}", source))]
    Bind { source: binder::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Runs filter queries against one in-memory dataset.
///
/// The dataset is only ever read, so an executor may be shared between
/// threads and serve any number of queries at once.
#[derive(Debug)]
pub struct Executor<'d> {
    dataset: &'d Dataset,
    registry: ColumnRegistry,
}

impl<'d> Executor<'d> {
    pub fn new(dataset: &'d Dataset) -> Result<Self> {
        let registry = ColumnRegistry::new(dataset.columns()).context(RegistrySnafu)?;

        Ok(Self { dataset, registry })
    }

    /// Parses and binds a WHERE clause. A blank clause means no filter.
    pub fn compile(&self, clause: &str) -> Result<Option<Expression>> {
        if clause.trim().is_empty() {
            return Ok(None);
        }

        let start = Instant::now();

        let parsed = Parser::parse(clause).context(ParseSnafu)?;
        tracing::trace!(parsed = %parsed, "parsed filter");

        let expr = self.registry.bind(parsed).context(BindSnafu)?;

        tracing::debug!(
            clause,
            nodes = expr.node_count(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "compiled filter"
        );

        Ok(Some(expr))
    }
}
