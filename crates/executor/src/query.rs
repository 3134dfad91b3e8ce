use {
    crate::{Executor, QueryResult, Result},
    bound_ast::Expression,
    def::Row,
    std::time::Instant,
};

pub const DEFAULT_PAGE_SIZE: usize = 100;

/// A query in the form the calling layer receives it.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub filter: Option<String>,
    pub columns: Option<Vec<String>>,
    pub start_row: usize,
    pub page_size: usize,
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self {
            filter: None,
            columns: None,
            start_row: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl<'d> Executor<'d> {
    /// Compiles the request's filter and runs it. Fails only if the filter
    /// does not compile, in which case no row is scanned.
    pub fn query(&self, request: &QueryRequest) -> Result<QueryResult> {
        let filter = match &request.filter {
            Some(clause) => self.compile(clause)?,
            None => None,
        };

        Ok(self.execute(
            filter.as_ref(),
            request.columns.as_deref(),
            request.start_row,
            request.page_size,
        ))
    }

    /// Filters, projects and paginates the dataset.
    ///
    /// Only rows the filter evaluates to true are kept. Unresolvable projected
    /// names are dropped; if none remain every column is returned. A start
    /// past the end of the filtered rows yields an empty page.
    pub fn execute<S: AsRef<str>>(
        &self,
        filter: Option<&Expression>,
        columns: Option<&[S]>,
        start_row: usize,
        page_size: usize,
    ) -> QueryResult {
        let start = Instant::now();
        let rows = self.dataset.rows();

        let selected: Vec<&Row> = match filter {
            Some(expr) => rows.iter().filter(|row| expr.matches(row)).collect(),
            None => rows.iter().collect(),
        };

        let projection = self.projection(columns);

        let start_row = start_row.min(selected.len());
        let page_rows: Vec<Row> = selected[start_row..]
            .iter()
            .take(page_size)
            .map(|row| row.project(&projection))
            .collect();

        let result = QueryResult {
            total_rows: rows.len(),
            filtered_rows: selected.len(),
            start_row,
            returned_rows: page_rows.len(),
            columns_in_page: projection
                .iter()
                .map(|&index| self.registry.names()[index].clone())
                .collect(),
            page_rows,
        };

        tracing::debug!(
            total = result.total_rows,
            filtered = result.filtered_rows,
            returned = result.returned_rows,
            elapsed_us = start.elapsed().as_micros() as u64,
            "executed query"
        );

        result
    }

    /// Positions of the output columns, in output order.
    fn projection<S: AsRef<str>>(&self, columns: Option<&[S]>) -> Vec<usize> {
        let mut projection = vec![];

        for name in columns.into_iter().flatten() {
            let name: &str = name.as_ref();

            match self.registry.position(name) {
                Some(index) if !projection.contains(&index) => projection.push(index),
                Some(_) => {}
                None => tracing::warn!(column = name, "dropping unknown column from projection"),
            }
        }

        if projection.is_empty() {
            projection.extend(0..self.registry.len());
        }

        projection
    }
}
