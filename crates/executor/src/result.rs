use {common::pub_fields_struct, def::Row};

pub_fields_struct! {
    /// One page of a filtered, projected dataset.
    #[derive(Debug, Clone, PartialEq, Default)]
    struct QueryResult {
        /// Rows of the page, holding only the projected columns.
        page_rows: Vec<Row>,
        /// Size of the whole dataset, before filtering.
        total_rows: usize,
        /// Rows the filter kept, before pagination.
        filtered_rows: usize,
        start_row: usize,
        returned_rows: usize,
        /// Canonical names of the projected columns, in output order.
        columns_in_page: Vec<String>,
    }
}
