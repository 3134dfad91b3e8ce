use {
    crate::{DuplicateColumnSnafu, Result},
    bound_ast::ColumnRef,
    def::ColumnMeta,
    snafu::prelude::*,
};

const MAX_CANDIDATES: usize = 5;

/// Case-insensitive name resolution over a dataset's columns.
///
/// Lookups compare whole identifiers, so `NAME` never resolves inside
/// `FIRSTNAME`.
#[derive(Debug, Clone)]
pub struct ColumnRegistry {
    /// Canonical names in dataset order.
    names: Vec<String>,
    /// Uppercased names with their position, sorted for binary search.
    keys: Vec<(String, usize)>,
}

impl ColumnRegistry {
    pub fn new(columns: &[ColumnMeta]) -> Result<Self> {
        let names: Vec<_> = columns.iter().map(|column| column.name.clone()).collect();

        let mut keys: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.to_uppercase(), index))
            .collect();
        keys.sort();

        if let Some(pair) = keys.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return DuplicateColumnSnafu {
                name: names[pair[1].1].clone(),
            }
            .fail();
        }

        Ok(Self { names, keys })
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        let key = name.to_uppercase();

        self.keys
            .binary_search_by(|(k, _)| k.as_str().cmp(&key))
            .ok()
            .map(|i| self.keys[i].1)
    }

    /// Returns the canonical (as stored) name of a column.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.position(name).map(|index| self.names[index].as_str())
    }

    pub fn column_ref(&self, name: &str) -> Option<ColumnRef> {
        self.position(name)
            .map(|index| ColumnRef::new(self.names[index].clone(), index))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Suggestions for a name that did not resolve: columns related to it by
    /// prefix or substring first, longest first, then the leading columns.
    pub fn candidates(&self, name: &str) -> Vec<String> {
        let key = name.to_uppercase();

        let mut related: Vec<_> = self
            .keys
            .iter()
            .filter(|(k, _)| !key.is_empty() && (k.contains(&key) || key.contains(k.as_str())))
            .map(|(k, index)| (k.len(), *index))
            .collect();
        related.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        let mut candidates: Vec<usize> = Vec::with_capacity(MAX_CANDIDATES);
        let ordered = related
            .into_iter()
            .map(|(_, index)| index)
            .chain(0..self.names.len());

        for index in ordered {
            if candidates.len() == MAX_CANDIDATES {
                break;
            }
            if !candidates.contains(&index) {
                candidates.push(index);
            }
        }

        candidates
            .into_iter()
            .map(|index| self.names[index].clone())
            .collect()
    }
}
