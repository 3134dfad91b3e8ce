use def::{Row, Value};

static NULL: Value = Value::Null;

/// A column resolved to its canonical name and its position in the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub name: String,
    pub index: usize,
}

impl ColumnRef {
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }

    pub fn resolve<'r>(&self, row: &'r Row) -> &'r Value {
        // a row narrower than the registry it was bound against reads as null
        row.get(self.index).unwrap_or(&NULL)
    }
}

/// A leaf operand: a column reference or a literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Column(ColumnRef),
    Literal(Value),
}

impl Scalar {
    pub fn resolve<'r>(&'r self, row: &'r Row) -> &'r Value {
        match self {
            Self::Column(column) => column.resolve(row),
            Self::Literal(value) => value,
        }
    }
}
