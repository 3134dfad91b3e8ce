use {
    super::{ColumnRef, Evaluate},
    crate::Truth,
    def::{Row, Value},
    std::cmp::Ordering,
};

/// `column [NOT] IN (v1, v2, ...)`, an OR chain of equalities.
#[derive(Debug, Clone, PartialEq)]
pub struct InListExpression {
    pub column: ColumnRef,
    pub negated: bool,
    pub list: Vec<Value>,
}

impl Evaluate for InListExpression {
    fn evaluate(&self, row: &Row) -> Truth {
        let value = self.column.resolve(row);

        let mut found = Truth::False;
        for item in &self.list {
            found = found.or(value.compare(item).map(|o| o == Ordering::Equal).into());

            if found == Truth::True {
                break;
            }
        }

        if self.negated {
            !found
        } else {
            found
        }
    }
}

/// `column IS [NOT] NULL`, the one predicate that can see missing values.
#[derive(Debug, Clone, PartialEq)]
pub struct IsNullExpression {
    pub column: ColumnRef,
    pub negated: bool,
}

impl Evaluate for IsNullExpression {
    fn evaluate(&self, row: &Row) -> Truth {
        Truth::from(self.column.resolve(row).is_missing() != self.negated)
    }
}
