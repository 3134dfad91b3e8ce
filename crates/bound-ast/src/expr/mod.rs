mod column;
mod comparison;
mod logic;
mod membership;

pub use {
    column::{ColumnRef, Scalar},
    comparison::ComparisonExpression,
    logic::LogicExpression,
    membership::{InListExpression, IsNullExpression},
};

use {crate::Truth, def::Row};

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Comparison(Box<ComparisonExpression>),
    InList(Box<InListExpression>),
    IsNull(IsNullExpression),
    Logic(Box<LogicExpression>),
}

pub trait Evaluate {
    /// Evaluates against one row. Never fails: anything indeterminate is `Unknown`.
    fn evaluate(&self, row: &Row) -> Truth;
}

impl Evaluate for Expression {
    fn evaluate(&self, row: &Row) -> Truth {
        match self {
            Expression::Comparison(expr) => expr.evaluate(row),
            Expression::InList(expr) => expr.evaluate(row),
            Expression::IsNull(expr) => expr.evaluate(row),
            Expression::Logic(expr) => expr.evaluate(row),
        }
    }
}

impl Expression {
    /// Whether the row passes a WHERE clause made of this expression.
    pub fn matches(&self, row: &Row) -> bool {
        self.evaluate(row).is_true()
    }

    pub fn node_count(&self) -> usize {
        match self {
            Expression::Comparison(_) => 3,
            Expression::InList(expr) => 2 + expr.list.len(),
            Expression::IsNull(_) => 2,
            Expression::Logic(expr) => match expr.as_ref() {
                LogicExpression::And { lhs, rhs } | LogicExpression::Or { lhs, rhs } => {
                    1 + lhs.node_count() + rhs.node_count()
                }
                LogicExpression::Not { child } => 1 + child.node_count(),
            },
        }
    }
}

impl From<ComparisonExpression> for Expression {
    fn from(expr: ComparisonExpression) -> Self {
        Self::Comparison(Box::new(expr))
    }
}

impl From<InListExpression> for Expression {
    fn from(expr: InListExpression) -> Self {
        Self::InList(Box::new(expr))
    }
}

impl From<IsNullExpression> for Expression {
    fn from(expr: IsNullExpression) -> Self {
        Self::IsNull(expr)
    }
}

impl From<LogicExpression> for Expression {
    fn from(expr: LogicExpression) -> Self {
        Self::Logic(Box::new(expr))
    }
}
