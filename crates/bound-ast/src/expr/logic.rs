use {
    super::{Evaluate, Expression},
    crate::Truth,
    def::Row,
};

#[derive(Debug, Clone, PartialEq)]
pub enum LogicExpression {
    And { lhs: Expression, rhs: Expression },
    Or { lhs: Expression, rhs: Expression },
    Not { child: Expression },
}

impl Evaluate for LogicExpression {
    fn evaluate(&self, row: &Row) -> Truth {
        match self {
            Self::And { lhs, rhs } => match lhs.evaluate(row) {
                Truth::False => Truth::False,
                lhs => lhs.and(rhs.evaluate(row)),
            },
            Self::Or { lhs, rhs } => match lhs.evaluate(row) {
                Truth::True => Truth::True,
                lhs => lhs.or(rhs.evaluate(row)),
            },
            Self::Not { child } => !child.evaluate(row),
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{ColumnRef, ComparisonExpression, Scalar},
        def::Value,
    };

    /// `c0 = <value>` against a row holding `[1, null]`: true for 1, false for 2,
    /// unknown when the column is the null one.
    fn leaf(truth: Truth) -> Expression {
        let (index, value) = match truth {
            Truth::True => (0, 1),
            Truth::False => (0, 2),
            Truth::Unknown => (1, 1),
        };

        ComparisonExpression::Equal {
            lhs: Scalar::Column(ColumnRef::new("c", index)),
            rhs: Scalar::Literal(Value::Integer(value)),
        }
        .into()
    }

    #[test]
    fn follows_kleene_tables() {
        let row = Row::new(vec![Value::Integer(1), Value::Null]);
        let all = [Truth::True, Truth::False, Truth::Unknown];

        for a in all {
            assert_eq!(leaf(a).evaluate(&row), a);

            let not = LogicExpression::Not { child: leaf(a) };
            assert_eq!(not.evaluate(&row), !a);

            for b in all {
                let and = LogicExpression::And { lhs: leaf(a), rhs: leaf(b) };
                let or = LogicExpression::Or { lhs: leaf(a), rhs: leaf(b) };

                assert_eq!(and.evaluate(&row), a.and(b), "{} AND {}", a, b);
                assert_eq!(or.evaluate(&row), a.or(b), "{} OR {}", a, b);
            }
        }
    }
}
