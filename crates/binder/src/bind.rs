use {
    crate::{ColumnRegistry, Result, UnknownColumnSnafu},
    bound_ast::{
        ColumnRef, ComparisonExpression, Expression, InListExpression, IsNullExpression,
        LogicExpression, Scalar,
    },
    parser::ast::{self, ComparisonOperator, Identifier, Operand, Operation},
    snafu::prelude::*,
};

impl ColumnRegistry {
    /// Resolves every column the expression mentions. The first unknown name
    /// fails the whole expression.
    pub fn bind(&self, expr: ast::Expression) -> Result<Expression> {
        Ok(match expr {
            ast::Expression::Comparison { op, lhs, rhs } => {
                let (lhs, rhs) = (self.bind_operand(lhs)?, self.bind_operand(rhs)?);

                match op {
                    ComparisonOperator::Equal => ComparisonExpression::Equal { lhs, rhs },
                    ComparisonOperator::NotEqual => ComparisonExpression::NotEqual { lhs, rhs },
                    ComparisonOperator::LessThan => ComparisonExpression::LessThan { lhs, rhs },
                    ComparisonOperator::LessThanOrEqual => {
                        ComparisonExpression::LessThanOrEqual { lhs, rhs }
                    }
                    ComparisonOperator::GreaterThan => {
                        ComparisonExpression::GreaterThan { lhs, rhs }
                    }
                    ComparisonOperator::GreaterThanOrEqual => {
                        ComparisonExpression::GreaterThanOrEqual { lhs, rhs }
                    }
                }
                .into()
            }
            ast::Expression::InList {
                column,
                negated,
                list,
            } => InListExpression {
                column: self.bind_column(column)?,
                negated,
                list: list.into_iter().map(|value| value.0).collect(),
            }
            .into(),
            ast::Expression::IsNull { column, negated } => IsNullExpression {
                column: self.bind_column(column)?,
                negated,
            }
            .into(),
            ast::Expression::Operation(op) => match op {
                Operation::Not(child) => LogicExpression::Not {
                    child: self.bind(*child)?,
                },
                Operation::And(lhs, rhs) => LogicExpression::And {
                    lhs: self.bind(*lhs)?,
                    rhs: self.bind(*rhs)?,
                },
                Operation::Or(lhs, rhs) => LogicExpression::Or {
                    lhs: self.bind(*lhs)?,
                    rhs: self.bind(*rhs)?,
                },
            }
            .into(),
        })
    }

    fn bind_operand(&self, operand: Operand) -> Result<Scalar> {
        Ok(match operand {
            Operand::Column(name) => Scalar::Column(self.bind_column(name)?),
            Operand::Literal(value) => Scalar::Literal(value.0),
        })
    }

    fn bind_column(&self, name: Identifier) -> Result<ColumnRef> {
        match self.column_ref(name.inner()) {
            Some(column) => Ok(column),
            None => UnknownColumnSnafu {
                candidates: self.candidates(name.inner()),
                name: name.0,
            }
            .fail(),
        }
    }
}
