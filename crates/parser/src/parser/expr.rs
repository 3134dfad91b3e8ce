use {
    super::{
        error::{Result, TooDeepSnafu},
        Parser,
    },
    crate::{
        ast::{Expression, InfixOperator, Operator, PrefixOperator},
        common::{Span, Spanned},
        lexer::Token,
    },
    snafu::prelude::*,
};

/// Limits both the nesting of `(` and `NOT` the parser descends into and the
/// depth of the tree it builds, so that later passes over the tree stay
/// within a thread's stack.
pub(super) const MAX_DEPTH: usize = 256;

impl<'a> Parser<'a> {
    pub(super) fn parse_expr(&mut self) -> Result<Expression> {
        self.parse_expr_recursive(0).map(|(expr, _)| expr)
    }

    /// Returns the expression together with its depth.
    fn parse_expr_recursive(&mut self, min_prec: u8) -> Result<(Expression, usize)> {
        let (mut expr, mut depth) = match self.try_match_operator::<PrefixOperator>(min_prec) {
            Some((op, span)) => {
                self.descend(&span)?;
                let (child, depth) = self.parse_expr_recursive(op.prec())?;
                self.nesting -= 1;

                self.check_depth(depth + 1, &span)?;
                (op.build_expr(child), depth + 1)
            }
            None => self.parse_expr_atom()?,
        };

        while let Some((op, span)) = self.try_match_operator::<InfixOperator>(min_prec) {
            let (rhs, rhs_depth) = self.parse_expr_recursive(op.assoc() + op.prec())?;

            depth = depth.max(rhs_depth) + 1;
            self.check_depth(depth, &span)?;

            expr = op.build_expr(expr, rhs);
        }

        Ok((expr, depth))
    }

    fn try_match_operator<T: Operator>(&mut self, min_prec: u8) -> Option<(T, Span)> {
        self.tokens.next_if_map(|item| match item {
            Ok(Spanned(t, span)) => T::from(t)
                .filter(|op| op.prec() >= min_prec)
                .map(|op| (op, span.clone())),
            _ => None,
        })
    }

    fn parse_expr_atom(&mut self) -> Result<(Expression, usize)> {
        if let Some(span) = self.try_match(Token::LeftParen) {
            self.descend(&span)?;
            let inner = self.parse_expr_recursive(0)?;
            self.must_match(Token::RightParen, "`)`")?;
            self.nesting -= 1;

            return Ok(inner);
        }

        self.parse_predicate().map(|expr| (expr, 1))
    }

    fn descend(&mut self, span: &Span) -> Result<()> {
        self.nesting += 1;
        self.check_depth(self.nesting, span)
    }

    fn check_depth(&self, depth: usize, span: &Span) -> Result<()> {
        ensure!(
            depth <= MAX_DEPTH,
            TooDeepSnafu {
                limit: MAX_DEPTH,
                token: &self.src[span.clone()],
                offset: self.char_offset(*span.start()),
            }
        );

        Ok(())
    }
}
