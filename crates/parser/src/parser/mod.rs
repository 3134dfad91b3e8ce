mod common;
mod error;
mod expr;
mod predicate;

pub use self::error::{Error, Result};

use crate::{ast::Expression, lexer::Lexer};

// `::` because this module has its own `common` child
use ::common::iter::{MultiPeek, MultiPeekable};

pub struct Parser<'a> {
    src: &'a str,
    tokens: MultiPeekable<Lexer<'a>>,
    /// Open parentheses and `NOT`s around the current position.
    nesting: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            tokens: Lexer::new(src).multi_peekable(),
            nesting: 0,
        }
    }

    /// Parses a whole WHERE clause. Trailing tokens are an error.
    pub fn parse(clause: &'a str) -> Result<Expression> {
        let mut parser = Self::new(clause);

        let expr = parser.parse_expr()?;

        match parser.tokens.next() {
            None => Ok(expr),
            other => Err(parser.unexpected(other, "AND, OR or the end of the clause")),
        }
    }
}
