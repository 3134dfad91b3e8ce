use {
    super::{
        common::match_token,
        error::{InvalidDateLiteralSnafu, InvalidNumberSnafu, Result},
        Parser,
    },
    crate::{
        ast::{ComparisonOperator, Expression, Identifier, Operand},
        common::{Span, Spanned},
        lexer::{Keyword, StringKind, Token},
    },
    def::{parse_date, parse_datetime, Value},
};

const OPERAND: &str = "a column name or a literal";
const LITERAL: &str = "a literal";
const PREDICATE_TAIL: &str = "a comparison operator, IN or IS";

impl<'a> Parser<'a> {
    /// predicate := operand comp_op operand
    ///            | column [NOT] IN ( literal, ... )
    ///            | column IS [NOT] (NULL | MISSING)
    pub(super) fn parse_predicate(&mut self) -> Result<Expression> {
        let lhs = self.parse_operand()?;

        if self.try_match_keyword(Keyword::IN).is_some() {
            let column = self.expect_column(lhs)?;
            return self.parse_in_list(column, false);
        }

        if self.try_match_keyword(Keyword::NOT).is_some() {
            self.must_match(Token::Keyword(Keyword::IN), "IN after NOT")?;
            let column = self.expect_column(lhs)?;
            return self.parse_in_list(column, true);
        }

        if self.try_match_keyword(Keyword::IS).is_some() {
            let column = self.expect_column(lhs)?;
            let negated = self.try_match_keyword(Keyword::NOT).is_some();

            match_token!(self, self.tokens.next(), "NULL or MISSING", {
                Spanned(Token::Keyword(Keyword::NULL | Keyword::MISSING), _) => (),
            });

            return Ok(Expression::IsNull { column, negated });
        }

        let op = self.tokens.next_if_map(|item| match item {
            Ok(Spanned(t, _)) => ComparisonOperator::from_token(t),
            _ => None,
        });

        match op {
            Some(op) => Ok(Expression::Comparison {
                op,
                lhs,
                rhs: self.parse_operand()?,
            }),
            None => {
                let next = self.tokens.next();
                Err(self.unexpected(next, PREDICATE_TAIL))
            }
        }
    }

    fn expect_column(&self, operand: Operand) -> Result<Identifier> {
        match operand {
            Operand::Column(column) => Ok(column),
            Operand::Literal(Spanned(_, span)) => Err(self.syntax_error(span, "a column name")),
        }
    }

    fn parse_in_list(&mut self, column: Identifier, negated: bool) -> Result<Expression> {
        let Spanned(list, _) =
            self.parse_comma_separated_within_parentheses(|parser| parser.parse_literal(LITERAL))?;

        Ok(Expression::InList {
            column,
            negated,
            list,
        })
    }

    fn parse_operand(&mut self) -> Result<Operand> {
        let is_column = matches!(
            self.tokens.peek(),
            Some(Ok(Spanned(
                Token::Identifier | Token::String(StringKind::Name),
                _
            )))
        );

        if !is_column {
            return self.parse_literal(OPERAND).map(Operand::Literal);
        }

        Ok(Operand::Column(match_token!(self, self.tokens.next(), OPERAND, {
            Spanned(Token::Identifier, span) => self.identifier_from_span(span),
            Spanned(Token::String(StringKind::Name), span) => {
                Spanned(self.string_from_span(&span, StringKind::Name), span)
            },
        })))
    }

    fn parse_literal(&mut self, expected: &'static str) -> Result<Spanned<Value>> {
        match_token!(self, self.tokens.next(), expected, {
            Spanned(Token::Number { is_float }, span) => self.number_from_span(span, is_float),
            Spanned(Token::Minus, sign) => self.parse_signed_number(sign, true),
            Spanned(Token::Plus, sign) => self.parse_signed_number(sign, false),
            Spanned(Token::String(StringKind::Plain), span) => {
                Ok(Spanned(Value::Text(self.string_from_span(&span, StringKind::Plain)), span))
            },
            Spanned(Token::String(kind @ (StringKind::Date | StringKind::DateTime)), span) => {
                self.timestamp_from_span(span, kind)
            },
            Spanned(Token::Keyword(Keyword::NULL | Keyword::MISSING) | Token::Period, span) => {
                Ok(Spanned(Value::Null, span))
            },
            Spanned(Token::Keyword(Keyword::TRUE), span) => Ok(Spanned(Value::Boolean(true), span)),
            Spanned(Token::Keyword(Keyword::FALSE), span) => {
                Ok(Spanned(Value::Boolean(false), span))
            },
        })
    }

    fn parse_signed_number(&mut self, sign: Span, negative: bool) -> Result<Spanned<Value>> {
        match_token!(self, self.tokens.next(), "a number after the sign", {
            Spanned(Token::Number { is_float }, span) => {
                let Spanned(value, span) = self.number_from_span(span, is_float)?;
                let value = match value {
                    Value::Integer(v) if negative => Value::Integer(-v),
                    Value::Float(v) if negative => Value::Float(-v),
                    other => other,
                };

                Ok(Spanned(value, *sign.start()..=*span.end()))
            },
        })
    }

    fn number_from_span(&self, span: Span, is_float: bool) -> Result<Spanned<Value>> {
        let text = &self.src[span.clone()];

        let integer = (!is_float)
            .then(|| text.parse::<i64>().ok().map(Value::Integer))
            .flatten();

        // integers too large for i64 degrade to floats
        match integer.or_else(|| text.parse::<f64>().ok().map(Value::Float)) {
            Some(value) => Ok(Spanned(value, span)),
            None => InvalidNumberSnafu {
                token: text,
                offset: self.char_offset(*span.start()),
            }
            .fail(),
        }
    }

    fn timestamp_from_span(&self, span: Span, kind: StringKind) -> Result<Spanned<Value>> {
        let text = self.string_from_span(&span, kind);

        let (parsed, kind) = match kind {
            StringKind::Date => (parse_date(&text), "date"),
            _ => (parse_datetime(&text), "datetime"),
        };

        match parsed {
            Some(ts) => Ok(Spanned(Value::Timestamp(ts), span)),
            None => InvalidDateLiteralSnafu {
                kind,
                token: &self.src[span.clone()],
                offset: self.char_offset(*span.start()),
            }
            .fail(),
        }
    }
}
