use {
    super::{error::Error, Parser, Result},
    crate::{
        ast::Identifier,
        common::{Span, Spanned},
        lexer::{self, Keyword, StringKind, Token},
    },
};

impl<'a> Parser<'a> {
    pub(super) fn char_offset(&self, byte: usize) -> usize {
        self.src[..byte].chars().count()
    }

    pub(super) fn syntax_error(&self, span: Span, expected: &'static str) -> Error {
        Error::Syntax {
            token: self.src[span.clone()].to_string(),
            offset: self.char_offset(*span.start()),
            expected,
        }
    }

    pub(super) fn lexing_error(&self, source: lexer::Error) -> Error {
        let token = match &source {
            lexer::Error::NoClosingQuote(span) => self.src[span.clone()].to_string(),
            lexer::Error::UnexpectedChar { c, .. } => c.to_string(),
        };

        Error::Lexing {
            offset: self.char_offset(source.location()),
            token,
            source,
        }
    }

    /// Builds the error for a token (or the end of input) that does not fit.
    pub(super) fn unexpected(
        &self,
        item: Option<lexer::Result<Spanned<Token>>>,
        expected: &'static str,
    ) -> Error {
        match item {
            Some(Ok(Spanned(_, span))) => self.syntax_error(span, expected),
            Some(Err(e)) => self.lexing_error(e),
            None => Error::UnexpectedEnd {
                offset: self.src.chars().count(),
                expected,
            },
        }
    }

    pub(super) fn identifier_from_span(&self, span: Span) -> Identifier {
        Spanned(self.src[span.clone()].to_string(), span)
    }

    /// Strips the quotes (and any `n`/`d`/`dt` suffix) and undoubles inner quotes.
    pub(super) fn string_from_span(&self, span: &Span, kind: StringKind) -> String {
        let raw = &self.src[span.clone()];
        let raw = &raw[..raw.len() - kind.suffix_len()];
        let quote = &raw[..1];

        raw[1..raw.len() - 1].replace(&quote.repeat(2), quote)
    }

    pub(super) fn must_match(&mut self, token: Token, expected: &'static str) -> Result<Span> {
        match self.tokens.next() {
            Some(Ok(Spanned(t, span))) if t == token => Ok(span),
            other => Err(self.unexpected(other, expected)),
        }
    }

    pub(super) fn try_match(&mut self, token: Token) -> Option<Span> {
        self.tokens.next_if_map(|item| match item {
            Ok(Spanned(t, span)) if *t == token => Some(span.clone()),
            _ => None,
        })
    }

    pub(super) fn try_match_keyword(&mut self, keyword: Keyword) -> Option<Span> {
        self.try_match(Token::Keyword(keyword))
    }

    pub(super) fn parse_comma_separated_within_parentheses<T, F>(
        &mut self,
        mut func: F,
    ) -> Result<Spanned<Vec<T>>>
    where
        F: FnMut(&mut Parser<'a>) -> Result<T>,
    {
        let s1 = self.must_match(Token::LeftParen, "`(`")?;

        let mut v = vec![];

        loop {
            v.push(func(self)?);

            if self.try_match(Token::Comma).is_none() {
                break;
            }
        }

        let s2 = self.must_match(Token::RightParen, "`,` or `)`")?;

        Ok(Spanned(v, *s1.start()..=*s2.end()))
    }
}

macro_rules! match_token {
    (
        $parser:ident,
        $token:expr,
        $expected:expr,
        { $( $($t:pat_param)|* $(if $cond:expr)? => $e:expr, )* }
    ) => {
        match $token {
            $( $( Some(Ok($t)) )|* $(if $cond)? => $e,)*

            other => return Err($parser.unexpected(other, $expected)),
        }
    };
}

pub(super) use match_token;
