mod error;
mod token;

pub(crate) use self::{
    error::{Error, Result},
    token::{Keyword, StringKind, Token},
};

use {
    crate::common::Spanned,
    common::iter::{MultiPeek, MultiPeekable},
    std::str::{CharIndices, FromStr},
};

pub(crate) struct Lexer<'a> {
    src: &'a str,
    iter: MultiPeekable<CharIndices<'a>>,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Spanned<Token>>;

    fn next(&mut self) -> Option<Self::Item> {
        // consume whitespace
        self.iter_next_while(|c| c.is_whitespace());

        let token = match (self.peek_char(0)?, self.peek_char(1)) {
            ('\'' | '"', _) => self.scan_string(),
            (c, _) if c.is_ascii_digit() => self.scan_number().map(Ok),
            ('.', Some(c)) if c.is_ascii_digit() => self.scan_number().map(Ok),
            (c, _) if c.is_alphabetic() || c == '_' => self.scan_identifier().map(Ok),
            _ => self.scan_symbol().map(Ok),
        };

        match token {
            None => self
                .iter
                .next()
                .map(|(i, c)| Err(Error::UnexpectedChar { c, location: i })),
            other => other,
        }
    }
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self {
            src,
            iter: src.char_indices().multi_peekable(),
        }
    }

    fn peek_char(&mut self, n: usize) -> Option<char> {
        self.iter.peek_nth(n).map(|&(_, c)| c)
    }

    fn iter_next_while(&mut self, func: impl Fn(&char) -> bool) {
        while self.iter.next_if(|(_, c)| func(c)).is_some() {}
    }

    /// Byte offset of the next unconsumed char.
    fn offset(&mut self) -> usize {
        self.iter.peek().map_or(self.src.len(), |&(i, _)| i)
    }

    fn spanned(&mut self, token: Token, begin: usize) -> Spanned<Token> {
        Spanned(token, begin..=self.offset() - 1)
    }

    fn scan_string(&mut self) -> Option<Result<Spanned<Token>>> {
        let (begin, quote) = self.iter.next_if(|&(_, c)| c == '\'' || c == '"')?;

        while let Some((_, c)) = self.iter.next() {
            if c != quote {
                continue;
            }

            // a doubled quote stands for the quote itself
            if self.iter.next_if(|&(_, c)| c == quote).is_some() {
                continue;
            }

            let kind = self.scan_string_suffix();
            return Some(Ok(self.spanned(Token::String(kind), begin)));
        }

        Some(Err(Error::NoClosingQuote(begin..=self.src.len() - 1)))
    }

    /// Consumes a `n`/`d`/`dt` suffix glued to a closing quote. Any other word
    /// is left alone, so `'a'and b` still lexes as string, keyword, identifier.
    fn scan_string_suffix(&mut self) -> StringKind {
        let mut suffix = String::new();

        while let Some(c) = self.peek_char(suffix.len()) {
            if !c.is_ascii_alphanumeric() && c != '_' {
                break;
            }
            suffix.push(c);
        }

        match StringKind::from_suffix(&suffix) {
            Some(kind) => {
                for _ in 0..suffix.len() {
                    self.iter.next();
                }
                kind
            }
            None => StringKind::Plain,
        }
    }

    fn scan_number(&mut self) -> Option<Spanned<Token>> {
        let begin = self.offset();

        self.iter_next_while(|c| c.is_ascii_digit());

        let mut is_float = self.iter.next_if(|&(_, c)| c == '.').is_some();

        self.iter_next_while(|c| c.is_ascii_digit());

        let exponent_len = match (self.peek_char(0), self.peek_char(1), self.peek_char(2)) {
            (Some('e' | 'E'), Some(d), _) if d.is_ascii_digit() => 1,
            (Some('e' | 'E'), Some('+' | '-'), Some(d)) if d.is_ascii_digit() => 2,
            _ => 0,
        };

        if exponent_len > 0 {
            is_float = true;
            for _ in 0..exponent_len {
                self.iter.next();
            }
            self.iter_next_while(|c| c.is_ascii_digit());
        }

        (self.offset() > begin).then(|| self.spanned(Token::Number { is_float }, begin))
    }

    fn scan_identifier(&mut self) -> Option<Spanned<Token>> {
        let (begin, _) = self
            .iter
            .next_if(|&(_, c)| c.is_alphabetic() || c == '_')?;

        self.iter_next_while(|&c| c.is_alphanumeric() || c == '_');

        let Spanned(_, range) = self.spanned(Token::Identifier, begin);
        let ident = &self.src[range.clone()];

        let token = Keyword::from_str(ident)
            .map(Token::Keyword)
            .unwrap_or(Token::Identifier);

        Some(Spanned(token, range))
    }

    fn scan_symbol(&mut self) -> Option<Spanned<Token>> {
        let begin = self.offset();
        let next = self.peek_char(1);

        let (symbol, len) = match (self.peek_char(0)?, next) {
            ('=', Some('=')) => (Token::Equal, 2),
            ('=', _) => (Token::Equal, 1),
            ('!' | '^' | '~', Some('=')) => (Token::NotEqual, 2),
            ('<', Some('>')) => (Token::NotEqual, 2),
            ('<', Some('=')) => (Token::LessThanOrEqual, 2),
            ('<', _) => (Token::LessThan, 1),
            ('>', Some('=')) => (Token::GreaterThanOrEqual, 2),
            ('>', _) => (Token::GreaterThan, 1),
            ('.', _) => (Token::Period, 1),
            (',', _) => (Token::Comma, 1),
            ('(', _) => (Token::LeftParen, 1),
            (')', _) => (Token::RightParen, 1),
            ('&', _) => (Token::Ampersand, 1),
            ('|', _) => (Token::Pipe, 1),
            ('+', _) => (Token::Plus, 1),
            ('-', _) => (Token::Minus, 1),
            _ => return None,
        };

        for _ in 0..len {
            self.iter.next();
        }

        Some(self.spanned(symbol, begin))
    }
}
