use crate::common::Span;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
    NoClosingQuote(Span),
    UnexpectedChar { c: char, location: usize },
}

impl Error {
    /// Byte offset of the error in the source.
    pub fn location(&self) -> usize {
        match self {
            Self::NoClosingQuote(span) => *span.start(),
            Self::UnexpectedChar { location, .. } => *location,
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::NoClosingQuote(_) => "no closing quote for string".to_string(),
                Self::UnexpectedChar { c, .. } => format!("unexpected char: {}", c),
            }
        )
    }
}
