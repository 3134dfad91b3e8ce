use {crate::lexer, snafu::prelude::*};

pub type Result<T> = std::result::Result<T, Error>;

/// A clause that falls outside the grammar. Offsets count characters, not bytes.
#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display("unexpected end of clause at offset {}, expected {}", offset, expected))]
    UnexpectedEnd {
        offset: usize,
        expected: &'static str,
    },

    #[snafu(display(
        "syntax error at offset {} near `{}`, expected {}",
        offset,
        token,
        expected
    ))]
    Syntax {
        token: String,
        offset: usize,
        expected: &'static str,
    },

    #[snafu(display("invalid number `{}` at offset {}", token, offset))]
    InvalidNumber { token: String, offset: usize },

    #[snafu(display("invalid {} literal `{}` at offset {}", kind, token, offset))]
    InvalidDateLiteral {
        kind: &'static str,
        token: String,
        offset: usize,
    },

    #[snafu(display(
        "clause nests deeper than {} levels at offset {} near `{}`",
        limit,
        offset,
        token
    ))]
    TooDeep {
        limit: usize,
        token: String,
        offset: usize,
    },

    #[snafu(display("{} at offset {}", source, offset))]
    Lexing {
        source: lexer::Error,
        token: String,
        offset: usize,
    },
}

impl Error {
    pub fn offset(&self) -> usize {
        match self {
            Self::UnexpectedEnd { offset, .. }
            | Self::Syntax { offset, .. }
            | Self::InvalidNumber { offset, .. }
            | Self::InvalidDateLiteral { offset, .. }
            | Self::TooDeep { offset, .. }
            | Self::Lexing { offset, .. } => *offset,
        }
    }

    /// The offending source text, empty when the clause ended too early.
    pub fn token(&self) -> &str {
        match self {
            Self::UnexpectedEnd { .. } => "",
            Self::Syntax { token, .. }
            | Self::InvalidNumber { token, .. }
            | Self::InvalidDateLiteral { token, .. }
            | Self::TooDeep { token, .. }
            | Self::Lexing { token, .. } => token,
        }
    }
}
