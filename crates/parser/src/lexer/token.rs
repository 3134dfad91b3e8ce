#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum Token {
    Keyword(Keyword),

    Identifier,

    Number { is_float: bool },
    String(StringKind),

    Comma,
    Period,
    LeftParen,
    RightParen,

    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,

    Ampersand,
    Pipe,
    Plus,
    Minus,
}

/// Quoted strings may carry a SAS suffix that changes their meaning:
/// `'..'n` names a column, `'..'d` and `'..'dt` are date and datetime constants.
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum StringKind {
    Plain,
    Name,
    Date,
    DateTime,
}

impl StringKind {
    pub(crate) fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_lowercase().as_str() {
            "" => Some(Self::Plain),
            "n" => Some(Self::Name),
            "d" => Some(Self::Date),
            "dt" => Some(Self::DateTime),
            _ => None,
        }
    }

    pub(crate) const fn suffix_len(&self) -> usize {
        match self {
            Self::Plain => 0,
            Self::Name | Self::Date => 1,
            Self::DateTime => 2,
        }
    }
}

macro_rules! keyword {
    ( $( $var:ident, )* ) => {
        #[derive(Debug, PartialEq, Clone, Copy)]
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        pub(crate) enum Keyword {
            $($var,)*
        }

        #[derive(Debug)]
        pub(crate) struct NotKeywordError {}

        impl std::fmt::Display for NotKeywordError {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "not a keyword")
            }
        }
        impl std::error::Error for NotKeywordError {}

        impl std::str::FromStr for Keyword {
            type Err = NotKeywordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_uppercase().as_str() {
                    $(stringify!($var) => Ok(Self::$var),)*
                    _=> Err(NotKeywordError{}),
                }
            }
        }
    };
}

keyword! {
    AND,
    EQ,
    FALSE,
    GE,
    GT,
    IN,
    IS,
    LE,
    LT,
    MISSING,
    NE,
    NOT,
    NULL,
    OR,
    TRUE,
}
