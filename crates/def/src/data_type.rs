use {
    crate::error::{Error, UnknownDataTypeSnafu},
    std::{fmt::Display, str::FromStr},
};

/// The two storage classes of a SAS variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    Numeric,
    Character,
}

impl DataType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Character => "character",
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "numeric" | "num" | "n" => Ok(Self::Numeric),
            "character" | "char" | "c" => Ok(Self::Character),
            _ => UnknownDataTypeSnafu { name: s }.fail(),
        }
    }
}
