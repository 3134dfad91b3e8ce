use {
    chrono::{NaiveDate, NaiveDateTime},
    core::cmp::Ordering,
    std::fmt::{Display, Formatter},
};

/// SAS dates and datetimes carry no zone.
pub type Timestamp = NaiveDateTime;

/// A single cell.
///
/// Ordering is only defined inside a kind family, see [`Value::compare`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
    Timestamp(Timestamp),
}

impl Value {
    /// Null, or a NaN float left behind by a loader that encodes SAS missing as NaN.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Compares two values of the same family.
    ///
    /// Integers and floats compare numerically, text compares byte by byte,
    /// booleans as 0/1 and timestamps chronologically. `None` means the
    /// comparison is indeterminate: either side is null, the families differ,
    /// or a float is NaN.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Self::Null, _) | (_, Self::Null) => None,

            (Self::Integer(v1), Self::Integer(v2)) => Some(v1.cmp(v2)),
            (Self::Integer(v1), Self::Float(v2)) => (*v1 as f64).partial_cmp(v2),
            (Self::Float(v1), Self::Integer(v2)) => v1.partial_cmp(&(*v2 as f64)),
            (Self::Float(v1), Self::Float(v2)) => v1.partial_cmp(v2),

            (Self::Text(v1), Self::Text(v2)) => Some(v1.as_bytes().cmp(v2.as_bytes())),
            (Self::Boolean(v1), Self::Boolean(v2)) => Some(u8::from(*v1).cmp(&u8::from(*v2))),
            (Self::Timestamp(v1), Self::Timestamp(v2)) => Some(v1.cmp(v2)),

            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "."),
            Self::Integer(v) => write!(f, "{}", v),
            // `{:?}` keeps the `.0` so the literal reads back as a float
            Self::Float(v) => write!(f, "{:?}", v),
            Self::Text(v) => write!(f, "'{}'", v.replace('\'', "''")),
            Self::Boolean(v) => write!(f, "{}", v),
            Self::Timestamp(v) => write!(f, "'{}'dt", v.format("%Y-%m-%dT%H:%M:%S%.f")),
        }
    }
}

const DATE_FORMATS: &[&str] = &["%d%b%Y", "%Y-%m-%d"];

const DATETIME_FORMATS: &[&str] = &[
    "%d%b%Y:%H:%M:%S%.f",
    "%d%b%Y:%H:%M:%S",
    "%d%b%Y:%H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a date in SAS (`15MAR2021`) or ISO (`2021-03-15`) form, at midnight.
pub fn parse_date(s: &str) -> Option<Timestamp> {
    let s = s.trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Parses a datetime in SAS (`15MAR2021:10:30:00`) or ISO form.
pub fn parse_datetime(s: &str) -> Option<Timestamp> {
    let s = s.trim();

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

macro_rules! value_conversions {
    ($(($raw:ty, $val:ident),)*) => {
        $(
            impl From<$raw> for Value {
                fn from(raw: $raw) -> Self {
                    Value::$val(raw.into())
                }
            }
        )*
    };
}

value_conversions! {
    (bool, Boolean),
    (i32, Integer),
    (i64, Integer),
    (f64, Float),
    (String, Text),
    (&str, Text),
    (Timestamp, Timestamp),
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(raw: Option<T>) -> Self {
        raw.map_or(Value::Null, Into::into)
    }
}
