use std::fmt::{Display, Formatter, Result};

/// Byte range of a token in the source clause.
pub type Span = std::ops::RangeInclusive<usize>;

#[derive(Debug, Clone)]
pub struct Spanned<T>(pub T, pub Span);

impl<T: PartialEq> PartialEq for Spanned<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Display> Display for Spanned<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.0.fmt(f)
    }
}

impl<T> Spanned<T> {
    pub fn inner(&self) -> &T {
        &self.0
    }
}
