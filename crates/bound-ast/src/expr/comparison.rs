use {
    super::{Evaluate, Scalar},
    crate::Truth,
    def::Row,
    std::cmp::Ordering,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonExpression {
    Equal { lhs: Scalar, rhs: Scalar },
    NotEqual { lhs: Scalar, rhs: Scalar },
    LessThan { lhs: Scalar, rhs: Scalar },
    LessThanOrEqual { lhs: Scalar, rhs: Scalar },
    GreaterThan { lhs: Scalar, rhs: Scalar },
    GreaterThanOrEqual { lhs: Scalar, rhs: Scalar },
}

impl ComparisonExpression {
    pub fn operands(&self) -> (&Scalar, &Scalar) {
        match self {
            Self::Equal { lhs, rhs }
            | Self::NotEqual { lhs, rhs }
            | Self::LessThan { lhs, rhs }
            | Self::LessThanOrEqual { lhs, rhs }
            | Self::GreaterThan { lhs, rhs }
            | Self::GreaterThanOrEqual { lhs, rhs } => (lhs, rhs),
        }
    }
}

impl Evaluate for ComparisonExpression {
    fn evaluate(&self, row: &Row) -> Truth {
        let (lhs, rhs) = self.operands();

        let ordering = match lhs.resolve(row).compare(rhs.resolve(row)) {
            Some(ordering) => ordering,
            // null or mismatched kinds
            None => return Truth::Unknown,
        };

        Truth::from(match self {
            Self::Equal { .. } => ordering == Ordering::Equal,
            Self::NotEqual { .. } => ordering != Ordering::Equal,
            Self::LessThan { .. } => ordering == Ordering::Less,
            Self::LessThanOrEqual { .. } => ordering != Ordering::Greater,
            Self::GreaterThan { .. } => ordering == Ordering::Greater,
            Self::GreaterThanOrEqual { .. } => ordering != Ordering::Less,
        })
    }
}
