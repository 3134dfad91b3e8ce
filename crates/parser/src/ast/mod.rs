//! The unbound syntax tree of a WHERE clause. Column names are kept exactly as
//! written; resolving them against a dataset is the binder's job.
use {
    crate::{
        common::Spanned,
        lexer::{Keyword, Token},
    },
    def::Value,
    std::fmt::{Display, Formatter},
};

pub type Identifier = Spanned<String>;

#[derive(Debug, PartialEq, Clone)]
pub enum Operand {
    Column(Identifier),
    Literal(Spanned<Value>),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Comparison {
        op: ComparisonOperator,
        lhs: Operand,
        rhs: Operand,
    },
    InList {
        column: Identifier,
        negated: bool,
        list: Vec<Spanned<Value>>,
    },
    IsNull {
        column: Identifier,
        negated: bool,
    },
    Operation(Operation),
}

impl From<Operation> for Expression {
    fn from(op: Operation) -> Self {
        Self::Operation(op)
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ComparisonOperator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl ComparisonOperator {
    pub(crate) fn from_token(token: &Token) -> Option<Self> {
        Some(match token {
            Token::Equal | Token::Keyword(Keyword::EQ) => Self::Equal,
            Token::NotEqual | Token::Keyword(Keyword::NE) => Self::NotEqual,
            Token::GreaterThan | Token::Keyword(Keyword::GT) => Self::GreaterThan,
            Token::GreaterThanOrEqual | Token::Keyword(Keyword::GE) => Self::GreaterThanOrEqual,
            Token::LessThan | Token::Keyword(Keyword::LT) => Self::LessThan,
            Token::LessThanOrEqual | Token::Keyword(Keyword::LE) => Self::LessThanOrEqual,
            _ => return None,
        })
    }
}

impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Equal => "=",
                Self::NotEqual => "<>",
                Self::GreaterThan => ">",
                Self::GreaterThanOrEqual => ">=",
                Self::LessThan => "<",
                Self::LessThanOrEqual => "<=",
            }
        )
    }
}

pub(crate) trait Operator: Sized {
    /// Looks up the corresponding operator for a token, if one exists
    fn from(token: &Token) -> Option<Self>;

    /// Returns the operator's associativity
    fn assoc(&self) -> u8;

    /// Returns the operator's precedence
    fn prec(&self) -> u8;
}

macro_rules! op_variants {
    ($((unary, $($uop:ident)*))* $((binary, $($bop:ident)*))*) => {
        #[derive(Debug, PartialEq, Clone)]
        pub enum Operation {
            $($($uop(Box<Expression>),)*)*
            $($($bop(Box<Expression>, Box<Expression>),)*)*
        }
    }
}

macro_rules! build_expr {
    (unary { $($op:ident)* }) => {
        pub fn build_expr(&self, expr: Expression) -> Expression {
            let expr = Box::new(expr);

            match self {
                $( Self::$op => Operation::$op(expr), )*
            }
            .into()
        }
    };
    (binary { $($op:ident)* }) => {
        pub fn build_expr(&self, lhs: Expression, rhs: Expression) -> Expression {
            let (lhs, rhs) = (Box::new(lhs), Box::new(rhs));

            match self {
                $( Self::$op => Operation::$op(lhs, rhs), )*
            }
            .into()
        }
    };
}

macro_rules! operations {
    {
        $(
            $ty:ident $id:ident {
                $( ($op:ident, ($token:pat), $prec:literal, $assoc:literal), )*
            }
        )*
    }
    => {
        op_variants!($(($ty, $($op)*))*);

        $(
            #[derive(Debug, PartialEq, Clone, Copy)]
            pub enum $id {
                $( $op, )*
            }

            impl $id {
                build_expr!($ty {$($op)*});
            }

            impl Operator for $id {
                fn from(token: &Token) -> Option<Self> {
                    Some(match token {
                        $( $token => Self::$op, )*
                        _ => return None,
                    })
                }

                fn assoc(&self) -> u8 {
                    match self {
                        $( Self::$op => $assoc, )*
                    }
                }

                fn prec(&self) -> u8 {
                    match self {
                        $( Self::$op => $prec, )*
                    }
                }
            }
        )*
    }
}

// NOT binds tighter than AND, which binds tighter than OR. Predicates
// (comparison, IN, IS) are atoms and bind tightest of all.
operations!(
    unary PrefixOperator {
        (Not, (Token::Keyword(Keyword::NOT)), 3, 1),
    }

    binary InfixOperator {
        (And, (Token::Keyword(Keyword::AND) | Token::Ampersand), 2, 1),
        (Or, (Token::Keyword(Keyword::OR) | Token::Pipe), 1, 1),
    }
);

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Column(Spanned(name, _)) => {
                let mut chars = name.chars();
                let bare = chars.next().map_or(false, |c| c.is_alphabetic() || c == '_')
                    && chars.all(|c| c.is_alphanumeric() || c == '_')
                    && name.parse::<Keyword>().is_err();

                if bare {
                    write!(f, "{}", name)
                } else {
                    write!(f, "'{}'n", name.replace('\'', "''"))
                }
            }
            Self::Literal(value) => write!(f, "{}", value),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Comparison { op, lhs, rhs } => write!(f, "{} {} {}", lhs, op, rhs),
            Self::InList {
                column,
                negated,
                list,
            } => {
                let list = list.iter().map(ToString::to_string).collect::<Vec<_>>();
                let not = if *negated { " NOT" } else { "" };
                write!(f, "{}{} IN ({})", column, not, list.join(", "))
            }
            Self::IsNull { column, negated } => {
                let not = if *negated { " NOT" } else { "" };
                write!(f, "{} IS{} NULL", column, not)
            }
            Self::Operation(Operation::Not(expr)) => write!(f, "NOT ({})", expr),
            Self::Operation(Operation::And(lhs, rhs)) => write!(f, "({}) AND ({})", lhs, rhs),
            Self::Operation(Operation::Or(lhs, rhs)) => write!(f, "({}) OR ({})", lhs, rhs),
        }
    }
}
