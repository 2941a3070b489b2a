//! Expression AST types.

use std::fmt;
use std::ops;

use super::literal::Literal;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum BinaryOp {
    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Returns true for `=`, `!=`, `<`, `<=`, `>`, `>=`.
    #[must_use]
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Eq | Self::NotEq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq
        )
    }

    /// Returns true for `AND` and `OR`.
    #[must_use]
    pub const fn is_logical(&self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// Returns true for `+`, `-`, `*`, `/`.
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }

    /// Whether a binary node with this operator renders inside its own
    /// pair of parentheses.
    ///
    /// Logical and arithmetic forms always wrap themselves; comparisons
    /// never do. The renderer has no precedence table, so this is the
    /// only thing that decides nesting.
    #[must_use]
    pub const fn self_wraps(&self) -> bool {
        !self.is_comparison()
    }
}

/// Single-argument aggregate functions.
///
/// `COUNT` is modelled separately by [`Expr::Count`] because its argument
/// is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum AggregateFunc {
    Sum,
    Avg,
    Min,
    Max,
}

impl AggregateFunc {
    /// Returns the SQL function name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Min => "MIN",
            Self::Max => "MAX",
        }
    }
}

/// An SQL expression.
///
/// The variant set is closed: the renderer matches on it exhaustively.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A column or other identifier reference.
    Field(String),

    /// A comparison, logical or arithmetic binary expression.
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: BinaryOp,
        /// Right operand.
        right: Box<Expr>,
    },

    /// Logical negation.
    Not(Box<Expr>),

    /// `COUNT(*)` when the argument is absent, `COUNT(expr)` otherwise.
    Count(Option<Box<Expr>>),

    /// SUM, AVG, MIN or MAX over one argument.
    Aggregate {
        /// The aggregate function.
        func: AggregateFunc,
        /// The aggregated expression.
        arg: Box<Expr>,
    },

    /// A named function call.
    Function {
        /// The function name, emitted verbatim.
        name: String,
        /// The arguments, in call order.
        args: Vec<Expr>,
    },

    /// An array literal: `[a, b]`.
    Array(Vec<Expr>),

    /// A tuple literal: `(a, b)`.
    Tuple(Vec<Expr>),

    /// IN expression.
    In {
        /// The expression to check.
        expr: Box<Expr>,
        /// The candidate values.
        list: Vec<Expr>,
    },

    /// BETWEEN expression.
    Between {
        /// The expression to check.
        expr: Box<Expr>,
        /// Lower bound.
        low: Box<Expr>,
        /// Upper bound.
        high: Box<Expr>,
    },

    /// IS NULL expression.
    IsNull {
        /// The expression to check.
        expr: Box<Expr>,
        /// Whether this is IS NOT NULL.
        negated: bool,
    },

    /// CASE expression.
    Case {
        /// The operand (if any).
        subject: Option<Box<Expr>>,
        /// WHEN/THEN pairs, in order.
        branches: Vec<(Expr, Expr)>,
        /// ELSE result.
        default: Option<Box<Expr>>,
    },

    /// CAST expression.
    Cast {
        /// Expression to cast.
        expr: Box<Expr>,
        /// Target type, emitted verbatim (e.g. `Nullable(UInt64)`).
        data_type: String,
    },

    /// An expression with a result alias.
    Alias {
        /// The aliased expression.
        expr: Box<Expr>,
        /// The alias name.
        name: String,
    },
}

impl Expr {
    /// Creates a new column reference.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// Creates a new integer literal.
    #[must_use]
    pub const fn int(value: i64) -> Self {
        Self::Literal(Literal::Integer(value))
    }

    /// Creates a new float literal.
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::Literal(Literal::Float(value))
    }

    /// Creates a new string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::String(value.into()))
    }

    /// Creates a new boolean literal.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Literal(Literal::Boolean(value))
    }

    /// Creates a NULL literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    /// Creates a function call.
    #[must_use]
    pub fn function(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Function {
            name: name.into(),
            args,
        }
    }

    /// Creates an array literal.
    #[must_use]
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Creates a tuple literal.
    #[must_use]
    pub fn tuple<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Creates `COUNT(*)`.
    #[must_use]
    pub const fn count_all() -> Self {
        Self::Count(None)
    }

    /// Creates `COUNT(expr)`.
    #[must_use]
    pub fn count(expr: impl Into<Self>) -> Self {
        Self::Count(Some(Box::new(expr.into())))
    }

    /// Creates a single-argument aggregate.
    #[must_use]
    pub fn aggregate(func: AggregateFunc, arg: impl Into<Self>) -> Self {
        Self::Aggregate {
            func,
            arg: Box::new(arg.into()),
        }
    }

    /// Creates `SUM(expr)`.
    #[must_use]
    pub fn sum(arg: impl Into<Self>) -> Self {
        Self::aggregate(AggregateFunc::Sum, arg)
    }

    /// Creates `AVG(expr)`.
    #[must_use]
    pub fn avg(arg: impl Into<Self>) -> Self {
        Self::aggregate(AggregateFunc::Avg, arg)
    }

    /// Creates `MIN(expr)`.
    #[must_use]
    pub fn min(arg: impl Into<Self>) -> Self {
        Self::aggregate(AggregateFunc::Min, arg)
    }

    /// Creates `MAX(expr)`.
    #[must_use]
    pub fn max(arg: impl Into<Self>) -> Self {
        Self::aggregate(AggregateFunc::Max, arg)
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: impl Into<Self>) -> Self {
        Self::Binary {
            left: Box::new(self),
            op,
            right: Box::new(right.into()),
        }
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Eq, right)
    }

    /// Creates an inequality expression.
    #[must_use]
    pub fn not_eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::NotEq, right)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Lt, right)
    }

    /// Creates a less-than-or-equal expression.
    #[must_use]
    pub fn lt_eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::LtEq, right)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Gt, right)
    }

    /// Creates a greater-than-or-equal expression.
    #[must_use]
    pub fn gt_eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::GtEq, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Or, right)
    }

    /// Creates a NOT expression. Same as the `!` operator.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(self) -> Self {
        Self::IsNull {
            expr: Box::new(self),
            negated: false,
        }
    }

    /// Creates an IS NOT NULL expression.
    #[must_use]
    pub fn is_not_null(self) -> Self {
        Self::IsNull {
            expr: Box::new(self),
            negated: true,
        }
    }

    /// Creates a BETWEEN expression.
    #[must_use]
    pub fn between(self, low: impl Into<Self>, high: impl Into<Self>) -> Self {
        Self::Between {
            expr: Box::new(self),
            low: Box::new(low.into()),
            high: Box::new(high.into()),
        }
    }

    /// Creates an IN expression.
    #[must_use]
    pub fn in_list<I, T>(self, list: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::In {
            expr: Box::new(self),
            list: list.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a CAST expression. The type name is not validated.
    #[must_use]
    pub fn cast(self, data_type: impl Into<String>) -> Self {
        Self::Cast {
            expr: Box::new(self),
            data_type: data_type.into(),
        }
    }

    /// Attaches a result alias.
    #[must_use]
    pub fn alias(self, name: impl Into<String>) -> Self {
        Self::Alias {
            expr: Box::new(self),
            name: name.into(),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render(self))
    }
}

impl ops::Not for Expr {
    type Output = Self;

    fn not(self) -> Self {
        Self::not(self)
    }
}

macro_rules! impl_arithmetic {
    ($($trait:ident :: $method:ident => $op:ident),* $(,)?) => {
        $(
            impl<T: Into<Expr>> ops::$trait<T> for Expr {
                type Output = Self;

                fn $method(self, rhs: T) -> Self {
                    self.binary(BinaryOp::$op, rhs)
                }
            }
        )*
    };
}

impl_arithmetic!(Add::add => Add, Sub::sub => Sub, Mul::mul => Mul, Div::div => Div);
