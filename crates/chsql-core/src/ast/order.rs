//! ORDER BY direction.

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// An ORDER BY clause entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderBy {
    /// The expression to order by.
    pub expr: super::Expr,
    /// The direction (ASC or DESC).
    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: OrderDirection,
}

impl OrderBy {
    /// Creates a new ORDER BY entry.
    #[must_use]
    pub const fn new(expr: super::Expr, direction: OrderDirection) -> Self {
        Self { expr, direction }
    }
}
