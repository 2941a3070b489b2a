//! Expression construction helpers.

use crate::ast::{Expr, Literal};

/// Creates a column reference.
#[must_use]
pub fn col(name: &str) -> Expr {
    Expr::field(name)
}

/// Creates a literal from a Rust value.
///
/// ```rust
/// use chsql_core::builder::lit;
///
/// assert_eq!(lit("x").to_string(), "'x'");
/// assert_eq!(lit(3).to_string(), "3");
/// ```
#[must_use]
pub fn lit(value: impl Into<Literal>) -> Expr {
    Expr::Literal(value.into())
}

/// Incremental builder for CASE expressions.
#[derive(Debug, Clone)]
#[must_use = "call `end` or `otherwise` to obtain the expression"]
pub struct CaseBuilder {
    subject: Option<Expr>,
    branches: Vec<(Expr, Expr)>,
}

impl CaseBuilder {
    /// Adds a `WHEN condition THEN result` branch.
    pub fn when(mut self, condition: impl Into<Expr>, result: impl Into<Expr>) -> Self {
        self.branches.push((condition.into(), result.into()));
        self
    }

    /// Finishes the expression with an ELSE branch.
    #[must_use]
    pub fn otherwise(self, default: impl Into<Expr>) -> Expr {
        self.finish(Some(default.into()))
    }

    /// Finishes the expression without an ELSE branch.
    #[must_use]
    pub fn end(self) -> Expr {
        self.finish(None)
    }

    fn finish(self, default: Option<Expr>) -> Expr {
        Expr::Case {
            subject: self.subject.map(Box::new),
            branches: self.branches,
            default: default.map(Box::new),
        }
    }
}

impl Expr {
    /// Starts a searched CASE expression (`CASE WHEN cond THEN ...`).
    pub const fn case() -> CaseBuilder {
        CaseBuilder {
            subject: None,
            branches: Vec::new(),
        }
    }

    /// Starts a simple CASE expression over `subject`
    /// (`CASE subject WHEN value THEN ...`).
    pub fn case_of(subject: impl Into<Self>) -> CaseBuilder {
        CaseBuilder {
            subject: Some(subject.into()),
            branches: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_col() {
        assert_eq!(col("id"), Expr::Field(String::from("id")));
    }

    #[test]
    fn test_lit() {
        assert_eq!(lit(2.5), Expr::float(2.5));
        assert_eq!(lit(false), Expr::boolean(false));
    }

    #[test]
    fn test_case_builder() {
        let expr = Expr::case()
            .when(col("score").gt_eq(90), "A")
            .when(col("score").gt_eq(80), "B")
            .otherwise("C");
        assert_eq!(
            expr.to_string(),
            "CASE WHEN score >= 90 THEN 'A' WHEN score >= 80 THEN 'B' ELSE 'C' END"
        );

        let expr = Expr::case_of(col("level")).when(1, "low").end();
        assert_eq!(expr.to_string(), "CASE level WHEN 1 THEN 'low' END");
    }
}
