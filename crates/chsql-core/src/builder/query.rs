//! SELECT statement descriptor.
//!
//! A [`Query`] is a plain value holding every clause slot of a SELECT
//! statement. Builder methods take the descriptor by value and hand back
//! the updated one, so a descriptor never changes behind a caller's back;
//! clone it to branch off variants of the same base query.
//!
//! Nothing is validated while building. [`Query::to_sql`] is the single
//! gate: it rejects a descriptor without a table or without SELECT
//! expressions, and otherwise assembles the clauses in a fixed order no
//! matter which order the builder methods were called in.

use tracing::debug;

use crate::ast::{BinaryOp, Expr, OrderBy, OrderDirection};
use crate::error::{BuildError, Result};
use crate::render::{escape_identifier, render};

/// A SELECT statement descriptor.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Query {
    table: Option<String>,
    select: Vec<Expr>,
    #[cfg_attr(feature = "serde", serde(rename = "where"))]
    where_clause: Vec<Expr>,
    group_by: Vec<Expr>,
    having: Vec<Expr>,
    order_by: Vec<OrderBy>,
    limit: Option<u64>,
    offset: Option<u64>,
    distinct: bool,
}

impl Query {
    /// Creates an empty descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the table to select from, replacing any previous one.
    #[must_use]
    pub fn set_from(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Appends an expression to the SELECT list.
    #[must_use]
    pub fn add_select(mut self, expr: Expr) -> Self {
        self.select.push(expr);
        self
    }

    /// Appends several expressions to the SELECT list, in order.
    #[must_use]
    pub fn add_selects(mut self, exprs: impl IntoIterator<Item = Expr>) -> Self {
        self.select.extend(exprs);
        self
    }

    /// Appends a WHERE condition. Conditions are AND-combined.
    #[must_use]
    pub fn add_where(mut self, condition: Expr) -> Self {
        self.where_clause.push(condition);
        self
    }

    /// Appends a GROUP BY expression.
    #[must_use]
    pub fn add_group_by(mut self, expr: Expr) -> Self {
        self.group_by.push(expr);
        self
    }

    /// Appends several GROUP BY expressions, in order.
    #[must_use]
    pub fn add_group_bys(mut self, exprs: impl IntoIterator<Item = Expr>) -> Self {
        self.group_by.extend(exprs);
        self
    }

    /// Appends a HAVING condition. Conditions are AND-combined.
    #[must_use]
    pub fn add_having(mut self, condition: Expr) -> Self {
        self.having.push(condition);
        self
    }

    /// Appends an ORDER BY entry.
    #[must_use]
    pub fn add_order_by(mut self, expr: Expr, direction: OrderDirection) -> Self {
        self.order_by.push(OrderBy::new(expr, direction));
        self
    }

    /// Sets the LIMIT count.
    #[must_use]
    pub const fn set_limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Sets the OFFSET count.
    #[must_use]
    pub const fn set_offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Sets or clears DISTINCT.
    #[must_use]
    pub const fn set_distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    /// The table name, if set.
    #[must_use]
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// The SELECT list.
    #[must_use]
    pub fn selects(&self) -> &[Expr] {
        &self.select
    }

    /// The WHERE conditions, before AND-combination.
    #[must_use]
    pub fn wheres(&self) -> &[Expr] {
        &self.where_clause
    }

    /// The GROUP BY list.
    #[must_use]
    pub fn group_bys(&self) -> &[Expr] {
        &self.group_by
    }

    /// The HAVING conditions, before AND-combination.
    #[must_use]
    pub fn havings(&self) -> &[Expr] {
        &self.having
    }

    /// The ORDER BY entries.
    #[must_use]
    pub fn order_bys(&self) -> &[OrderBy] {
        &self.order_by
    }

    /// The LIMIT count, if set.
    #[must_use]
    pub const fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// The OFFSET count, if set.
    #[must_use]
    pub const fn offset(&self) -> Option<u64> {
        self.offset
    }

    /// Whether DISTINCT is set.
    #[must_use]
    pub const fn is_distinct(&self) -> bool {
        self.distinct
    }

    /// Renders the statement.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingFrom`] if no (non-empty) table is set,
    /// checked first, then [`BuildError::MissingSelect`] if the SELECT list
    /// is empty.
    pub fn to_sql(&self) -> Result<String> {
        let Some(table) = self.table.as_deref().filter(|t| !t.is_empty()) else {
            debug!("rejecting query without FROM table");
            return Err(BuildError::MissingFrom);
        };
        if self.select.is_empty() {
            debug!(table, "rejecting query without SELECT expressions");
            return Err(BuildError::MissingSelect);
        }

        let mut sql = String::from("SELECT ");

        if self.distinct {
            sql.push_str("DISTINCT ");
        }

        sql.push_str(&join(&self.select));

        sql.push_str(" FROM ");
        sql.push_str(&escape_identifier(table));

        if let Some(condition) = conjunction(&self.where_clause) {
            sql.push_str(" WHERE ");
            sql.push_str(&render(&condition));
        }

        if !self.group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&join(&self.group_by));
        }

        if let Some(condition) = conjunction(&self.having) {
            sql.push_str(" HAVING ");
            sql.push_str(&render(&condition));
        }

        if !self.order_by.is_empty() {
            let entries: Vec<String> = self
                .order_by
                .iter()
                .map(|entry| format!("{} {}", render(&entry.expr), entry.direction.as_str()))
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&entries.join(", "));
        }

        if let Some(n) = self.limit {
            sql.push_str(&format!(" LIMIT {n}"));
        }

        if let Some(n) = self.offset {
            sql.push_str(&format!(" OFFSET {n}"));
        }

        debug!(%sql, "rendered query");
        Ok(sql)
    }
}

/// Left-folds conditions into a binary AND tree.
///
/// Returns `None` for an empty list and the sole condition unchanged for a
/// single-element list. For `[c1, c2, c3]` the result is
/// `AND(AND(c1, c2), c3)`, which renders as `((c1 AND c2) AND c3)`.
#[must_use]
pub fn conjunction(conditions: &[Expr]) -> Option<Expr> {
    let (first, rest) = conditions.split_first()?;
    Some(
        rest.iter()
            .cloned()
            .fold(first.clone(), |acc, next| acc.binary(BinaryOp::And, next)),
    )
}

fn join(exprs: &[Expr]) -> String {
    exprs.iter().map(render).collect::<Vec<_>>().join(", ")
}
