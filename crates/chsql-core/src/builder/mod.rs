//! SELECT query builder.
//!
//! # Example
//!
//! ```rust
//! use chsql_core::ast::OrderDirection;
//! use chsql_core::builder::{col, Query};
//!
//! let sql = Query::new()
//!     .set_from("users")
//!     .add_select(col("id"))
//!     .add_select(col("name"))
//!     .add_where(col("active").eq(true))
//!     .add_order_by(col("name"), OrderDirection::Asc)
//!     .to_sql()
//!     .unwrap();
//!
//! assert_eq!(sql, "SELECT id, name FROM users WHERE active = true ORDER BY name ASC");
//! ```

mod expr;
mod query;

pub use expr::{col, lit, CaseBuilder};
pub use query::{conjunction, Query};
