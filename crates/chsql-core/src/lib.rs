//! # chsql-core
//!
//! A typed SQL expression compiler and SELECT builder for ClickHouse.
//!
//! This crate provides:
//! - A closed expression AST ([`ast::Expr`]) for query fragments
//! - A deterministic renderer ([`render::render`]) with identifier and
//!   string-literal escaping
//! - An immutable query descriptor ([`builder::Query`]) whose
//!   [`to_sql`](builder::Query::to_sql) validates and assembles the statement
//!
//! All values are inlined as escaped literals; there is no parameter
//! binding.
//!
//! ```rust
//! use chsql_core::builder::{col, Query};
//!
//! let sql = Query::new()
//!     .set_from("events")
//!     .add_select(col("user_id"))
//!     .add_where(col("kind").eq("it's"))
//!     .set_limit(5)
//!     .to_sql()
//!     .unwrap();
//!
//! assert_eq!(sql, "SELECT user_id FROM events WHERE kind = 'it\\'s' LIMIT 5");
//! ```
//!
//! A descriptor without a table or SELECT list is still a valid value;
//! only rendering rejects it:
//!
//! ```rust
//! use chsql_core::builder::{col, Query};
//! use chsql_core::BuildError;
//!
//! let err = Query::new().add_select(col("id")).to_sql().unwrap_err();
//! assert_eq!(err, BuildError::MissingFrom);
//! ```

pub mod ast;
pub mod builder;
pub mod error;
pub mod render;

pub use ast::{Expr, Literal, OrderDirection};
pub use builder::{col, lit, Query};
pub use error::{BuildError, Result};
pub use render::render;
