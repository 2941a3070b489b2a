#![allow(dead_code)]

use chsql_core::ast::Expr;
use chsql_core::builder::Query;
use chsql_core::render::render;

/// Renders a descriptor, panicking with the error if it is rejected.
pub fn sql(query: &Query) -> String {
    query
        .to_sql()
        .unwrap_or_else(|e| panic!("Failed to render: {query:?}\nError: {e}"))
}

/// Asserts that `expr` renders to `expected`, and does so repeatedly.
pub fn assert_renders(expr: &Expr, expected: &str) {
    let first = render(expr);
    assert_eq!(first, expected, "Unexpected rendering of {expr:?}");
    assert_eq!(render(expr), first, "Rendering is not deterministic");
}

/// A base descriptor over `users` selecting `id`.
pub fn users() -> Query {
    Query::new().set_from("users").add_select(Expr::field("id"))
}
