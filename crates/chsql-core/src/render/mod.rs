//! Expression compiler.
//!
//! [`render`] maps any [`Expr`] to its canonical SQL text. It is total and
//! pure: the node type is closed, so every value has exactly one
//! rendering, and rendering the same node twice yields the same string.
//!
//! There is no precedence table. Each node renders its children
//! recursively, and nesting is carried entirely by the forms that wrap
//! themselves in parentheses: AND, OR, arithmetic and NOT. Comparisons
//! never wrap themselves.
//!
//! # Example
//!
//! ```rust
//! use chsql_core::ast::Expr;
//! use chsql_core::render::render;
//!
//! let expr = Expr::field("age")
//!     .gt(18)
//!     .and(Expr::field("active").eq(true));
//!
//! assert_eq!(render(&expr), "(age > 18 AND active = true)");
//! ```

mod escape;
mod keywords;

pub use escape::{
    escape_identifier, escape_string, is_safe_identifier, needs_escaping, quote_string,
};
pub use keywords::{is_reserved_keyword, RESERVED_KEYWORDS};

use crate::ast::{Expr, Literal};

/// Renders an expression to SQL.
#[must_use]
pub fn render(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

/// Renders a literal value to SQL.
#[must_use]
pub fn render_literal(literal: &Literal) -> String {
    match literal {
        Literal::Integer(n) => n.to_string(),
        Literal::Float(f) => render_float(*f),
        Literal::String(s) => quote_string(s),
        Literal::Boolean(true) => String::from("true"),
        Literal::Boolean(false) => String::from("false"),
        Literal::Null => String::from("NULL"),
    }
}

/// Renders a float in its shortest round-tripping form, always with a
/// decimal point.
fn render_float(value: f64) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() { "inf" } else { "-inf" };
        return String::from(text);
    }
    // `Display` for f64 is shortest round-trip and never uses an exponent.
    let mut text = value.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

fn write_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Literal(literal) => out.push_str(&render_literal(literal)),
        Expr::Field(name) => out.push_str(&escape_identifier(name)),
        Expr::Binary { left, op, right } => {
            let wrap = op.self_wraps();
            if wrap {
                out.push('(');
            }
            write_expr(out, left);
            out.push(' ');
            out.push_str(op.as_str());
            out.push(' ');
            write_expr(out, right);
            if wrap {
                out.push(')');
            }
        }
        Expr::Not(inner) => {
            out.push_str("NOT (");
            write_expr(out, inner);
            out.push(')');
        }
        Expr::Count(arg) => {
            out.push_str("COUNT(");
            match arg {
                Some(arg) => write_expr(out, arg),
                None => out.push('*'),
            }
            out.push(')');
        }
        Expr::Aggregate { func, arg } => {
            out.push_str(func.as_str());
            out.push('(');
            write_expr(out, arg);
            out.push(')');
        }
        Expr::Function { name, args } => {
            out.push_str(name);
            out.push('(');
            write_list(out, args);
            out.push(')');
        }
        Expr::Array(items) => {
            out.push('[');
            write_list(out, items);
            out.push(']');
        }
        Expr::Tuple(items) => {
            out.push('(');
            write_list(out, items);
            out.push(')');
        }
        Expr::In { expr, list } => {
            write_expr(out, expr);
            out.push_str(" IN (");
            write_list(out, list);
            out.push(')');
        }
        Expr::Between { expr, low, high } => {
            write_expr(out, expr);
            out.push_str(" BETWEEN ");
            write_expr(out, low);
            out.push_str(" AND ");
            write_expr(out, high);
        }
        Expr::IsNull { expr, negated } => {
            write_expr(out, expr);
            out.push_str(if *negated { " IS NOT NULL" } else { " IS NULL" });
        }
        Expr::Case {
            subject,
            branches,
            default,
        } => {
            out.push_str("CASE");
            if let Some(subject) = subject {
                out.push(' ');
                write_expr(out, subject);
            }
            for (condition, result) in branches {
                out.push_str(" WHEN ");
                write_expr(out, condition);
                out.push_str(" THEN ");
                write_expr(out, result);
            }
            if let Some(default) = default {
                out.push_str(" ELSE ");
                write_expr(out, default);
            }
            out.push_str(" END");
        }
        Expr::Cast { expr, data_type } => {
            out.push_str("CAST(");
            write_expr(out, expr);
            out.push_str(" AS ");
            out.push_str(data_type);
            out.push(')');
        }
        Expr::Alias { expr, name } => {
            write_expr(out, expr);
            out.push_str(" AS ");
            out.push_str(&escape_identifier(name));
        }
    }
}

/// Writes items separated by `", "`.
fn write_list(out: &mut String, items: &[Expr]) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_expr(out, item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOp;

    #[test]
    fn test_render_literals() {
        assert_eq!(render(&Expr::int(42)), "42");
        assert_eq!(render(&Expr::int(-7)), "-7");
        assert_eq!(render(&Expr::int(i64::MIN)), "-9223372036854775808");
        assert_eq!(render(&Expr::boolean(true)), "true");
        assert_eq!(render(&Expr::boolean(false)), "false");
        assert_eq!(render(&Expr::null()), "NULL");
        assert_eq!(render(&Expr::string("hi")), "'hi'");
    }

    #[test]
    fn test_render_floats() {
        assert_eq!(render(&Expr::float(2.5)), "2.5");
        assert_eq!(render(&Expr::float(100.0)), "100.0");
        assert_eq!(render(&Expr::float(-0.125)), "-0.125");
        assert_eq!(render(&Expr::float(0.1)), "0.1");
        assert_eq!(render(&Expr::float(1e20)), "100000000000000000000.0");
        assert_eq!(render(&Expr::float(f64::NAN)), "nan");
        assert_eq!(render(&Expr::float(f64::INFINITY)), "inf");
        assert_eq!(render(&Expr::float(f64::NEG_INFINITY)), "-inf");
    }

    #[test]
    fn test_render_comparison_not_wrapped() {
        let expr = Expr::field("id").eq(1);
        assert_eq!(render(&expr), "id = 1");

        let expr = Expr::field("score").binary(BinaryOp::LtEq, 9.5);
        assert_eq!(render(&expr), "score <= 9.5");
    }

    #[test]
    fn test_render_arithmetic_wraps() {
        let expr = Expr::field("a") + Expr::field("b") * 2;
        assert_eq!(render(&expr), "(a + (b * 2))");

        let expr = (Expr::field("total") / Expr::field("n")).gt(10);
        assert_eq!(render(&expr), "(total / n) > 10");
    }

    #[test]
    fn test_render_logical() {
        let expr = Expr::field("a")
            .eq(1)
            .or(Expr::field("b").eq(2))
            .and(Expr::field("c").is_null());
        assert_eq!(render(&expr), "((a = 1 OR b = 2) AND c IS NULL)");

        let expr = !Expr::field("x").eq(1);
        assert_eq!(render(&expr), "NOT (x = 1)");

        let expr = !Expr::field("a").and(Expr::field("b"));
        assert_eq!(render(&expr), "NOT ((a AND b))");
    }

    #[test]
    fn test_render_aggregates() {
        assert_eq!(render(&Expr::count_all()), "COUNT(*)");
        assert_eq!(render(&Expr::count(Expr::field("id"))), "COUNT(id)");
        assert_eq!(render(&Expr::sum(Expr::field("bytes"))), "SUM(bytes)");
        assert_eq!(render(&Expr::avg(Expr::field("latency"))), "AVG(latency)");
        assert_eq!(render(&Expr::min(Expr::field("ts"))), "MIN(ts)");
        assert_eq!(render(&Expr::max(Expr::field("ts"))), "MAX(ts)");
    }

    #[test]
    fn test_render_function() {
        assert_eq!(render(&Expr::function("now", vec![])), "now()");
        let expr = Expr::function(
            "toStartOfInterval",
            vec![Expr::field("ts"), Expr::string("1 hour")],
        );
        assert_eq!(render(&expr), "toStartOfInterval(ts, '1 hour')");
    }

    #[test]
    fn test_render_collections() {
        assert_eq!(render(&Expr::Array(vec![])), "[]");
        assert_eq!(render(&Expr::Tuple(vec![])), "()");
        assert_eq!(render(&Expr::array([1, 2, 3])), "[1, 2, 3]");
        assert_eq!(render(&Expr::tuple(["a", "b"])), "('a', 'b')");
    }

    #[test]
    fn test_render_in_between_null() {
        let expr = Expr::field("status").in_list(["new", "open"]);
        assert_eq!(render(&expr), "status IN ('new', 'open')");

        let expr = Expr::field("id").in_list(Vec::<Expr>::new());
        assert_eq!(render(&expr), "id IN ()");

        let expr = Expr::field("age").between(18, 65);
        assert_eq!(render(&expr), "age BETWEEN 18 AND 65");

        assert_eq!(render(&Expr::field("email").is_null()), "email IS NULL");
        assert_eq!(
            render(&Expr::field("email").is_not_null()),
            "email IS NOT NULL"
        );
    }

    #[test]
    fn test_render_case() {
        let expr = Expr::Case {
            subject: None,
            branches: vec![(Expr::field("x").gt(0), Expr::string("pos"))],
            default: Some(Box::new(Expr::string("non-pos"))),
        };
        assert_eq!(
            render(&expr),
            "CASE WHEN x > 0 THEN 'pos' ELSE 'non-pos' END"
        );

        let expr = Expr::Case {
            subject: Some(Box::new(Expr::field("code"))),
            branches: vec![(Expr::int(1), Expr::string("a")), (Expr::int(2), Expr::string("b"))],
            default: None,
        };
        assert_eq!(render(&expr), "CASE code WHEN 1 THEN 'a' WHEN 2 THEN 'b' END");
    }

    #[test]
    fn test_render_cast_and_alias() {
        let expr = Expr::field("id").cast("String");
        assert_eq!(render(&expr), "CAST(id AS String)");

        let expr = Expr::count_all().alias("total");
        assert_eq!(render(&expr), "COUNT(*) AS total");

        let expr = Expr::field("ts").alias("from");
        assert_eq!(render(&expr), "ts AS `from`");
    }

    #[test]
    fn test_render_escaped_field() {
        assert_eq!(render(&Expr::field("order")), "`order`");
        assert_eq!(render(&Expr::field("my col")), "`my col`");
    }

    #[test]
    fn test_display_matches_render() {
        let expr = Expr::field("n") - 1;
        assert_eq!(expr.to_string(), render(&expr));
    }
}
