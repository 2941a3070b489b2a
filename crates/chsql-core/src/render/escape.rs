//! String-literal and identifier escaping.

use super::keywords::is_reserved_keyword;

/// Escapes the body of a single-quoted string literal.
///
/// Backslash, single quote, newline, carriage return and tab are replaced
/// by their backslash escapes in a single pass; every other character is
/// copied through.
#[must_use]
pub fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders a quoted string literal.
#[must_use]
pub fn quote_string(value: &str) -> String {
    format!("'{}'", escape_string(value))
}

/// Returns true if `name` matches `[A-Za-z_][A-Za-z0-9_]*`.
#[must_use]
pub fn is_safe_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

/// Returns true if `name` must be wrapped in backticks.
#[must_use]
pub fn needs_escaping(name: &str) -> bool {
    !is_safe_identifier(name) || is_reserved_keyword(name)
}

/// Renders an identifier, backticking it only when required.
#[must_use]
pub fn escape_identifier(name: &str) -> String {
    if needs_escaping(name) {
        format!("`{}`", name.replace('`', "``"))
    } else {
        String::from(name)
    }
}
