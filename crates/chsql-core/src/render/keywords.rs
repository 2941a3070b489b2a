//! Reserved keywords of the target dialect.
//!
//! An identifier matching one of these (ignoring ASCII case) is always
//! rendered in backticks, even when its characters would be safe bare.

/// Clause, statement and type keywords, uppercase and sorted for
/// binary search.
pub const RESERVED_KEYWORDS: &[&str] = &[
    "ALL",
    "ALTER",
    "AND",
    "ANTI",
    "ANY",
    "ARRAY",
    "AS",
    "ASC",
    "ASOF",
    "ATTACH",
    "BETWEEN",
    "BOTH",
    "BY",
    "CASE",
    "CAST",
    "CHECK",
    "CLUSTER",
    "COLLATE",
    "COLUMN",
    "CONSTRAINT",
    "CREATE",
    "CROSS",
    "CUBE",
    "DATABASE",
    "DATE",
    "DATETIME",
    "DEFAULT",
    "DELETE",
    "DESC",
    "DESCRIBE",
    "DETACH",
    "DICTIONARY",
    "DISTINCT",
    "DROP",
    "ELSE",
    "END",
    "ENGINE",
    "EXCEPT",
    "EXISTS",
    "EXPLAIN",
    "FALSE",
    "FINAL",
    "FIRST",
    "FLOAT",
    "FOR",
    "FORMAT",
    "FROM",
    "FULL",
    "FUNCTION",
    "GLOBAL",
    "GRANT",
    "GROUP",
    "HAVING",
    "IF",
    "ILIKE",
    "IN",
    "INDEX",
    "INNER",
    "INSERT",
    "INT",
    "INTERSECT",
    "INTERVAL",
    "INTO",
    "IS",
    "JOIN",
    "KEY",
    "KILL",
    "LAST",
    "LEFT",
    "LIKE",
    "LIMIT",
    "LIVE",
    "LOCAL",
    "MATERIALIZED",
    "MODIFY",
    "NOT",
    "NULL",
    "NULLS",
    "OFFSET",
    "ON",
    "OPTIMIZE",
    "OR",
    "ORDER",
    "OUTER",
    "OUTFILE",
    "PARTITION",
    "PREWHERE",
    "PRIMARY",
    "RENAME",
    "REPLACE",
    "REVOKE",
    "RIGHT",
    "ROLLUP",
    "SAMPLE",
    "SELECT",
    "SEMI",
    "SET",
    "SETTINGS",
    "SHOW",
    "STRING",
    "SYSTEM",
    "TABLE",
    "TEMPORARY",
    "THEN",
    "TIES",
    "TO",
    "TOP",
    "TOTALS",
    "TRUE",
    "TRUNCATE",
    "TTL",
    "UNION",
    "UPDATE",
    "USE",
    "USING",
    "VALUES",
    "VIEW",
    "WATCH",
    "WHEN",
    "WHERE",
    "WINDOW",
    "WITH",
];

/// Returns true if `word` is a reserved keyword (case-insensitive).
#[must_use]
pub fn is_reserved_keyword(word: &str) -> bool {
    // Keywords are pure ASCII; anything else cannot match.
    if !word.is_ascii() {
        return false;
    }
    let upper = word.to_ascii_uppercase();
    RESERVED_KEYWORDS.binary_search(&upper.as_str()).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_sorted_and_unique() {
        assert!(RESERVED_KEYWORDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_keywords_uppercase() {
        for kw in RESERVED_KEYWORDS {
            assert_eq!(*kw, kw.to_ascii_uppercase());
        }
    }

    #[test]
    fn test_is_reserved_keyword() {
        assert!(is_reserved_keyword("select"));
        assert!(is_reserved_keyword("SELECT"));
        assert!(is_reserved_keyword("PreWhere"));
        assert!(is_reserved_keyword("date"));
        assert!(!is_reserved_keyword("users"));
        assert!(!is_reserved_keyword("selected"));
        assert!(!is_reserved_keyword(""));
        assert!(!is_reserved_keyword("sélect"));
    }
}
