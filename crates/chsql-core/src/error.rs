//! Error types for query rendering.

/// Reasons a [`Query`](crate::builder::Query) cannot be rendered.
///
/// Both are detected from the descriptor shape before any SQL is
/// produced, so no partial statement ever accompanies an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// No table was set (or the table name is empty).
    #[error("query has no FROM table")]
    MissingFrom,

    /// The SELECT list is empty.
    #[error("query has no SELECT expressions")]
    MissingSelect,
}

/// Result type for query rendering.
pub type Result<T> = std::result::Result<T, BuildError>;
