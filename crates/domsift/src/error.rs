// ABOUTME: Error types for query operations.
// ABOUTME: Provides the QueryError enum with the Selector variant.

use thiserror::Error;

/// Errors that can occur while querying a document.
///
/// No-match is not an error (queries return `None` or an empty `Vec`), and
/// parse diagnostics are collected on [`crate::Document`] instead of being
/// raised, so an invalid CSS selector is the only failure a query can
/// propagate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The CSS selector failed to compile.
    #[error("invalid CSS selector `{0}`")]
    Selector(String),
}

impl QueryError {
    /// Creates a Selector error for the given selector string.
    pub fn selector(css: impl Into<String>) -> Self {
        QueryError::Selector(css.into())
    }
}
