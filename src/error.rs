//! Crate-level error types.

use crate::expression::ExpressionError;
use thiserror::Error;

/// Errors reported to the caller of a query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The FROM clause names a table absent from the database.
    #[error("unknown table: {0}")]
    UnknownTable(String),

    /// The statement or WHERE clause does not follow the grammar.
    #[error("malformed expression: {0}")]
    MalformedExpression(String),

    /// A projected field is absent from a record.
    #[error("missing field: {0}")]
    MissingField(String),

    /// Evaluation of a compiled expression failed.
    #[error(transparent)]
    Expression(#[from] ExpressionError),
}

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;
