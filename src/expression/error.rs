//! Error types for expression evaluation.

use thiserror::Error;

/// Errors that can occur while evaluating an expression against a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    /// An operator was applied to operand kinds it does not support.
    #[error("type mismatch: {op} is not defined for {left} and {right}")]
    TypeMismatch {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    /// A comparison referenced a field absent from the record.
    #[error("missing field: {0}")]
    MissingField(String),

    /// An AND/OR node was built with no operands.
    #[error("boolean connective requires at least one operand")]
    EmptyOperands,
}

/// Result type for expression evaluation.
pub type ExpressionResult<T> = Result<T, ExpressionError>;
