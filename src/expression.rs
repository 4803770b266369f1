//! Boolean expression trees compiled from WHERE clauses.
//!
//! This module provides:
//! - The expression tree representation (literal, comparison, AND/OR)
//! - The comparison operator set and its typed semantics
//! - Evaluation of a tree against a single record

pub mod error;
pub mod expr;
pub mod operator;

pub use error::{ExpressionError, ExpressionResult};
pub use expr::{BoolOp, Expression};
pub use operator::Operator;
