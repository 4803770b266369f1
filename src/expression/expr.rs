//! Expression tree definitions and evaluation.

use crate::database::{Record, Value};
use crate::expression::error::{ExpressionError, ExpressionResult};
use crate::expression::operator::Operator;

/// Boolean connectives for n-ary nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOp {
    And,
    Or,
}

impl BoolOp {
    fn fold(&self, acc: bool, next: bool) -> bool {
        match self {
            BoolOp::And => acc && next,
            BoolOp::Or => acc || next,
        }
    }
}

/// A compiled WHERE clause node.
///
/// Trees are immutable and side-effect-free to evaluate; the same tree may
/// be evaluated against many records and depends only on field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A bare literal; evaluates to the truthiness of the value.
    Literal(Value),

    /// A field-against-literal comparison.
    Binary {
        op: Operator,
        field: String,
        operand: Value,
    },

    /// AND/OR over an ordered list of sub-expressions.
    NAry {
        op: BoolOp,
        operands: Vec<Expression>,
    },
}

impl Expression {
    pub fn literal(value: Value) -> Self {
        Expression::Literal(value)
    }

    pub fn binary(op: Operator, field: impl Into<String>, operand: Value) -> Self {
        Expression::Binary {
            op,
            field: field.into(),
            operand,
        }
    }

    pub fn and(operands: Vec<Expression>) -> Self {
        Expression::NAry {
            op: BoolOp::And,
            operands,
        }
    }

    pub fn or(operands: Vec<Expression>) -> Self {
        Expression::NAry {
            op: BoolOp::Or,
            operands,
        }
    }

    /// Evaluate the tree against one record.
    ///
    /// N-ary operands are all evaluated before folding, so an error in any
    /// operand surfaces no matter what the others evaluate to.
    pub fn eval(&self, record: &Record) -> ExpressionResult<bool> {
        match self {
            Expression::Literal(value) => Ok(value.is_truthy()),

            Expression::Binary { op, field, operand } => {
                let actual = record
                    .get(field)
                    .ok_or_else(|| ExpressionError::MissingField(field.clone()))?;
                op.apply(actual, operand)
            }

            Expression::NAry { op, operands } => {
                let mut results = Vec::with_capacity(operands.len());
                for operand in operands {
                    results.push(operand.eval(record)?);
                }
                let mut results = results.into_iter();
                let first = results.next().ok_or(ExpressionError::EmptyOperands)?;
                Ok(results.fold(first, |acc, next| op.fold(acc, next)))
            }
        }
    }
}
