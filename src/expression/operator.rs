//! Comparison operator definitions and semantics.

use crate::database::Value;
use crate::expression::error::{ExpressionError, ExpressionResult};

/// Comparison operators usable in a WHERE leaf.
///
/// A closed enum rather than a symbol-keyed dispatch table: adding an
/// operator is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    /// Substring containment; surface syntax `LIKE`.
    Contains,
}

impl Operator {
    /// Apply the operator to a field value (left) and a literal operand
    /// (right).
    ///
    /// Ordering and equality are defined only between values of the same
    /// kind; anything else is a type mismatch. Contains requires a text
    /// left-hand side and renders the right-hand literal as text regardless
    /// of how it was coerced.
    pub fn apply(&self, left: &Value, right: &Value) -> ExpressionResult<bool> {
        match self {
            Operator::Contains => match left {
                Value::Text(haystack) => Ok(haystack.contains(&right.to_string())),
                Value::Integer(_) => Err(self.mismatch(left, right)),
            },
            _ => match (left, right) {
                (Value::Integer(l), Value::Integer(r)) => Ok(self.compare(l, r)),
                (Value::Text(l), Value::Text(r)) => Ok(self.compare(l.as_str(), r.as_str())),
                _ => Err(self.mismatch(left, right)),
            },
        }
    }

    fn compare<T: Ord + ?Sized>(&self, left: &T, right: &T) -> bool {
        match self {
            Operator::Lt => left < right,
            Operator::Le => left <= right,
            Operator::Gt => left > right,
            Operator::Ge => left >= right,
            Operator::Eq => left == right,
            Operator::Contains => unreachable!("Contains is handled in apply"),
        }
    }

    fn mismatch(&self, left: &Value, right: &Value) -> ExpressionError {
        ExpressionError::TypeMismatch {
            op: self.symbol(),
            left: left.kind(),
            right: right.kind(),
        }
    }

    /// Surface symbol of this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Eq => "=",
            Operator::Contains => "LIKE",
        }
    }
}
