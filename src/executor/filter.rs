//! Filter executor: applies a compiled expression to every record of a
//! table, keeping the matches in their original order.

use crate::database::Table;
use crate::error::QueryResult;
use crate::expression::Expression;

/// Filters a table against a compiled WHERE expression.
pub struct Filter<'a> {
    expression: &'a Expression,
}

impl<'a> Filter<'a> {
    pub fn new(expression: &'a Expression) -> Self {
        Self { expression }
    }

    /// Produce the records matching the expression, preserving table order.
    ///
    /// The first evaluation error aborts the whole filter; a record is never
    /// silently skipped.
    pub fn apply(&self, table: &Table) -> QueryResult<Table> {
        let mut matched = Vec::new();
        for record in table.records() {
            if self.expression.eval(record)? {
                matched.push(record.clone());
            }
        }
        Ok(Table::from(matched))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{Record, Value};
    use crate::error::QueryError;
    use crate::expression::{ExpressionError, Operator};

    fn table() -> Table {
        (1..=4)
            .map(|id| {
                let mut record = Record::new();
                record.insert("id", Value::Integer(id));
                record
            })
            .collect()
    }

    #[test]
    fn test_filter_preserves_order() {
        let expr = Expression::binary(Operator::Gt, "id", Value::Integer(1));
        let result = Filter::new(&expr).apply(&table()).unwrap();

        let ids: Vec<&Value> = result.records().iter().map(|r| r.get("id").unwrap()).collect();
        assert_eq!(
            ids,
            vec![&Value::Integer(2), &Value::Integer(3), &Value::Integer(4)]
        );
    }

    #[test]
    fn test_filter_is_idempotent() {
        let expr = Expression::binary(Operator::Le, "id", Value::Integer(2));
        let filter = Filter::new(&expr);

        let once = filter.apply(&table()).unwrap();
        let twice = filter.apply(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_can_drop_everything() {
        let expr = Expression::binary(Operator::Gt, "id", Value::Integer(100));
        let result = Filter::new(&expr).apply(&table()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_missing_field_aborts_the_filter() {
        let expr = Expression::binary(Operator::Eq, "age", Value::Integer(30));
        let err = Filter::new(&expr).apply(&table()).unwrap_err();
        assert_eq!(
            err,
            QueryError::Expression(ExpressionError::MissingField("age".to_string()))
        );
    }
}
