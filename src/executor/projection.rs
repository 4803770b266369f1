//! Projection: restricting records to a chosen set of fields.

use crate::database::{Record, Table};
use crate::error::{QueryError, QueryResult};

/// The field list of a SELECT statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// `*`: every field of every record, unchanged.
    All,
    /// An explicit field list; output fields appear in the listed order.
    Fields(Vec<String>),
}

impl Projection {
    /// Apply the projection to a table of filtered records.
    pub fn apply(&self, table: &Table) -> QueryResult<Table> {
        match self {
            Projection::All => Ok(table.clone()),
            Projection::Fields(names) => {
                let mut records = Vec::with_capacity(table.len());
                for record in table.records() {
                    records.push(project_record(record, names)?);
                }
                Ok(Table::from(records))
            }
        }
    }
}

fn project_record(record: &Record, names: &[String]) -> QueryResult<Record> {
    let mut projected = Record::new();
    for name in names {
        let value = record
            .get(name)
            .ok_or_else(|| QueryError::MissingField(name.clone()))?;
        projected.insert(name.clone(), value.clone());
    }
    Ok(projected)
}
