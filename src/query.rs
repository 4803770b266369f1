//! Query orchestration: parse the statement, resolve the table, filter,
//! project.

use crate::database::{Database, Table};
use crate::error::{QueryError, QueryResult};
use crate::executor::Filter;
use crate::sql::parse_select;

/// Runs SELECT statements against a database.
///
/// Holds no state between invocations; expression trees are compiled fresh
/// for every statement and never cached.
pub struct Query<'a> {
    db: &'a Database,
}

impl<'a> Query<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Execute one `SELECT <fields> FROM <table> [WHERE <expr>]` statement.
    pub fn execute(&self, statement: &str) -> QueryResult<Table> {
        let select = parse_select(statement)?;

        let table = self
            .db
            .table(&select.table)
            .ok_or_else(|| QueryError::UnknownTable(select.table.clone()))?;

        let filtered = match &select.where_clause {
            Some(expression) => Filter::new(expression).apply(table)?,
            None => table.clone(),
        };

        select.projection.apply(&filtered)
    }
}
