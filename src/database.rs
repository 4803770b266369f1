//! Core data model: values, records, tables, and the database.

use std::collections::HashMap;
use std::fmt;

/// A typed scalar stored in a record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Text(String),
}

impl Value {
    /// Coerce a raw token into a value: integer if it parses as one, text
    /// otherwise. Applied once per literal and pure.
    pub fn coerce(token: &str) -> Self {
        match token.parse::<i64>() {
            Ok(n) => Value::Integer(n),
            Err(_) => Value::Text(token.to_string()),
        }
    }

    /// Truthiness of a bare literal: non-zero integer or non-empty text.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Integer(n) => *n != 0,
            Value::Text(s) => !s.is_empty(),
        }
    }

    /// Name of the value's kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Text(_) => "text",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One row: a mapping from field name to value.
///
/// Fields keep insertion order so projections come out in the order the
/// query listed them. Lookup is a linear scan; records are small.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Set a field, replacing any existing value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match value {
                Value::Text(s) => write!(f, "{}: \"{}\"", name, s)?,
                Value::Integer(n) => write!(f, "{}: {}", name, n)?,
            }
        }
        write!(f, "}}")
    }
}

/// An ordered collection of records. Order survives filtering and
/// projection but carries no other meaning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Record>> for Table {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// A set of named tables. Read-only from the engine's perspective.
#[derive(Debug, Clone, Default)]
pub struct Database {
    tables: HashMap<String, Table>,
}

impl Database {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    pub fn insert_table(&mut self, name: impl Into<String>, table: Table) {
        self.tables.insert(name.into(), table);
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(|n| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce() {
        assert_eq!(Value::coerce("42"), Value::Integer(42));
        assert_eq!(Value::coerce("-7"), Value::Integer(-7));
        assert_eq!(Value::coerce("0"), Value::Integer(0));
        assert_eq!(Value::coerce("Lucky"), Value::Text("Lucky".to_string()));
        assert_eq!(Value::coerce("4x2"), Value::Text("4x2".to_string()));
        assert_eq!(Value::coerce(""), Value::Text(String::new()));
    }

    #[test]
    fn test_truthiness() {
        assert!(Value::Integer(1).is_truthy());
        assert!(Value::Integer(-1).is_truthy());
        assert!(!Value::Integer(0).is_truthy());
        assert!(Value::Text("x".to_string()).is_truthy());
        assert!(!Value::Text(String::new()).is_truthy());
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Integer(-3).to_string(), "-3");
        assert_eq!(Value::Text("Cam Saul".to_string()).to_string(), "Cam Saul");
    }

    #[test]
    fn test_record_insert_and_get() {
        let mut record = Record::new();
        record.insert("id", Value::Integer(1));
        record.insert("name", Value::Text("Cam Saul".to_string()));

        assert_eq!(record.get("id"), Some(&Value::Integer(1)));
        assert_eq!(
            record.get("name"),
            Some(&Value::Text("Cam Saul".to_string()))
        );
        assert_eq!(record.get("age"), None);
        assert_eq!(record.len(), 2);

        // Re-inserting replaces in place, keeping position
        record.insert("id", Value::Integer(9));
        assert_eq!(record.get("id"), Some(&Value::Integer(9)));
        assert_eq!(record.len(), 2);
        let names: Vec<&str> = record.fields().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["id", "name"]);
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let record: Record = vec![
            ("b".to_string(), Value::Integer(2)),
            ("a".to_string(), Value::Integer(1)),
            ("c".to_string(), Value::Integer(3)),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = record.fields().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_record_display() {
        let mut record = Record::new();
        record.insert("id", Value::Integer(2));
        record.insert("name", Value::Text("Cam Era".to_string()));
        assert_eq!(record.to_string(), "{id: 2, name: \"Cam Era\"}");
    }

    #[test]
    fn test_database_lookup() {
        let mut db = Database::new();
        let mut table = Table::new();
        table.push(Record::new());
        db.insert_table("people", table);

        assert!(db.table("people").is_some());
        assert!(db.table("ghosts").is_none());
        assert_eq!(db.len(), 1);
    }
}
