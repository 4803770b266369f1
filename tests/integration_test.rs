use memquery::database::{Database, Record, Table, Value};
use memquery::error::QueryError;
use memquery::expression::ExpressionError;
use memquery::query::Query;

fn record(pairs: &[(&str, Value)]) -> Record {
    let mut record = Record::new();
    for (name, value) in pairs {
        record.insert(*name, value.clone());
    }
    record
}

fn int(n: i64) -> Value {
    Value::Integer(n)
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn people_db() -> Database {
    let mut people = Table::new();
    people.push(record(&[("id", int(1)), ("name", text("Cam Saul"))]));
    people.push(record(&[("id", int(2)), ("name", text("Cam Era"))]));

    let mut db = Database::new();
    db.insert_table("people", people);
    db
}

fn birds_db() -> Database {
    let names = ["Tweety", "Sky", "Lucky", "Lucky Jr", "Petra", "Polly"];
    let mut birds = Table::new();
    for (i, name) in names.iter().enumerate() {
        birds.push(record(&[
            ("id", int(i as i64 + 1)),
            ("name", text(name)),
            ("owner_id", int(1)),
        ]));
    }

    let mut db = Database::new();
    db.insert_table("birds", birds);
    db
}

fn ids(table: &Table) -> Vec<i64> {
    table
        .records()
        .iter()
        .map(|r| match r.get("id").unwrap() {
            Value::Integer(n) => *n,
            other => panic!("unexpected id value {:?}", other),
        })
        .collect()
}

#[test]
fn select_star_returns_the_table_unchanged() {
    let db = people_db();
    let result = Query::new(&db).execute("SELECT * FROM people").unwrap();
    assert_eq!(&result, db.table("people").unwrap());
    assert_eq!(ids(&result), vec![1, 2]);
}

#[test]
fn where_equality_selects_one_record() {
    let db = people_db();
    let result = Query::new(&db)
        .execute("SELECT * FROM people WHERE id = 2")
        .unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(
        result.records()[0],
        record(&[("id", int(2)), ("name", text("Cam Era"))])
    );
}

#[test]
fn and_combines_conditions() {
    let db = birds_db();
    let result = Query::new(&db)
        .execute("SELECT * FROM birds WHERE owner_id = 1 AND id > 2")
        .unwrap();
    assert_eq!(ids(&result), vec![3, 4, 5, 6]);
}

#[test]
fn like_or_with_projection() {
    let db = birds_db();
    let result = Query::new(&db)
        .execute("SELECT id, name FROM birds WHERE name LIKE Lucky OR id = 2")
        .unwrap();

    // "Lucky" and "Lucky Jr" match the substring; id 2 matches the equality.
    assert_eq!(ids(&result), vec![2, 3, 4]);
    for rec in result.records() {
        let fields: Vec<&str> = rec.fields().map(|(n, _)| n).collect();
        assert_eq!(fields, vec!["id", "name"]);
    }
}

#[test]
fn unknown_table_is_reported() {
    let db = people_db();
    assert_eq!(
        Query::new(&db).execute("SELECT * FROM ghosts").unwrap_err(),
        QueryError::UnknownTable("ghosts".to_string())
    );
}

#[test]
fn filtering_is_idempotent() {
    let db = birds_db();
    let query = Query::new(&db);

    let once = query
        .execute("SELECT * FROM birds WHERE id > 2")
        .unwrap();

    let mut refiltered_db = Database::new();
    refiltered_db.insert_table("birds", once.clone());
    let twice = Query::new(&refiltered_db)
        .execute("SELECT * FROM birds WHERE id > 2")
        .unwrap();

    assert_eq!(once, twice);
}

#[test]
fn quoted_text_literals_may_contain_spaces() {
    let db = people_db();
    let result = Query::new(&db)
        .execute("SELECT * FROM people WHERE name = 'Cam Era'")
        .unwrap();
    assert_eq!(ids(&result), vec![2]);
}

#[test]
fn comparing_text_to_integer_is_a_type_mismatch() {
    let db = people_db();
    let err = Query::new(&db)
        .execute("SELECT * FROM people WHERE name > 5")
        .unwrap_err();
    assert!(matches!(
        err,
        QueryError::Expression(ExpressionError::TypeMismatch { .. })
    ));
}

#[test]
fn like_on_an_integer_field_is_a_type_mismatch() {
    let db = people_db();
    let err = Query::new(&db)
        .execute("SELECT * FROM people WHERE id LIKE 1")
        .unwrap_err();
    assert!(matches!(
        err,
        QueryError::Expression(ExpressionError::TypeMismatch { .. })
    ));
}

#[test]
fn missing_field_aborts_instead_of_skipping() {
    let db = people_db();
    let err = Query::new(&db)
        .execute("SELECT * FROM people WHERE age > 21")
        .unwrap_err();
    assert_eq!(
        err,
        QueryError::Expression(ExpressionError::MissingField("age".to_string()))
    );
}

#[test]
fn projecting_a_missing_field_fails() {
    let db = people_db();
    let err = Query::new(&db)
        .execute("SELECT id, age FROM people")
        .unwrap_err();
    assert_eq!(err, QueryError::MissingField("age".to_string()));
}

#[test]
fn malformed_where_clause_fails_before_evaluation() {
    let db = people_db();
    let query = Query::new(&db);
    for statement in [
        "SELECT * FROM people WHERE id =",
        "SELECT * FROM people WHERE id = 2 3",
        "SELECT * FROM people WHERE OR id = 2",
        "SELECT * FROM people WHERE id up 2",
    ] {
        assert!(
            matches!(
                query.execute(statement),
                Err(QueryError::MalformedExpression(_))
            ),
            "expected malformed-expression error for {:?}",
            statement
        );
    }
}

#[test]
fn or_binds_looser_than_and() {
    let db = birds_db();
    // Parsed as (id = 1 AND owner_id = 1) OR id = 6, not
    // id = 1 AND (owner_id = 1 OR id = 6).
    let result = Query::new(&db)
        .execute("SELECT * FROM birds WHERE id = 1 AND owner_id = 1 OR id = 6")
        .unwrap();
    assert_eq!(ids(&result), vec![1, 6]);
}
