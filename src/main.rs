//! memquery - run SELECT statements against an in-memory database loaded
//! from a JSON file.

use anyhow::{bail, Context, Result};
use clap::Parser;
use memquery::database::{Database, Record, Table, Value};
use memquery::query::Query;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Run SELECT queries against an in-memory database loaded from JSON
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Database file: a JSON object mapping table names to arrays of flat records
    database: PathBuf,

    /// Run a single statement and exit instead of reading from stdin
    #[arg(short, long)]
    query: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let text = std::fs::read_to_string(&args.database)
        .with_context(|| format!("Failed to read {}", args.database.display()))?;
    let db = load_database(&text)
        .with_context(|| format!("Failed to load database from {}", args.database.display()))?;
    log::debug!(
        "loaded {} table(s): {}",
        db.len(),
        db.table_names().collect::<Vec<_>>().join(", ")
    );

    let query = Query::new(&db);
    match &args.query {
        Some(statement) => {
            let result = query.execute(statement)?;
            print_table(&result)
        }
        None => repl(&query),
    }
}

fn repl(query: &Query) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    loop {
        print!("memquery> ");
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let statement = line.trim();
        if statement.is_empty() {
            continue;
        }
        if statement.eq_ignore_ascii_case("exit") || statement.eq_ignore_ascii_case("quit") {
            break;
        }

        match query.execute(statement) {
            Ok(result) => print_table(&result)?,
            Err(err) => eprintln!("error: {}", err),
        }
    }
    Ok(())
}

fn print_table(table: &Table) -> Result<()> {
    for record in table.records() {
        println!("{}", record);
    }
    println!("({} row(s))", table.len());
    Ok(())
}

/// Build a database from a JSON object of tables. Only integer numbers and
/// strings are representable as field values.
fn load_database(text: &str) -> Result<Database> {
    let json: serde_json::Value = serde_json::from_str(text)?;
    let serde_json::Value::Object(tables) = json else {
        bail!("database root must be a JSON object of tables");
    };

    let mut db = Database::new();
    for (name, rows) in tables {
        let serde_json::Value::Array(rows) = rows else {
            bail!("table '{}' must be a JSON array of records", name);
        };

        let mut table = Table::new();
        for row in rows {
            let serde_json::Value::Object(fields) = row else {
                bail!("records in table '{}' must be flat JSON objects", name);
            };

            let mut record = Record::new();
            for (field, value) in fields {
                let value = match value {
                    serde_json::Value::Number(n) => match n.as_i64() {
                        Some(n) => Value::Integer(n),
                        None => bail!("field '{}' in table '{}' is not an integer", field, name),
                    },
                    serde_json::Value::String(s) => Value::Text(s),
                    other => bail!(
                        "field '{}' in table '{}' has unsupported value {}",
                        field,
                        name,
                        other
                    ),
                };
                record.insert(field, value);
            }
            table.push(record);
        }
        db.insert_table(name, table);
    }
    Ok(db)
}
