pub mod database;
pub mod error;
pub mod executor;
pub mod expression;
pub mod query;
pub mod sql;
