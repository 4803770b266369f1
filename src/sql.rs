//! The textual query surface: tokens, lexer, and parsers.

pub mod lexer;
pub mod parser;
pub mod select;
pub mod token;

pub use lexer::Lexer;
pub use parser::parse_where;
pub use select::{parse_select, SelectStatement};
pub use token::Token;
