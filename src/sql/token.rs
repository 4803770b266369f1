// Tokens of the query language

/// Lexical tokens produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Literals
    Identifier(String),
    Number(String),
    String(String),

    // Keywords
    Select,
    From,
    Where,
    And,
    Or,
    Like,

    // Symbols
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
    Comma,
    Star,

    Eof,
}

impl Token {
    /// Map a word to its keyword token, if it is one (case-insensitive).
    pub fn keyword_from_str(s: &str) -> Option<Token> {
        match s.to_uppercase().as_str() {
            "SELECT" => Some(Token::Select),
            "FROM" => Some(Token::From),
            "WHERE" => Some(Token::Where),
            "AND" => Some(Token::And),
            "OR" => Some(Token::Or),
            "LIKE" => Some(Token::Like),
            _ => None,
        }
    }
}
