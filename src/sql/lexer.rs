// Query lexer - tokenizes SELECT statements and WHERE clauses

use super::token::Token;
use crate::error::{QueryError, QueryResult};

pub struct Lexer {
    input: String,
    position: usize,
    current_char: Option<char>,
}

impl Lexer {
    pub fn new(input: String) -> Self {
        let mut lexer = Lexer {
            input,
            position: 0,
            current_char: None,
        };
        lexer.current_char = lexer.input.chars().next();
        lexer
    }

    /// Tokenize the whole input; the last token is always `Eof`.
    pub fn tokenize(&mut self) -> QueryResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token == Token::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        Ok(tokens)
    }

    /// Get the next token from the input
    fn next_token(&mut self) -> QueryResult<Token> {
        self.skip_whitespace();

        let Some(ch) = self.current_char else {
            return Ok(Token::Eof);
        };

        let token = match ch {
            '*' => {
                self.advance();
                Token::Star
            }
            ',' => {
                self.advance();
                Token::Comma
            }
            '=' => {
                self.advance();
                Token::Equal
            }
            '<' => {
                self.advance();
                if self.current_char == Some('=') {
                    self.advance();
                    Token::LessEqual
                } else {
                    Token::Less
                }
            }
            '>' => {
                self.advance();
                if self.current_char == Some('=') {
                    self.advance();
                    Token::GreaterEqual
                } else {
                    Token::Greater
                }
            }
            '\'' => self.read_string()?,
            '-' if self.peek().is_some_and(|c| c.is_ascii_digit()) => self.read_number(),
            c if c.is_ascii_digit() => self.read_number(),
            c if c.is_alphabetic() || c == '_' => self.read_identifier(),
            c => {
                return Err(QueryError::MalformedExpression(format!(
                    "unexpected character '{}'",
                    c
                )))
            }
        };

        Ok(token)
    }

    /// Advance to the next character
    fn advance(&mut self) {
        self.position += 1;
        self.current_char = self.input.chars().nth(self.position);
    }

    /// Peek at the next character without advancing
    fn peek(&self) -> Option<char> {
        self.input.chars().nth(self.position + 1)
    }

    /// Skip whitespace characters
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Read an identifier or keyword
    fn read_identifier(&mut self) -> Token {
        let mut word = String::new();

        while let Some(ch) = self.current_char {
            if ch.is_alphanumeric() || ch == '_' {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::keyword_from_str(&word).unwrap_or(Token::Identifier(word))
    }

    /// Read a word starting with a digit (or a minus sign). A pure digit run
    /// is a number; anything else falls back to an identifier so the single
    /// value-coercion point decides what it is.
    fn read_number(&mut self) -> Token {
        let mut word = String::new();

        if self.current_char == Some('-') {
            word.push('-');
            self.advance();
        }
        while let Some(ch) = self.current_char {
            if ch.is_alphanumeric() || ch == '_' {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if word
            .trim_start_matches('-')
            .chars()
            .all(|c| c.is_ascii_digit())
        {
            Token::Number(word)
        } else {
            Token::Identifier(word)
        }
    }

    /// Read a single-quoted string literal; `''` escapes a quote.
    fn read_string(&mut self) -> QueryResult<Token> {
        self.advance(); // Skip opening quote
        let mut string = String::new();

        loop {
            match self.current_char {
                Some('\'') => {
                    if self.peek() == Some('\'') {
                        string.push('\'');
                        self.advance();
                        self.advance();
                    } else {
                        self.advance(); // Skip closing quote
                        return Ok(Token::String(string));
                    }
                }
                Some(ch) => {
                    string.push(ch);
                    self.advance();
                }
                None => {
                    return Err(QueryError::MalformedExpression(
                        "unterminated string literal".to_string(),
                    ))
                }
            }
        }
    }
}
