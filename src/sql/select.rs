// SELECT statement parser

use super::lexer::Lexer;
use super::parser::parse_expression;
use super::token::Token;
use crate::error::{QueryError, QueryResult};
use crate::executor::Projection;
use crate::expression::Expression;

/// A parsed `SELECT <fields> FROM <table> [WHERE <expr>]` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStatement {
    pub projection: Projection,
    pub table: String,
    pub where_clause: Option<Expression>,
}

/// Parse a full SELECT statement.
pub fn parse_select(input: &str) -> QueryResult<SelectStatement> {
    let mut tokens = Lexer::new(input.to_string()).tokenize()?;
    if tokens.last() == Some(&Token::Eof) {
        tokens.pop();
    }
    SelectParser {
        tokens,
        position: 0,
    }
    .parse()
}

struct SelectParser {
    tokens: Vec<Token>,
    position: usize,
}

impl SelectParser {
    fn parse(mut self) -> QueryResult<SelectStatement> {
        self.expect(Token::Select)?;
        let projection = self.parse_projection()?;
        self.expect(Token::From)?;
        let table = self.expect_identifier("table name")?;

        let where_clause = if self.current() == Some(&Token::Where) {
            self.advance();
            let clause = parse_expression(&self.tokens[self.position..])?;
            self.position = self.tokens.len();
            Some(clause)
        } else {
            None
        };

        if self.position != self.tokens.len() {
            return Err(QueryError::MalformedExpression(format!(
                "unexpected {:?} after table name",
                self.tokens[self.position]
            )));
        }

        Ok(SelectStatement {
            projection,
            table,
            where_clause,
        })
    }

    /// Parse `*` or a comma-separated, non-empty field list.
    fn parse_projection(&mut self) -> QueryResult<Projection> {
        if self.current() == Some(&Token::Star) {
            self.advance();
            return Ok(Projection::All);
        }

        let mut fields = vec![self.expect_identifier("field name")?];
        while self.current() == Some(&Token::Comma) {
            self.advance();
            fields.push(self.expect_identifier("field name")?);
        }
        Ok(Projection::Fields(fields))
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn expect(&mut self, expected: Token) -> QueryResult<()> {
        match self.current() {
            Some(token) if *token == expected => {
                self.advance();
                Ok(())
            }
            found => Err(QueryError::MalformedExpression(format!(
                "expected {:?}, found {:?}",
                expected, found
            ))),
        }
    }

    fn expect_identifier(&mut self, what: &str) -> QueryResult<String> {
        match self.current() {
            Some(Token::Identifier(name)) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            found => Err(QueryError::MalformedExpression(format!(
                "expected a {}, found {:?}",
                what, found
            ))),
        }
    }
}
