// WHERE-clause parser - builds an expression tree from tokens
//
// Precedence comes from splitting: OR segments are split off first, so OR
// binds loosest; AND next; whatever remains must be a one- or three-token
// leaf. Parentheses are not part of the grammar.

use super::lexer::Lexer;
use super::token::Token;
use crate::database::Value;
use crate::error::{QueryError, QueryResult};
use crate::expression::{Expression, Operator};

/// Parse a WHERE clause into an expression tree.
pub fn parse_where(input: &str) -> QueryResult<Expression> {
    let mut tokens = Lexer::new(input.to_string()).tokenize()?;
    if tokens.last() == Some(&Token::Eof) {
        tokens.pop();
    }
    parse_expression(&tokens)
}

/// Parse a token sequence (without a trailing `Eof`) into an expression tree.
pub(crate) fn parse_expression(tokens: &[Token]) -> QueryResult<Expression> {
    let or_segments: Vec<&[Token]> = tokens.split(|t| t == &Token::Or).collect();
    if or_segments.len() > 1 {
        let operands = or_segments
            .into_iter()
            .map(parse_expression)
            .collect::<QueryResult<Vec<_>>>()?;
        return Ok(Expression::or(operands));
    }

    let and_segments: Vec<&[Token]> = tokens.split(|t| t == &Token::And).collect();
    if and_segments.len() > 1 {
        let operands = and_segments
            .into_iter()
            .map(parse_expression)
            .collect::<QueryResult<Vec<_>>>()?;
        return Ok(Expression::and(operands));
    }

    parse_leaf(tokens)
}

fn parse_leaf(tokens: &[Token]) -> QueryResult<Expression> {
    match tokens {
        [token] => Ok(Expression::literal(literal_value(token)?)),
        [field, op, operand] => {
            let Token::Identifier(field) = field else {
                return Err(QueryError::MalformedExpression(format!(
                    "expected a field name, found {:?}",
                    field
                )));
            };
            Ok(Expression::binary(
                operator(op)?,
                field.clone(),
                literal_value(operand)?,
            ))
        }
        _ => Err(QueryError::MalformedExpression(format!(
            "expected a literal or a comparison, found {} token(s)",
            tokens.len()
        ))),
    }
}

fn literal_value(token: &Token) -> QueryResult<Value> {
    match token {
        // Bare words go through the uniform coercion; quoted strings are
        // always text, even when their content parses as an integer.
        Token::Identifier(word) | Token::Number(word) => Ok(Value::coerce(word)),
        Token::String(text) => Ok(Value::Text(text.clone())),
        other => Err(QueryError::MalformedExpression(format!(
            "expected a literal, found {:?}",
            other
        ))),
    }
}

fn operator(token: &Token) -> QueryResult<Operator> {
    match token {
        Token::Less => Ok(Operator::Lt),
        Token::LessEqual => Ok(Operator::Le),
        Token::Greater => Ok(Operator::Gt),
        Token::GreaterEqual => Ok(Operator::Ge),
        Token::Equal => Ok(Operator::Eq),
        Token::Like => Ok(Operator::Contains),
        other => Err(QueryError::MalformedExpression(format!(
            "{:?} is not a comparison operator",
            other
        ))),
    }
}
