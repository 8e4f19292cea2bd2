//! Sandboxed arithmetic evaluator behind the Eval tool.
//!
//! Only numeric expressions are accepted: literals, `+ - * / % ^`,
//! parentheses, unary sign, the constants `pi` and `e`, and a fixed set of
//! functions. There is no access to anything outside the expression.

mod lexer;
mod parser;


use lexer::tokenize;
use parser::Parser;

/// Longest expression accepted, in characters.
pub const MAX_EXPRESSION_LEN: usize = 512;

/// Deepest allowed nesting of parentheses, signs, and calls.
pub const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("empty expression")]
    Empty,
    #[error("expression longer than {MAX_EXPRESSION_LEN} characters")]
    TooLong,
    #[error("expression nested too deeply")]
    TooDeep,
    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("unexpected {0}")]
    UnexpectedToken(String),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unknown name '{0}'")]
    UnknownName(String),
    #[error("{name}() takes {expected} argument(s), got {found}")]
    Arity {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not a finite number")]
    NotFinite,
}

/// Evaluate `source` to a number.
pub fn evaluate(source: &str) -> Result<f64, EvalError> {
    if source.chars().count() > MAX_EXPRESSION_LEN {
        return Err(EvalError::TooLong);
    }
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }
    let value = Parser::new(&tokens).parse()?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NotFinite)
    }
}

/// Render a result: integral values without a fractional part.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
