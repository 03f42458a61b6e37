//! FILENAME: engine/src/evaluator.rs
//! PURPOSE: Evaluates equation strings to numeric results.
//! CONTEXT: This module runs the full evaluation pipeline: it sanitizes the
//! raw equation buffer, parses it into an AST, traverses the tree to compute
//! an f64, and rejects non-finite results.
//!
//! PIPELINE: Equation String --> Sanitizer --> Parser --> AST --> f64

use parser::{parse, BinaryOperator, Expression, ParseError, UnaryOperator};
use thiserror::Error;

/// Errors produced by the evaluation pipeline.
///
/// Callers that surface results to a user collapse every variant into the
/// single display value "Error"; the variants exist for logging and tests.
#[derive(Error, Debug, PartialEq)]
pub enum EvalError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("result is not a finite number")]
    NonFinite,
}

/// Strips every character that is not part of the equation alphabet:
/// digits, `.`, the four operators, and parentheses.
///
/// Input normally arrives from the button surface and is already clean;
/// this guards the library entry point against arbitrary strings.
pub fn sanitize(equation: &str) -> String {
    equation
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')'))
        .collect()
}

/// Evaluates a raw equation string and returns the numeric result.
///
/// The input is sanitized before parsing. A malformed expression, an empty
/// expression, or a non-finite result (e.g. division by zero) is an error.
pub fn evaluate_equation(input: &str) -> Result<f64, EvalError> {
    let sanitized = sanitize(input);
    let expr = parse(&sanitized)?;
    let value = evaluate(&expr);

    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }

    Ok(value)
}

/// Evaluates an AST expression and returns the result.
pub fn evaluate(expr: &Expression) -> f64 {
    match expr {
        Expression::Literal(n) => *n,
        Expression::BinaryOp { left, op, right } => eval_binary_op(left, op, right),
        Expression::UnaryOp { op, operand } => eval_unary_op(op, operand),
    }
}

/// Evaluates a binary operation.
/// Division by zero is not caught here; it produces an infinity that the
/// finiteness check in `evaluate_equation` rejects.
fn eval_binary_op(left: &Expression, op: &BinaryOperator, right: &Expression) -> f64 {
    let left_val = evaluate(left);
    let right_val = evaluate(right);

    match op {
        BinaryOperator::Add => left_val + right_val,
        BinaryOperator::Subtract => left_val - right_val,
        BinaryOperator::Multiply => left_val * right_val,
        BinaryOperator::Divide => left_val / right_val,
    }
}

/// Evaluates a unary operation.
fn eval_unary_op(op: &UnaryOperator, operand: &Expression) -> f64 {
    let operand_val = evaluate(operand);

    match op {
        UnaryOperator::Negate => -operand_val,
    }
}
