use tracing::debug;

use crate::{
    ast::{Node, Operator},
    error::RuntimeError,
    util::num::i64_to_f64_checked,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces an expression tree to its numeric value.
///
/// Operands evaluate to their literal value; operator nodes apply their
/// operator to the values of both children. Arithmetic is carried out on
/// `f64`, so `7/2` is `3.5`.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] when a right operand of `/` evaluates
///   to zero. No infinity or NaN is ever produced for a zero divisor.
/// - [`RuntimeError::LiteralTooLarge`] when a literal cannot be represented
///   exactly as an `f64`.
///
/// # Example
/// ```
/// use exprtree::{engine::evaluator::evaluate, error::RuntimeError, parse};
///
/// assert_eq!(evaluate(&parse("2+3*4").unwrap()), Ok(14.0));
/// assert_eq!(evaluate(&parse("8-3-2").unwrap()), Ok(3.0));
/// assert_eq!(evaluate(&parse("7/2").unwrap()), Ok(3.5));
/// assert!(matches!(evaluate(&parse("1/0").unwrap()),
///                  Err(RuntimeError::DivisionByZero { .. })));
/// ```
pub fn evaluate(node: &Node) -> EvalResult<f64> {
    let value = eval_node(node)?;
    debug!(value, "expression evaluated");
    Ok(value)
}

fn eval_node(node: &Node) -> EvalResult<f64> {
    match node {
        Node::Operand { value } => {
            i64_to_f64_checked(*value, RuntimeError::LiteralTooLarge { value: *value })
        },
        Node::Operator { op, left, right } => {
            let left = eval_node(left)?;
            let right = eval_node(right)?;

            if matches!(op, Operator::Div) && right == 0.0 {
                return Err(RuntimeError::DivisionByZero { dividend: left });
            }
            Ok(op.apply(left, right))
        },
    }
}
