use thiserror::Error;

/// Represents all errors that can occur while evaluating an expression tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// The right operand of a division evaluated to zero.
    #[error("Division by zero: {dividend} / 0.")]
    DivisionByZero {
        /// The value that was being divided.
        dividend: f64,
    },
    /// An operand cannot be represented exactly as a real number.
    #[error("Literal {value} is too large to be evaluated exactly.")]
    LiteralTooLarge {
        /// The offending literal.
        value: i64,
    },
}
