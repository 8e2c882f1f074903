use thiserror::Error;

use crate::ast::Operator;

/// Represents all errors that can occur while tokenizing an expression or
/// building its tree.
///
/// Positions are byte offsets into the source expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The source produced no tokens at all.
    #[error("Expression is empty. Please enter an expression such as 2+3*4.")]
    EmptyExpression,
    /// An operator did not have two operands available when it was combined,
    /// e.g. a leading or trailing operator or two adjacent operators.
    #[error("Error at position {position}: Operator '{operator}' is missing an operand.")]
    MalformedExpression {
        /// The operator lacking operands.
        operator: Operator,
        /// Where the operator appeared in the source.
        position: usize,
    },
    /// More than one operand was left over with no operator joining them,
    /// e.g. `2 3`.
    #[error("Error at position {position}: Operand {value} is not joined to the expression by an operator.")]
    UnexpectedTrailingOperand {
        /// The dangling literal.
        value:    i64,
        /// Where the literal appeared in the source.
        position: usize,
    },
    /// An integer literal does not fit into a 64-bit signed integer.
    #[error("Error at position {position}: Literal {literal} is too large.")]
    LiteralTooLarge {
        /// The literal as written in the source.
        literal:  String,
        /// Where the literal appeared in the source.
        position: usize,
    },
    /// The tree would nest deeper than the parser allows, e.g. a very long
    /// chain like `1+1+...+1`.
    #[error("Error at position {position}: Expression nests deeper than {limit} levels.")]
    NestedTooDeeply {
        /// The maximum tree depth.
        limit:    usize,
        /// Where the operator that exceeded the limit appeared in the source.
        position: usize,
    },
}
