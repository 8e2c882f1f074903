//! # exprtree
//!
//! exprtree turns an infix arithmetic expression over integers into a binary
//! expression tree and derives everything a teaching tool needs from it: the
//! three classic traversals, a drawing of the tree, the value of the
//! expression and a stack-machine assembly listing that computes it.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::{debug, instrument};

use crate::{
    ast::Node,
    engine::{
        codegen::Program,
        evaluator::{EvalResult, evaluate},
        lexer::tokenize,
        parser::{ParseResult, build_tree},
        traversal::Traversals,
    },
    error::Error,
};

/// Defines the expression tree.
///
/// Declares the [`Node`](ast::Node) tree and the [`Operator`](ast::Operator)
/// precedence table shared by every pass.
pub mod ast;
/// Orchestrates the passes over an expression.
///
/// Tokenizing, tree building, traversals, evaluation, rendering and code
/// generation each live in their own module here. Apart from exporting a
/// finished listing they are pure functions of their input.
pub mod engine;
/// Provides error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (parser, evaluator, export).
/// - Attaches source positions where the failure can be located.
pub mod error;
/// General utilities for safe numeric conversion.
pub mod util;

/// Everything derived from one expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The expression tree.
    pub tree:       Node,
    /// Pre-, in- and post-order labels of the tree.
    pub traversals: Traversals,
    /// The value of the expression, or why it has none. A failed evaluation
    /// does not prevent the other artifacts from being produced.
    pub value:      EvalResult<f64>,
    /// The generated assembly listing.
    pub program:    Program,
}

/// Tokenizes `source` and builds its expression tree.
///
/// # Errors
/// Returns a [`ParseError`](error::ParseError) if the expression is empty or
/// malformed.
///
/// # Examples
/// ```
/// use exprtree::{error::ParseError, parse};
///
/// let tree = parse("8-3-2").unwrap();
/// assert_eq!(tree.to_string(), "((8 - 3) - 2)");
///
/// assert_eq!(parse("   "), Err(ParseError::EmptyExpression));
/// assert!(matches!(parse("2++3"), Err(ParseError::MalformedExpression { .. })));
/// ```
pub fn parse(source: &str) -> ParseResult<Node> {
    let tokens = tokenize(source)?;
    build_tree(&tokens)
}

/// Runs the whole pipeline on one expression.
///
/// Builds the tree, then derives the traversals, the value and the assembly
/// listing from it.
///
/// # Errors
/// Returns [`Error::Parse`] if no tree can be built. Evaluation failures are
/// reported inside [`Report::value`] instead.
///
/// # Examples
/// ```
/// use exprtree::process;
///
/// let report = process("2+3*4").unwrap();
/// assert_eq!(report.value, Ok(14.0));
/// assert_eq!(report.traversals.post_order.join(" "), "2 3 4 * +");
/// assert_eq!(report.program.push_count(), 2);
///
/// assert!(process("").is_err());
/// ```
#[instrument(level = "debug")]
pub fn process(source: &str) -> Result<Report, Error> {
    let tree = parse(source)?;
    let traversals = Traversals::of(&tree);
    let value = evaluate(&tree);
    if let Err(e) = &value {
        debug!(error = %e, "evaluation failed");
    }
    let program = Program::new(source, &tree);

    Ok(Report { tree,
                traversals,
                value,
                program })
}
