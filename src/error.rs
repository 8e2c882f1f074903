use std::{io, path::PathBuf};

use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing the raw expression
/// and building its tree: empty input, operators missing operands, dangling
/// operands, oversized literals and trees nested too deeply.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error types raised while evaluating a tree, such as division
/// by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of the expression pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The expression could not be turned into a tree.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// The generated program could not be written.
    #[error("Failed to write '{}': {source}", path.display())]
    Export {
        /// Destination that was being written.
        path:   PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
}
