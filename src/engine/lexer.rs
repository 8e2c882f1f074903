use logos::Logos;
use tracing::trace;

use crate::{ast::Operator, engine::parser::ParseResult, error::ParseError};

/// Represents a lexical token of an arithmetic expression.
///
/// Every character that is neither a digit nor one of `+ - * /` is skipped,
/// so whitespace, letters and parentheses never reach the parser.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[^0-9+\-*/]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`. A leading `-` is never part of
    /// the literal.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
}

impl Token {
    /// Returns the operator this token stands for, or `None` for literals.
    #[must_use]
    pub const fn operator(self) -> Option<Operator> {
        match self {
            Self::Integer(_) => None,
            Self::Plus => Some(Operator::Add),
            Self::Minus => Some(Operator::Sub),
            Self::Star => Some(Operator::Mul),
            Self::Slash => Some(Operator::Div),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the digits overflow an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Scans a raw expression into tokens paired with their byte offsets.
///
/// The scan is lenient: unknown characters are dropped rather than reported.
/// An empty result is not an error at this stage; the parser decides that.
///
/// # Errors
/// Returns [`ParseError::LiteralTooLarge`] when a digit run does not fit into
/// an `i64`.
///
/// # Example
/// ```
/// use exprtree::engine::lexer::{Token, tokenize};
///
/// let tokens = tokenize("12 + x3").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(12), 0), (Token::Plus, 3), (Token::Integer(3), 6)]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(tok) = token {
            trace!(?tok, position, "token");
            tokens.push((tok, position));
        } else {
            return Err(ParseError::LiteralTooLarge { literal: lexer.slice().to_string(),
                                                     position });
        }
    }

    Ok(tokens)
}
