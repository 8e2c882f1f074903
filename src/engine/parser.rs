use tracing::{debug, trace};

use crate::{
    ast::{Node, Operator},
    engine::lexer::Token,
    error::ParseError,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest tree the parser will build, counting a single leaf as depth `1`.
///
/// Every pass over a tree recurses once per level, so the limit keeps long
/// same-precedence chains such as `1+1+...+1` from exhausting the stack.
pub const MAX_DEPTH: usize = 1024;

/// A finished subtree on the operand stack with the source position of its
/// leftmost literal and its depth.
type Pending = (Node, usize, usize);

/// Builds an expression tree from a token sequence.
///
/// This is an operator-precedence (shunting) parser working in one forward
/// pass over two stacks: an operand stack of finished subtrees and an
/// operator stack of pending operators.
///
/// - An integer pushes a new leaf onto the operand stack.
/// - An operator first reduces every pending operator whose precedence is
///   greater than or equal to its own, then is pushed itself. The `>=`
///   makes operators of one class group to the left: `8-3-2` is
///   `(8-3)-2`.
/// - Once the tokens are exhausted, all pending operators are reduced.
///
/// There is no grouping syntax; precedence and left-to-right order decide
/// everything.
///
/// # Parameters
/// - `tokens`: `(Token, position)` pairs as produced by the lexer.
///
/// # Returns
/// The root of the tree.
///
/// # Errors
/// - [`ParseError::EmptyExpression`] if `tokens` is empty.
/// - [`ParseError::MalformedExpression`] if an operator has fewer than two
///   operands available when it is reduced.
/// - [`ParseError::UnexpectedTrailingOperand`] if operands remain that no
///   operator joins.
/// - [`ParseError::NestedTooDeeply`] if the tree would be deeper than
///   [`MAX_DEPTH`].
///
/// # Example
/// ```
/// use exprtree::engine::{lexer::tokenize, parser::build_tree};
///
/// let tokens = tokenize("2+3*4").unwrap();
/// let tree = build_tree(&tokens).unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
/// ```
pub fn build_tree(tokens: &[(Token, usize)]) -> ParseResult<Node> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut operands: Vec<Pending> = Vec::new();
    let mut operators: Vec<(Operator, usize)> = Vec::new();

    for &(token, position) in tokens {
        match token.operator() {
            None => {
                if let Token::Integer(value) = token {
                    trace!(value, "push operand");
                    operands.push((Node::operand(value), position, 1));
                }
            },
            Some(op) => {
                while let Some(&(top, _)) = operators.last()
                      && top.precedence() >= op.precedence()
                {
                    reduce(&mut operands, &mut operators)?;
                }
                trace!(%op, "push operator");
                operators.push((op, position));
            },
        }
    }

    while !operators.is_empty() {
        reduce(&mut operands, &mut operators)?;
    }

    let mut remaining = operands.into_iter();
    let Some((root, _, _)) = remaining.next() else {
        return Err(ParseError::EmptyExpression);
    };
    if let Some((stray, position, _)) = remaining.next() {
        return Err(ParseError::UnexpectedTrailingOperand { value: leftmost_value(&stray),
                                                           position });
    }

    debug!(leaves = root.leaf_count(),
           operators = root.operator_count(),
           "expression tree built");
    Ok(root)
}

/// Pops the top operator and the two topmost operands, joins them into a new
/// operator node and pushes it back onto the operand stack.
///
/// The first operand popped becomes the right child, the second the left.
/// The combined node keeps the position of its left operand.
fn reduce(operands: &mut Vec<Pending>,
          operators: &mut Vec<(Operator, usize)>)
          -> ParseResult<()> {
    let Some((op, op_position)) = operators.pop() else {
        return Ok(());
    };
    let malformed = || ParseError::MalformedExpression { operator: op,
                                                         position: op_position, };

    let (right, _, right_depth) = operands.pop().ok_or_else(malformed)?;
    let (left, position, left_depth) = operands.pop().ok_or_else(malformed)?;

    let depth = 1 + left_depth.max(right_depth);
    if depth > MAX_DEPTH {
        return Err(ParseError::NestedTooDeeply { limit: MAX_DEPTH,
                                                 position: op_position, });
    }

    trace!(%op, depth, "reduce");
    operands.push((Node::binary(op, left, right), position, depth));
    Ok(())
}

fn leftmost_value(node: &Node) -> i64 {
    match node {
        Node::Operand { value } => *value,
        Node::Operator { left, .. } => leftmost_value(left),
    }
}
