use std::fmt;

/// A binary arithmetic operator.
///
/// Every operator node in an expression tree carries exactly one of these.
/// Operators of the same precedence class associate left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Returns the precedence class of the operator.
    ///
    /// Additive operators bind with class `1`, multiplicative operators with
    /// class `2`. A higher class binds tighter.
    ///
    /// ## Example
    /// ```
    /// use exprtree::ast::Operator;
    ///
    /// assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    /// assert_eq!(Operator::Sub.precedence(), Operator::Add.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Applies the operator to two real operands.
    ///
    /// Division is real-valued. Zero divisors are the caller's concern.
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A node of a binary expression tree.
///
/// A node is either an operand leaf holding an integer literal, or an operator
/// node that exclusively owns its two children. Trees are built once by the
/// parser and are never mutated afterwards; the traversal, evaluation,
/// rendering and code generation passes all read the same tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// An integer literal.
    Operand {
        /// The literal value.
        value: i64,
    },
    /// A binary operation.
    Operator {
        /// The operator combining both children.
        op:    Operator,
        /// Left operand subtree.
        left:  Box<Self>,
        /// Right operand subtree.
        right: Box<Self>,
    },
}

impl Node {
    /// Creates an operand leaf.
    #[must_use]
    pub const fn operand(value: i64) -> Self {
        Self::Operand { value }
    }

    /// Creates an operator node owning `left` and `right`.
    ///
    /// ## Example
    /// ```
    /// use exprtree::ast::{Node, Operator};
    ///
    /// let node = Node::binary(Operator::Add, Node::operand(1), Node::operand(2));
    /// assert_eq!(node.label(), "+");
    /// assert_eq!(node.leaf_count(), 2);
    /// ```
    #[must_use]
    pub fn binary(op: Operator, left: Self, right: Self) -> Self {
        Self::Operator { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Returns the text label of the node: the literal for operands and the
    /// symbol for operators.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Operand { value } => value.to_string(),
            Self::Operator { op, .. } => op.symbol().to_string(),
        }
    }

    /// Returns the `(left, right)` children of an operator node, or `None` for
    /// a leaf.
    #[must_use]
    pub fn children(&self) -> Option<(&Self, &Self)> {
        match self {
            Self::Operand { .. } => None,
            Self::Operator { left, right, .. } => Some((left, right)),
        }
    }

    /// Counts the operand leaves of the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.children()
            .map_or(1, |(left, right)| left.leaf_count() + right.leaf_count())
    }

    /// Counts the operator (internal) nodes of the tree.
    #[must_use]
    pub fn operator_count(&self) -> usize {
        self.children()
            .map_or(0, |(left, right)| 1 + left.operator_count() + right.operator_count())
    }

    /// Returns the depth of the tree. A single leaf has depth `1`.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.children()
            .map_or(1, |(left, right)| 1 + left.depth().max(right.depth()))
    }
}

impl fmt::Display for Node {
    /// Writes the tree as a fully parenthesized infix expression, e.g.
    /// `(2 + (3 * 4))`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand { value } => write!(f, "{value}"),
            Self::Operator { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
