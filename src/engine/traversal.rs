use std::fmt;

use crate::ast::Node;

/// Returns the node labels in pre-order: node, left subtree, right subtree.
///
/// ## Example
/// ```
/// use exprtree::{engine::traversal::pre_order, parse};
///
/// let tree = parse("2+3*4").unwrap();
/// assert_eq!(pre_order(&tree).join(" "), "+ 2 * 3 4");
/// ```
#[must_use]
pub fn pre_order(node: &Node) -> Vec<String> {
    let mut labels = Vec::new();
    visit_pre(node, &mut labels);
    labels
}

/// Returns the node labels in in-order: left subtree, node, right subtree.
///
/// Without parentheses the in-order sequence reads like the source
/// expression stripped of any skipped characters.
#[must_use]
pub fn in_order(node: &Node) -> Vec<String> {
    let mut labels = Vec::new();
    visit_in(node, &mut labels);
    labels
}

/// Returns the node labels in post-order: left subtree, right subtree, node.
///
/// This is the reverse Polish notation of the expression.
#[must_use]
pub fn post_order(node: &Node) -> Vec<String> {
    let mut labels = Vec::new();
    visit_post(node, &mut labels);
    labels
}

fn visit_pre(node: &Node, labels: &mut Vec<String>) {
    labels.push(node.label());
    if let Some((left, right)) = node.children() {
        visit_pre(left, labels);
        visit_pre(right, labels);
    }
}

fn visit_in(node: &Node, labels: &mut Vec<String>) {
    match node.children() {
        Some((left, right)) => {
            visit_in(left, labels);
            labels.push(node.label());
            visit_in(right, labels);
        },
        None => labels.push(node.label()),
    }
}

fn visit_post(node: &Node, labels: &mut Vec<String>) {
    if let Some((left, right)) = node.children() {
        visit_post(left, labels);
        visit_post(right, labels);
    }
    labels.push(node.label());
}

/// All three traversals of one tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversals {
    /// Node, left, right.
    pub pre_order:  Vec<String>,
    /// Left, node, right.
    pub in_order:   Vec<String>,
    /// Left, right, node.
    pub post_order: Vec<String>,
}

impl Traversals {
    /// Walks `node` in all three orders.
    #[must_use]
    pub fn of(node: &Node) -> Self {
        Self { pre_order:  pre_order(node),
               in_order:   in_order(node),
               post_order: post_order(node), }
    }
}

impl fmt::Display for Traversals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pre-order:  {}", self.pre_order.join(" "))?;
        writeln!(f, "In-order:   {}", self.in_order.join(" "))?;
        write!(f, "Post-order: {}", self.post_order.join(" "))
    }
}
