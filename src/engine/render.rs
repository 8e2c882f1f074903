use termtree::Tree;

use crate::ast::Node;

/// Renders the tree with box-drawing characters, one node per line.
///
/// Each operator node is followed by its left subtree, then its right
/// subtree.
///
/// ## Example
/// ```
/// use exprtree::{engine::render::text_tree, parse};
///
/// let drawing = text_tree(&parse("1+2").unwrap());
/// assert_eq!(drawing.lines().collect::<Vec<_>>(), vec!["+", "├── 1", "└── 2"]);
/// ```
#[must_use]
pub fn text_tree(node: &Node) -> String {
    to_termtree(node).to_string()
}

fn to_termtree(node: &Node) -> Tree<String> {
    let leaves: Vec<_> = node.children()
                             .map(|(left, right)| vec![to_termtree(left), to_termtree(right)])
                             .unwrap_or_default();
    Tree::new(node.label()).with_leaves(leaves)
}

/// Geometry used to lay a tree out on a drawing surface.
///
/// The defaults reproduce the classic canvas drawing: root centred 40 pixels
/// from the top, 50 pixels between levels, and a horizontal child offset of
/// `spread / (level + 1)` that halves, then thirds, and so on with depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Width of the drawing surface. The root is placed at `width / 2`.
    pub width:       f64,
    /// Vertical position of the root.
    pub top_margin:  f64,
    /// Vertical distance between a node and its children.
    pub level_gap:   f64,
    /// Horizontal child offset at the root level.
    pub spread:      f64,
    /// Radius of the circle drawn for each node.
    pub node_radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { width:       800.0,
               top_margin:  40.0,
               level_gap:   50.0,
               spread:      120.0,
               node_radius: 20.0, }
    }
}

/// A node placed on the drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    /// Text drawn inside the node.
    pub label: String,
    /// Horizontal centre.
    pub x:     f64,
    /// Vertical centre.
    pub y:     f64,
    /// Distance from the root; the root has depth `0`.
    pub depth: usize,
}

/// A line from a parent to one of its children, as indices into
/// [`Layout::nodes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Index of the parent node.
    pub parent: usize,
    /// Index of the child node.
    pub child:  usize,
}

/// Everything a drawing surface needs to draw a tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Nodes in pre-order; the root is first.
    pub nodes:       Vec<PlacedNode>,
    /// Parent-to-child connections.
    pub edges:       Vec<Edge>,
    /// Radius of each node circle.
    pub node_radius: f64,
}

/// Computes the position of every node and the edges between them.
///
/// ## Example
/// ```
/// use exprtree::{
///     engine::render::{LayoutConfig, layout},
///     parse,
/// };
///
/// let layout = layout(&parse("1+2").unwrap(), &LayoutConfig::default());
/// assert_eq!((layout.nodes[0].x, layout.nodes[0].y), (400.0, 40.0));
/// assert_eq!((layout.nodes[1].x, layout.nodes[1].y), (280.0, 90.0));
/// assert_eq!((layout.nodes[2].x, layout.nodes[2].y), (520.0, 90.0));
/// assert_eq!(layout.edges.len(), 2);
/// ```
#[must_use]
pub fn layout(node: &Node, config: &LayoutConfig) -> Layout {
    let mut layout = Layout { nodes:       Vec::new(),
                              edges:       Vec::new(),
                              node_radius: config.node_radius, };
    place(node, config.width / 2.0, config.top_margin, 0, config, &mut layout);
    layout
}

#[allow(clippy::cast_precision_loss)]
fn place(node: &Node, x: f64, y: f64, depth: usize, config: &LayoutConfig, layout: &mut Layout)
         -> usize {
    let index = layout.nodes.len();
    layout.nodes.push(PlacedNode { label: node.label(),
                                   x,
                                   y,
                                   depth });

    if let Some((left, right)) = node.children() {
        let offset = config.spread / (depth + 1) as f64;
        let child_y = y + config.level_gap;

        let left_index = place(left, x - offset, child_y, depth + 1, config, layout);
        layout.edges.push(Edge { parent: index,
                                 child:  left_index, });
        let right_index = place(right, x + offset, child_y, depth + 1, config, layout);
        layout.edges.push(Edge { parent: index,
                                 child:  right_index, });
    }

    index
}

impl Layout {
    /// Returns the smallest bounding box `(min_x, min_y, max_x, max_y)`
    /// containing every node circle.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let r = self.node_radius;
        self.nodes.iter().fold((f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
                               |(min_x, min_y, max_x, max_y), n| {
                                   (min_x.min(n.x - r),
                                    min_y.min(n.y - r),
                                    max_x.max(n.x + r),
                                    max_y.max(n.y + r))
                               })
    }
}
