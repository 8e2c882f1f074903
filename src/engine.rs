/// The code generator emits stack-machine pseudo-assembly.
///
/// A post-order walk over the tree produces load, push, pop and operator
/// instructions for a machine with two working registers; a [`Program`]
/// embeds them in a fixed listing template ready for export.
///
/// [`Program`]: codegen::Program
pub mod codegen;
/// The evaluator computes the value of a tree.
///
/// Operand leaves yield their literal, operator nodes apply their operator to
/// both children. Arithmetic is real-valued and division by zero is reported
/// as an error.
pub mod evaluator;
/// The lexer module tokenizes raw expressions.
///
/// Reads the source text and produces integer literal and operator tokens,
/// tagged with their byte positions. Unknown characters are skipped.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// Uses a two-stack operator-precedence algorithm that honours `*` and `/`
/// over `+` and `-` and groups operators of equal precedence to the left.
pub mod parser;
/// Drawing support for trees.
///
/// Provides a terminal rendering and a geometric layout of nodes and edges
/// for drawing surfaces.
pub mod render;
/// Pre-order, in-order and post-order walks producing node labels.
pub mod traversal;
