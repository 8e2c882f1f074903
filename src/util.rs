/// Numeric conversion helpers.
///
/// Provides safe conversion from the integer literals of a tree to the `f64`
/// values the evaluator computes with, without risking silent rounding.
pub mod num;
