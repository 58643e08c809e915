/// Entry points of the parser.
///
/// Holds [`core::parse`], which turns a whole token stream into a program
/// block, and [`core::parse_expression`], the top of the expression grammar.
pub mod core;
/// Binary operator precedence levels, from the ternary down to `^`.
pub mod binary;
/// Braced blocks and the `-> statement` body shorthand.
pub mod block;
/// `if`, `for`, `each` and `while` expressions.
pub mod control;
/// Function literals.
pub mod function;
/// Statements: `return`, `break`, `continue` and assignments.
pub mod statement;
/// Prefix operators, postfix calls and indexing, and primary expressions.
pub mod unary;
/// Token helpers shared by the grammar rules.
pub mod utils;
