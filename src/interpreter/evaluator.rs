/// Binary operator evaluation.
///
/// Evaluates both operands (right first) and dispatches the operator on the
/// left value's capabilities.
pub mod binary;
/// Lexical scopes.
///
/// A [`context::Context`] maps names to values and links to the scope that
/// encloses it. Closures keep their defining context alive.
pub mod context;
/// The interpreter and its dispatch loop.
///
/// Holds [`core::Interpreter`], the [`core::Signal`] type used to unwind
/// `return`, `break`, `continue` and errors, and the result aliases shared by
/// the rest of the evaluator.
pub mod core;
/// `for`, `each` and `while` loops.
pub mod for_loop;
/// Function definitions, calls, and the builtin function table.
pub mod function;
/// Prefix operators.
pub mod unary;
/// Literals, variables, blocks, conditionals and element access.
pub mod utils;
