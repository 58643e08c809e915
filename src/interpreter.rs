/// The evaluator walks the syntax tree and computes results.
///
/// It evaluates every node against a chain of lexical scopes, applies
/// operators through the value capabilities, unwinds `return`, `break`,
/// `continue` and errors as [`evaluator::core::Signal`]s, and provides the
/// builtin functions.
///
/// # Responsibilities
/// - Evaluates all node kinds with an exhaustive match.
/// - Manages scopes, closures and the call depth limit.
/// - Reports runtime errors with the span of the offending code.
pub mod evaluator;
/// The lexer turns source text into tokens.
///
/// Built on `logos`. Each token carries its kind, any literal payload, and
/// the span it covers, so later phases can point back at the source.
///
/// # Responsibilities
/// - Recognises numbers, strings, identifiers, keywords, operators and
///   delimiters.
/// - Skips whitespace and `//` comments.
/// - Reports the first unrecognised character as an `Illigal Char` error.
pub mod lexer;
/// The parser builds the syntax tree from tokens.
///
/// A recursive descent parser with one function per precedence level. It
/// stops at the first syntax error.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Node`]s.
/// - Implements operator precedence and associativity.
/// - Reports `Invalid Syntax` errors at the offending token.
pub mod parser;
/// Source positions and spans.
pub mod position;
/// Runtime values.
///
/// Numbers, strings, shared lists, functions, builtins and `null`, with the
/// operator capabilities each of them supports.
pub mod value;
