//! # luminary
//!
//! luminary is a small dynamically-typed scripting language written in
//! Rust. It tokenizes, parses and evaluates programs with numbers, strings,
//! lists, closures, loops and a handful of builtin functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::rc::Rc;

use crate::{
    error::Error,
    interpreter::{
        evaluator::{context::Context, core::Interpreter},
        lexer::tokenize,
        parser::core::parse,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the [`ast::Node`] enum and the operator types that
/// represent a program as a tree. The tree is built by the parser and
/// walked by the evaluator.
///
/// # Responsibilities
/// - Defines a node for every language construct.
/// - Attaches the source span to every node for error reporting.
pub mod ast;
/// Provides the error type shared by every phase.
///
/// Lexing, parsing and evaluation all fail with [`error::Error`], which
/// carries a kind, a message and the span of the offending source.
///
/// # Responsibilities
/// - Classifies failures as illegal characters, invalid syntax or runtime
///   errors.
/// - Renders errors in the format shown to users.
pub mod error;
/// Orchestrates the execution of source code.
///
/// Ties together the lexer, parser, evaluator and value types into a
/// complete runtime.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Defines positions, tokens, values and scopes.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities.
///
/// Safe numeric conversions and stack growth helpers used throughout the
/// interpreter.
pub mod util;

/// Name given to source that does not come from a file.
pub const STDIN_FILE_NAME: &str = "<stdin>";

/// Tokenizes, parses and evaluates `source` with an existing interpreter and
/// scope.
///
/// The REPL calls this once per line with the same `context`, so
/// definitions persist between lines.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error.
///
/// # Example
/// ```
/// use std::io;
///
/// use luminary::{
///     interpreter::{
///         evaluator::{context::Context, core::Interpreter},
///         value::core::Value,
///     },
///     run_source,
/// };
///
/// let mut interpreter = Interpreter::with_io(Box::new(io::empty()), Box::new(io::sink()));
/// let context = Context::global();
///
/// run_source("x = 20", "<stdin>", &mut interpreter, &context).unwrap();
/// let result = run_source("x + 1", "<stdin>", &mut interpreter, &context).unwrap();
/// assert_eq!(result, Some(Value::number(21.0)));
/// ```
pub fn run_source(source: &str,
                  file_name: &str,
                  interpreter: &mut Interpreter,
                  context: &Rc<Context>)
                  -> Result<Option<Value>, Error> {
    let tokens = tokenize(source, file_name)?;
    let program = parse(&tokens)?;
    interpreter.run(&program, context)
}

/// Returns the final evaluation result of `source`.
///
/// Runs the program in a fresh global scope with standard input and output.
/// The result is the value of the last statement, or `None` when it
/// produced no value.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use luminary::{get_result, interpreter::value::core::Value};
///
/// let result = get_result("func square(x) -> x * x; square(4)").unwrap();
/// assert_eq!(result, Some(Value::number(16.0)));
///
/// // Comparing a number with a string is a runtime error.
/// assert!(get_result("1 < \"a\"").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Option<Value>, Error> {
    let mut interpreter = Interpreter::new();
    let context = Context::global();
    run_source(source, STDIN_FILE_NAME, &mut interpreter, &context)
}
