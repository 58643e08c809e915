use crate::{
    error::Error,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            function::core::expect_string,
        },
        position::Span,
        value::core::Value,
    },
    util::num::f64_to_exit_code,
};

/// Prompt written by `scan` when none is given.
pub const DEFAULT_SCAN_PROMPT: &str = "> ";

/// Writes the display form of every argument, separated by spaces, and a
/// newline when `newline` is set.
///
/// # Returns
/// No value.
///
/// # Example
/// ```text
/// print("a", 1)      // writes "a 1"
/// println([1, 2])    // writes "[1, 2]\n"
/// ```
pub fn print(interpreter: &mut Interpreter,
             args: &[Value],
             span: &Span,
             newline: bool)
             -> EvalResult<Option<Value>> {
    let mut text = args.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
    if newline {
        text.push('\n');
    }
    interpreter.write_output(&text, span)?;
    Ok(None)
}

/// Writes a prompt and reads one line of input.
///
/// # Returns
/// The line without its line ending, or an empty string at end of input.
///
/// # Errors
/// Fails when the prompt is not a string or the streams fail.
pub fn scan(interpreter: &mut Interpreter, args: &[Value], span: &Span) -> EvalResult<Option<Value>> {
    let prompt = match args.first() {
        Some(prompt) => expect_string("scan", prompt, span)?,
        None => DEFAULT_SCAN_PROMPT,
    };
    let line = interpreter.read_line(prompt)
                          .map_err(|err| Error::runtime(format!("Failed to read input: {err}"),
                                                        Some(span.clone())))?;
    Ok(Some(Value::string(line.unwrap_or_default())))
}

/// Flushes the output and terminates the process with the given code
/// (default `0`). Fractional codes are truncated.
///
/// # Errors
/// Fails when the code is not a number. Does not return otherwise.
pub fn exit(interpreter: &mut Interpreter, args: &[Value], span: &Span) -> EvalResult<Option<Value>> {
    let code = match args.first() {
        Some(value) => {
            let number = value.as_number().ok_or_else(|| {
                                             Error::runtime(format!("exit expected a number but got a {}",
                                                                    value.type_name()),
                                                            value.span.clone().or_else(|| Some(span.clone())))
                                         })?;
            f64_to_exit_code(number)
        },
        None => 0,
    };
    if let Err(err) = interpreter.flush() {
        tracing::warn!(%err, "failed to flush output before exiting");
    }
    tracing::debug!(code, "exit called");
    std::process::exit(code)
}
