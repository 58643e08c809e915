use std::{
    io::{self, BufRead, Write},
    rc::Rc,
};

use crate::{
    ast::Node,
    error::Error,
    interpreter::{evaluator::context::Context, position::Span, value::core::Value},
    util::stack::ensure_sufficient_stack,
};

/// Result type for operations that can only fail with an error.
pub type EvalResult<T> = Result<T, Error>;

/// Result of evaluating a node.
///
/// - `Ok(Some(value))`: the node produced a value.
/// - `Ok(None)`: the node produced no value (loops, `print`, an `if` with no
///   matching branch).
/// - `Err(signal)`: evaluation must unwind; see [`Signal`].
pub type RuntimeResult = Result<Option<Value>, Signal>;

/// Default limit on nested user function calls.
pub const DEFAULT_MAX_DEPTH: usize = 2000;

/// Non-local exits that unwind through the evaluator.
///
/// Every evaluation step propagates a signal with `?` before doing anything
/// else. Loops catch `Break` and `Continue`, function calls catch `Return`,
/// and `Error` reaches the caller of [`Interpreter::run`].
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    Return(Value),
    Break(Span),
    Continue(Span),
    Error(Error),
}

impl From<Error> for Signal {
    fn from(error: Error) -> Self {
        Self::Error(error)
    }
}

impl Signal {
    /// Converts a signal that escaped every handler into an error.
    #[must_use]
    pub fn into_error(self) -> Error {
        match self {
            Self::Error(error) => error,
            Self::Break(span) => Error::runtime("'break' outside of a loop", Some(span)),
            Self::Continue(span) => Error::runtime("'continue' outside of a loop", Some(span)),
            Self::Return(value) => Error::runtime("'return' outside of a function", value.span),
        }
    }
}

/// Tunable limits of an [`Interpreter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterOptions {
    /// Maximum depth of nested user function calls.
    pub max_depth: usize,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// Walks the syntax tree and evaluates it.
///
/// The interpreter owns the input and output streams used by the I/O
/// builtins and tracks the current call depth. Variables live in the
/// [`Context`] passed to each call, so one interpreter can run many programs
/// against one persistent scope, as the REPL does.
pub struct Interpreter {
    pub options: InterpreterOptions,
    depth:       usize,
    input:       Box<dyn BufRead>,
    output:      Box<dyn Write>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter reading standard input and writing standard
    /// output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_io(Box::new(io::stdin().lock()), Box::new(io::stdout()))
    }

    /// Creates an interpreter over the given streams.
    ///
    /// # Example
    /// ```
    /// use std::io;
    ///
    /// use luminary::interpreter::evaluator::core::Interpreter;
    ///
    /// let interpreter = Interpreter::with_io(Box::new(io::empty()), Box::new(io::sink()));
    /// assert_eq!(interpreter.depth(), 0);
    /// ```
    #[must_use]
    pub fn with_io(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self { options: InterpreterOptions::default(),
               depth: 0,
               input,
               output }
    }

    #[must_use]
    pub fn with_options(mut self, options: InterpreterOptions) -> Self {
        self.options = options;
        self
    }

    /// Current depth of nested user function calls.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Runs a parsed program in `context`.
    ///
    /// A top-level `return` ends the program with its value. A `break` or
    /// `continue` outside of any loop is reported as an error.
    ///
    /// # Errors
    /// Returns the first error raised during evaluation.
    pub fn run(&mut self, program: &Node, context: &Rc<Context>) -> Result<Option<Value>, Error> {
        tracing::debug!("evaluating program");
        match self.evaluate(program, context) {
            Ok(value) => Ok(value),
            Err(Signal::Return(value)) => Ok(Some(value)),
            Err(signal) => Err(signal.into_error()),
        }
    }

    /// Evaluates `node` in `context`.
    ///
    /// This is the main entry point of the evaluator; every construct
    /// recurses through it. The match is exhaustive over [`Node`].
    pub fn evaluate(&mut self, node: &Node, context: &Rc<Context>) -> RuntimeResult {
        ensure_sufficient_stack(|| self.dispatch(node, context))
    }

    /// Evaluates `node` and substitutes `null` when it yields no value.
    pub fn evaluate_value(&mut self, node: &Node, context: &Rc<Context>) -> Result<Value, Signal> {
        Ok(self.evaluate(node, context)?
               .unwrap_or_else(|| Value::null().with_span(node.span().clone())))
    }

    fn dispatch(&mut self, node: &Node, context: &Rc<Context>) -> RuntimeResult {
        match node {
            Node::Number { value, span } => {
                Ok(Some(Value::number(*value).with_span(span.clone())))
            },
            Node::String { value, span } => {
                Ok(Some(Value::string(value.as_str()).with_span(span.clone())))
            },
            Node::Null { span } => Ok(Some(Value::null().with_span(span.clone()))),
            Node::List { elements, span } => self.eval_list_literal(elements, span, context),
            Node::Ternary { condition,
                            left,
                            right,
                            .. } => self.eval_ternary(condition, left, right, context),
            Node::BinaryOp { op,
                             left,
                             right,
                             span, } => self.eval_binary_op(*op, left, right, span, context),
            Node::UnaryOp { op, operand, span } => self.eval_unary_op(*op, operand, span, context),
            Node::VarAccess { name, span } => Ok(Some(Self::eval_var_access(name, span, context))),
            Node::VarAssign { name, value, .. } => self.eval_var_assign(name, value, context),
            Node::ElementAccess { target,
                                  index,
                                  to,
                                  span, } => {
                self.eval_element_access(target, index, to.as_deref(), span, context)
            },
            Node::ElementAssign { name,
                                  index,
                                  value,
                                  span, } => self.eval_element_assign(name, index, value, span, context),
            Node::If { cases, else_case, .. } => self.eval_if(cases, else_case.as_deref(), context),
            Node::For { var,
                        from,
                        to,
                        step,
                        body,
                        span, } => self.eval_for(var, from, to, step.as_deref(), body, span, context),
            Node::Each { item, list, body, .. } => self.eval_each(item, list, body, context),
            Node::While { condition, body, .. } => self.eval_while(condition, body, context),
            Node::Break { span } => Err(Signal::Break(span.clone())),
            Node::Continue { span } => Err(Signal::Continue(span.clone())),
            Node::FunctionDef(definition) => Ok(Some(Self::eval_function_def(definition, context))),
            Node::FunctionCall { callee,
                                 arguments,
                                 span, } => self.eval_function_call(callee, arguments, span, context),
            Node::Return { value, span } => self.eval_return(value.as_deref(), span, context),
            Node::Block { statements, .. } => self.eval_block(statements, context),
        }
    }

    /// Writes `text` to the interpreter's output.
    ///
    /// # Errors
    /// Fails when the underlying stream does.
    pub fn write_output(&mut self, text: &str, span: &Span) -> EvalResult<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(|err| Error::runtime(format!("Failed to write output: {err}"), Some(span.clone())))
    }

    /// Writes `prompt`, then reads one line of input without its line
    /// ending. Returns `None` at end of input.
    ///
    /// # Errors
    /// Fails when either stream does.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Flushes the output stream.
    ///
    /// # Errors
    /// Fails when the underlying stream does.
    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    pub(in crate::interpreter::evaluator) fn enter_call(&mut self) -> bool {
        if self.depth >= self.options.max_depth {
            return false;
        }
        self.depth += 1;
        true
    }

    pub(in crate::interpreter::evaluator) fn leave_call(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
