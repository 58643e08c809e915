use std::{fmt, rc::Rc};

use crate::{
    ast::FunctionDef,
    error::Error,
    interpreter::{
        evaluator::{
            context::Context,
            core::{EvalResult, Interpreter, RuntimeResult},
        },
        position::Span,
        value::core::{Value, ValueKind},
    },
};

/// A user-defined function: its definition plus the scope it closes over.
///
/// The captured scope is shared, not copied, so the function observes later
/// assignments to variables it captured.
pub struct Function {
    definition: Rc<FunctionDef>,
    scope:      Rc<Context>,
}

impl Function {
    #[must_use]
    pub const fn new(definition: Rc<FunctionDef>, scope: Rc<Context>) -> Self {
        Self { definition, scope }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.definition.name.as_deref()
    }

    #[must_use]
    pub fn definition(&self) -> &FunctionDef {
        &self.definition
    }

    /// The scope the function was defined in.
    #[must_use]
    pub const fn scope(&self) -> &Rc<Context> {
        &self.scope
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("name", &self.name())
         .field("params", &self.definition.params)
         .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "<function {}({})>",
               self.name().unwrap_or("<anonymous>"),
               self.definition.params.join(", "))
    }
}

/// Signature of a builtin: the interpreter (for I/O), the evaluated
/// arguments and the span of the call.
pub type NativeFn = fn(&mut Interpreter, &[Value], &Span) -> EvalResult<Option<Value>>;

/// The number of arguments a builtin accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
}

impl Arity {
    /// Tests whether `n` arguments satisfy this arity.
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(counts) => counts.contains(&n),
            Self::AtLeast(m) => n >= *m,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = |n: usize| if n == 1 { "" } else { "s" };
        match self {
            Self::Exact(n) => write!(f, "{n} argument{}", plural(*n)),
            Self::OneOf(counts) => {
                let counts = counts.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{} arguments", counts.join(" or "))
            },
            Self::AtLeast(n) => write!(f, "at least {n} argument{}", plural(*n)),
        }
    }
}

/// A function implemented by the host and installed in the global scope.
#[derive(Debug)]
pub struct BuiltinFunction {
    pub name:   &'static str,
    /// Parameter names, used only for display.
    pub params: &'static [&'static str],
    pub arity:  Arity,
    pub func:   NativeFn,
}

impl BuiltinFunction {
    /// Checks the argument count and runs the native implementation.
    ///
    /// # Errors
    /// `<name> expected <arity> but got <n>` on an arity mismatch, or
    /// whatever the implementation reports.
    pub fn invoke(&self,
                  interpreter: &mut Interpreter,
                  arguments: &[Value],
                  span: &Span)
                  -> EvalResult<Option<Value>> {
        if !self.arity.check(arguments.len()) {
            return Err(Error::runtime(format!("{} expected {} but got {}",
                                              self.name,
                                              self.arity,
                                              arguments.len()),
                                      Some(span.clone())));
        }
        tracing::trace!(name = self.name, args = arguments.len(), "calling builtin");
        (self.func)(interpreter, arguments, span)
    }
}

impl fmt::Display for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "builtin:{}({})", self.name, self.params.join(", "))
    }
}

impl Value {
    /// Calls the value with already evaluated arguments.
    ///
    /// User functions run their body in a fresh scope, builtins run their
    /// native implementation, and lists index (one argument) or slice (two
    /// arguments).
    ///
    /// # Errors
    /// Calling a number, string or null is a runtime error; otherwise the
    /// callee's own errors are passed through.
    pub fn call(&self,
                interpreter: &mut Interpreter,
                arguments: Vec<Self>,
                span: &Span)
                -> RuntimeResult {
        match &self.kind {
            ValueKind::Function(function) => interpreter.call_function(function, arguments, span),
            ValueKind::Builtin(builtin) => Ok(builtin.invoke(interpreter, &arguments, span)?),
            ValueKind::List(list) => Ok(Some(list.call(&arguments, span)?)),
            ValueKind::Number(_) | ValueKind::String(_) | ValueKind::Null => {
                Err(Error::runtime(format!("Can't call a {}", self.type_name()),
                                   self.span.clone().or_else(|| Some(span.clone()))).into())
            },
        }
    }
}
