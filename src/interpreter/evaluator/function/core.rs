use std::rc::Rc;

use crate::{
    ast::{FunctionDef, Node},
    error::Error,
    interpreter::{
        evaluator::{
            context::Context,
            core::{EvalResult, Interpreter, RuntimeResult, Signal},
            function::{io, list, string},
        },
        position::Span,
        value::{
            core::Value,
            function::{Arity, BuiltinFunction, Function},
            list::List,
        },
    },
};

/// Defines the builtin functions by generating a static table and a name
/// list.
///
/// Each entry provides the name, the parameter names shown when the
/// builtin is printed, an arity, and the native implementation.
///
/// The macro produces:
/// - `BUILTIN_TABLE`, installed into the global scope by
///   [`Context::global`],
/// - `BUILTIN_FUNCTIONS`, the list of builtin names.
macro_rules! builtin_functions {
    (
        $(
            $name:literal ( $($param:literal),* ) => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        pub static BUILTIN_TABLE: &[BuiltinFunction] = &[
            $(
                BuiltinFunction { name: $name, params: &[$($param),*], arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "print"("values")                 => { arity: Arity::AtLeast(0), func: |i, args, span| io::print(i, args, span, false) },
    "println"("values")               => { arity: Arity::AtLeast(0), func: |i, args, span| io::print(i, args, span, true) },
    "scan"("prompt")                  => { arity: Arity::OneOf(&[0, 1]), func: io::scan },
    "exit"("code")                    => { arity: Arity::OneOf(&[0, 1]), func: io::exit },
    "len"("value")                    => { arity: Arity::Exact(1), func: string::len },
    "trim"("text")                    => { arity: Arity::Exact(1), func: |_, args, span| string::transform("trim", args, span, |s| s.trim().to_owned()) },
    "upper"("text")                   => { arity: Arity::Exact(1), func: |_, args, span| string::transform("upper", args, span, str::to_uppercase) },
    "lower"("text")                   => { arity: Arity::Exact(1), func: |_, args, span| string::transform("lower", args, span, str::to_lowercase) },
    "replace"("text", "old", "new")   => { arity: Arity::Exact(3), func: string::replace },
    "append"("list", "values")        => { arity: Arity::AtLeast(2), func: list::append },
    "prepend"("list", "values")       => { arity: Arity::AtLeast(2), func: list::prepend },
    "shift"("list")                   => { arity: Arity::Exact(1), func: list::shift },
    "pop"("list")                     => { arity: Arity::Exact(1), func: list::pop },
}

/// Requires `value` to be a string argument of builtin `name`.
pub(in crate::interpreter::evaluator) fn expect_string<'v>(name: &str,
                                                           value: &'v Value,
                                                           span: &Span)
                                                           -> EvalResult<&'v str> {
    value.as_str().ok_or_else(|| {
                      Error::runtime(format!("{name} expected a string but got a {}", value.type_name()),
                                     value.span.clone().or_else(|| Some(span.clone())))
                  })
}

/// Requires `value` to be a list argument of builtin `name`.
pub(in crate::interpreter::evaluator) fn expect_list<'v>(name: &str,
                                                         value: &'v Value,
                                                         span: &Span)
                                                         -> EvalResult<&'v List> {
    value.as_list().ok_or_else(|| {
                       Error::runtime(format!("{name} expected a list but got a {}", value.type_name()),
                                      value.span.clone().or_else(|| Some(span.clone())))
                   })
}

impl Interpreter {
    /// Creates a function value closing over `context`.
    ///
    /// A named function is also bound to its name in `context` right away,
    /// which lets its body call itself.
    pub(in crate::interpreter::evaluator) fn eval_function_def(definition: &Rc<FunctionDef>,
                                                               context: &Rc<Context>)
                                                               -> Value {
        let function = Value::function(Function::new(Rc::clone(definition), Rc::clone(context)))
            .with_span(definition.span.clone());
        if let Some(name) = &definition.name {
            context.set(name, function.clone());
        }
        function
    }

    /// Evaluates a call: the callee first, then the arguments from left to
    /// right, then the call itself.
    pub(in crate::interpreter::evaluator) fn eval_function_call(&mut self,
                                                                callee: &Node,
                                                                arguments: &[Node],
                                                                span: &Span,
                                                                context: &Rc<Context>)
                                                                -> RuntimeResult {
        let callee = self.evaluate_value(callee, context)?;
        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.evaluate_value(argument, context)?);
        }

        let result = callee.call(self, values, span)?;
        Ok(result.map(|value| value.with_span(span.clone())))
    }

    /// Runs a user function with already evaluated arguments.
    ///
    /// The body runs in a new scope whose parent is the scope the function
    /// was defined in, with each parameter bound to its argument. A `return`
    /// inside the body ends the call with its value; otherwise the call
    /// yields whatever the body produced.
    ///
    /// # Errors
    /// - `<name> expected N argument(s) but got M` on an argument count
    ///   mismatch,
    /// - `Maximum recursion depth of N exceeded` when calls nest deeper than
    ///   the configured limit,
    /// - a `break` or `continue` that escapes the body,
    /// - any error raised by the body.
    pub fn call_function(&mut self,
                         function: &Function,
                         arguments: Vec<Value>,
                         span: &Span)
                         -> RuntimeResult {
        let definition = function.definition();
        let name = function.name().unwrap_or("<anonymous>");
        if arguments.len() != definition.params.len() {
            return Err(Error::runtime(format!("{name} expected {} argument(s) but got {}",
                                              definition.params.len(),
                                              arguments.len()),
                                      Some(span.clone()))
                       .into());
        }
        if !self.enter_call() {
            return Err(Error::runtime(format!("Maximum recursion depth of {} exceeded",
                                              self.options.max_depth),
                                      Some(span.clone()))
                       .into());
        }
        tracing::trace!(name, depth = self.depth(), "calling function");

        let scope = Context::child(function.scope());
        for (param, argument) in definition.params.iter().zip(arguments) {
            scope.set(param, argument);
        }
        let result = self.evaluate(&definition.body, &scope);
        self.leave_call();

        match result {
            Ok(value) => Ok(value),
            Err(Signal::Return(value)) => Ok(Some(value)),
            Err(signal @ (Signal::Break(_) | Signal::Continue(_))) => Err(signal.into_error().into()),
            Err(signal @ Signal::Error(_)) => Err(signal),
        }
    }
}
