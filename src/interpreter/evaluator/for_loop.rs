use std::rc::Rc;

use crate::{
    ast::Node,
    error::Error,
    interpreter::{
        evaluator::{
            context::Context,
            core::{Interpreter, RuntimeResult, Signal},
        },
        position::Span,
        value::core::Value,
    },
};

/// What a loop does after its body ran once.
enum Flow {
    Next,
    Stop,
}

/// Handles `break` and `continue` from one run of a loop body and passes
/// every other signal on.
fn body_flow(result: RuntimeResult) -> Result<Flow, Signal> {
    match result {
        Ok(_) | Err(Signal::Continue(_)) => Ok(Flow::Next),
        Err(Signal::Break(_)) => Ok(Flow::Stop),
        Err(signal) => Err(signal),
    }
}

impl Interpreter {
    /// Evaluates a counting loop `for var = from : to by step body`.
    ///
    /// The bounds and the step (default `1`) are evaluated once, in that
    /// order. The loop runs while the cursor has not passed `to` in the
    /// direction of the step, binding `var` in the current scope before each
    /// run of the body.
    ///
    /// When the loop ends normally `var` is removed from the scope. After a
    /// `break` it keeps the value of the iteration that broke out.
    ///
    /// # Errors
    /// - `Expected a number after '='`, `':'` or `'by'` for non-number
    ///   bounds or step,
    /// - a zero step, which would never terminate,
    /// - any error or `return` raised by the body.
    ///
    /// Yields no value.
    #[allow(clippy::too_many_arguments)]
    pub(in crate::interpreter::evaluator) fn eval_for(&mut self,
                                                      var: &str,
                                                      from: &Node,
                                                      to: &Node,
                                                      step: Option<&Node>,
                                                      body: &Node,
                                                      span: &Span,
                                                      context: &Rc<Context>)
                                                      -> RuntimeResult {
        let mut cursor = self.evaluate_number(from, "Expected a number after '='", context)?;
        let end = self.evaluate_number(to, "Expected a number after ':'", context)?;
        let step = match step {
            Some(node) => {
                let step = self.evaluate_number(node, "Expected a number after 'by'", context)?;
                if step == 0.0 {
                    return Err(Error::runtime("The step of a 'for' loop can't be zero",
                                              Some(node.span().clone()))
                               .into());
                }
                step
            },
            None => 1.0,
        };

        loop {
            let in_range = if step > 0.0 { cursor <= end } else { cursor >= end };
            if !in_range {
                context.remove(var);
                break;
            }
            tracing::trace!(var, value = cursor, "for iteration");
            context.set(var, Value::number(cursor).with_span(span.clone()));
            cursor += step;

            if let Flow::Stop = body_flow(self.evaluate(body, context))? {
                break;
            }
        }

        Ok(None)
    }

    /// Evaluates `each item in list body`.
    ///
    /// Runs once per element the list held on entry, reading each element
    /// from the live list just before its pass, so element assignments made
    /// by the body are seen. `item` is bound in the current scope and removed
    /// afterwards, whether the loop finished or was left with `break`.
    ///
    /// # Errors
    /// `Expected a list in 'each'` when the iterable is not a list, and any
    /// error or `return` raised by the body.
    pub(in crate::interpreter::evaluator) fn eval_each(&mut self,
                                                       item: &str,
                                                       list: &Node,
                                                       body: &Node,
                                                       context: &Rc<Context>)
                                                       -> RuntimeResult {
        let list_value = self.evaluate_value(list, context)?;
        let Some(elements) = list_value.as_list() else {
            return Err(Error::runtime("Expected a list in 'each'", Some(list.span().clone())).into());
        };

        for index in 0..elements.len() {
            let Some(element) = elements.at(index) else {
                break;
            };
            tracing::trace!(item, index, "each iteration");
            context.set(item, element);
            if let Flow::Stop = body_flow(self.evaluate(body, context))? {
                break;
            }
        }
        context.remove(item);

        Ok(None)
    }

    /// Evaluates `while condition body`, checking the condition before every
    /// iteration. Yields no value.
    pub(in crate::interpreter::evaluator) fn eval_while(&mut self,
                                                        condition: &Node,
                                                        body: &Node,
                                                        context: &Rc<Context>)
                                                        -> RuntimeResult {
        while self.evaluate_value(condition, context)?.is_true() {
            if let Flow::Stop = body_flow(self.evaluate(body, context))? {
                break;
            }
        }

        Ok(None)
    }
}
