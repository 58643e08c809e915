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

impl Interpreter {
    /// Evaluates the elements of a list literal from left to right into a
    /// new list.
    pub(in crate::interpreter::evaluator) fn eval_list_literal(&mut self,
                                                               elements: &[Node],
                                                               span: &Span,
                                                               context: &Rc<Context>)
                                                               -> RuntimeResult {
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            values.push(self.evaluate_value(element, context)?);
        }
        Ok(Some(Value::list(values).with_span(span.clone())))
    }

    /// Evaluates only the branch selected by the condition.
    pub(in crate::interpreter::evaluator) fn eval_ternary(&mut self,
                                                          condition: &Node,
                                                          left: &Node,
                                                          right: &Node,
                                                          context: &Rc<Context>)
                                                          -> RuntimeResult {
        if self.evaluate_value(condition, context)?.is_true() {
            self.evaluate(left, context)
        } else {
            self.evaluate(right, context)
        }
    }

    /// Reads a variable. An unbound name reads as `null`.
    pub(in crate::interpreter::evaluator) fn eval_var_access(name: &str,
                                                             span: &Span,
                                                             context: &Context)
                                                             -> Value {
        context.get(name).unwrap_or_else(Value::null).with_span(span.clone())
    }

    /// Binds a name in the current scope and yields the assigned value.
    pub(in crate::interpreter::evaluator) fn eval_var_assign(&mut self,
                                                             name: &str,
                                                             value: &Node,
                                                             context: &Rc<Context>)
                                                             -> RuntimeResult {
        let value = self.evaluate_value(value, context)?;
        context.set(name, value.clone());
        Ok(Some(value))
    }

    /// Evaluates `target[index]` or `target[index:to]`.
    ///
    /// The target is evaluated first, then the index, then the slice end.
    ///
    /// # Errors
    /// Fails when the index or slice end is not a number, when the target is
    /// not a list, or when an index is out of range.
    pub(in crate::interpreter::evaluator) fn eval_element_access(&mut self,
                                                                 target: &Node,
                                                                 index: &Node,
                                                                 to: Option<&Node>,
                                                                 span: &Span,
                                                                 context: &Rc<Context>)
                                                                 -> RuntimeResult {
        let target_value = self.evaluate_value(target, context)?;
        let index = self.evaluate_number(index, "Expected a number for the index", context)?;
        let to = match to {
            Some(node) => {
                Some(self.evaluate_number(node, "Expected a number for the to-index", context)?)
            },
            None => None,
        };

        let Some(list) = target_value.as_list() else {
            return Err(Error::runtime(format!("Can't index into a {}", target_value.type_name()),
                                      target_value.span.clone())
                       .into());
        };
        let element = match to {
            Some(to) => list.slice(index, to, span)?,
            None => list.get(index, span)?,
        };

        Ok(Some(element.with_span(span.clone())))
    }

    /// Evaluates `name[index] = value`, mutating the list in place.
    ///
    /// The name is resolved first, then the index and the value are both
    /// evaluated before the index is checked to be a number.
    ///
    /// # Errors
    /// Fails when `name` is not bound to a list, when the index is not a
    /// number, or when it is out of range.
    pub(in crate::interpreter::evaluator) fn eval_element_assign(&mut self,
                                                                 name: &str,
                                                                 index: &Node,
                                                                 value: &Node,
                                                                 span: &Span,
                                                                 context: &Rc<Context>)
                                                                 -> RuntimeResult {
        let Some(list) = context.get(name).and_then(|target| target.as_list().cloned()) else {
            return Err(Error::runtime("Expected a list to assign it's element value",
                                      Some(span.clone()))
                       .into());
        };
        let position = self.evaluate_value(index, context)?;
        let value = self.evaluate_value(value, context)?;
        let Some(position) = position.as_number() else {
            return Err(Error::runtime("Expected a number for the index", Some(index.span().clone()))
                       .into());
        };
        list.set(position, value.clone(), span)?;

        Ok(Some(value))
    }

    /// Tries each `if`/`elif` case in order and evaluates the body of the
    /// first one whose condition is truthy, falling back to `else`.
    ///
    /// Yields no value when nothing matches and there is no `else`.
    pub(in crate::interpreter::evaluator) fn eval_if(&mut self,
                                                     cases: &[(Node, Node)],
                                                     else_case: Option<&Node>,
                                                     context: &Rc<Context>)
                                                     -> RuntimeResult {
        for (condition, body) in cases {
            if self.evaluate_value(condition, context)?.is_true() {
                return self.evaluate(body, context);
            }
        }
        match else_case {
            Some(body) => self.evaluate(body, context),
            None => Ok(None),
        }
    }

    /// Raises the `return` signal with the value, or `null`.
    pub(in crate::interpreter::evaluator) fn eval_return(&mut self,
                                                         value: Option<&Node>,
                                                         span: &Span,
                                                         context: &Rc<Context>)
                                                         -> RuntimeResult {
        let value = match value {
            Some(node) => self.evaluate_value(node, context)?,
            None => Value::null().with_span(span.clone()),
        };
        Err(Signal::Return(value))
    }

    /// Evaluates statements in order in the current scope and yields the
    /// last statement's result.
    pub(in crate::interpreter::evaluator) fn eval_block(&mut self,
                                                        statements: &[Node],
                                                        context: &Rc<Context>)
                                                        -> RuntimeResult {
        let mut last = None;
        for statement in statements {
            last = self.evaluate(statement, context)?;
        }
        Ok(last)
    }

    /// Evaluates `node` and requires a number, failing with `message` at the
    /// node's span otherwise.
    pub(in crate::interpreter::evaluator) fn evaluate_number(&mut self,
                                                             node: &Node,
                                                             message: &str,
                                                             context: &Rc<Context>)
                                                             -> Result<f64, Signal> {
        let value = self.evaluate_value(node, context)?;
        value.as_number()
             .ok_or_else(|| Error::runtime(message, Some(node.span().clone())).into())
    }
}
