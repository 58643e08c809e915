use std::rc::Rc;

use crate::{
    ast::{Node, UnaryOperator},
    interpreter::{
        evaluator::{
            context::Context,
            core::{Interpreter, RuntimeResult},
        },
        position::Span,
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a prefix operation.
    ///
    /// - `-x` multiplies the operand by `-1`,
    /// - `+x` yields the operand unchanged,
    /// - `not x` yields `1` for a falsy operand and `0` otherwise.
    ///
    /// # Errors
    /// Propagates signals from the operand, and fails when the operand
    /// cannot be multiplied by a number.
    pub fn eval_unary_op(&mut self,
                         op: UnaryOperator,
                         operand: &Node,
                         span: &Span,
                         context: &Rc<Context>)
                         -> RuntimeResult {
        let value = self.evaluate_value(operand, context)?;
        let result = match op {
            UnaryOperator::Negate => value.mul_by(&Value::number(-1.0))?,
            UnaryOperator::Identity => value,
            UnaryOperator::Not => value.not(),
        };

        Ok(Some(result.with_span(span.clone())))
    }
}
