use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        evaluator::{
            context::Context,
            core::{EvalResult, Interpreter, RuntimeResult},
        },
        position::Span,
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation.
    ///
    /// The right operand is evaluated before the left one. Both are always
    /// evaluated, including for `and` and `or`. The result carries the span
    /// of the whole expression.
    ///
    /// # Errors
    /// Propagates any signal from the operands, and the error of the
    /// operator when the left value does not support it with the right one.
    pub fn eval_binary_op(&mut self,
                          op: BinaryOperator,
                          left: &Node,
                          right: &Node,
                          span: &Span,
                          context: &Rc<Context>)
                          -> RuntimeResult {
        let right = self.evaluate_value(right, context)?;
        let left = self.evaluate_value(left, context)?;
        let result = Self::apply_binary(op, &left, &right)?;

        Ok(Some(result.with_span(span.clone())))
    }

    /// Applies `op` to two values, dispatching on the left one.
    ///
    /// # Example
    /// ```
    /// use luminary::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let sum = Interpreter::apply_binary(BinaryOperator::Add,
    ///                                     &Value::number(2.0),
    ///                                     &Value::number(3.0)).unwrap();
    /// assert_eq!(sum, Value::number(5.0));
    /// ```
    pub fn apply_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        match op {
            BinaryOperator::Add => left.add_to(right),
            BinaryOperator::Sub => left.sub_by(right),
            BinaryOperator::Mul => left.mul_by(right),
            BinaryOperator::Div => left.div_by(right),
            BinaryOperator::Mod => left.modulo(right),
            BinaryOperator::Pow => left.pow(right),
            BinaryOperator::Equal => Ok(left.is_equal_to(right)),
            BinaryOperator::NotEqual => Ok(left.is_not_equal_to(right)),
            BinaryOperator::Greater => left.is_greater_than(right),
            BinaryOperator::GreaterEqual => left.is_greater_than_or_equal(right),
            BinaryOperator::Less => left.is_less_than(right),
            BinaryOperator::LessEqual => left.is_less_than_or_equal(right),
            BinaryOperator::And => Ok(left.and(right)),
            BinaryOperator::Or => Ok(left.or(right)),
        }
    }
}
