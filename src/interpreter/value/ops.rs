use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::Error,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Value, ValueKind},
    },
    util::num::f64_to_index,
};

impl Value {
    /// `self + other`: number addition, string concatenation, or list
    /// concatenation into a new list.
    ///
    /// # Errors
    /// `Invalid Syntax` for any other combination.
    ///
    /// # Example
    /// ```
    /// use luminary::interpreter::value::core::Value;
    ///
    /// let joined = Value::string("lumi").add_to(&Value::string("nary")).unwrap();
    /// assert_eq!(joined, Value::string("luminary"));
    /// ```
    pub fn add_to(&self, other: &Self) -> EvalResult<Self> {
        match (&self.kind, &other.kind) {
            (ValueKind::Number(a), ValueKind::Number(b)) => Ok(Self::number(a + b)),
            (ValueKind::String(a), ValueKind::String(b)) => Ok(Self::string(format!("{a}{b}"))),
            (ValueKind::List(a), ValueKind::List(b)) => Ok(Self::new(ValueKind::List(a.concat(b)))),
            (ValueKind::List(_), _) => {
                Err(Error::invalid_syntax("Only lists can be concatenated with a list",
                                          self.span.clone()))
            },
            _ => Err(self.illegal_operation(BinaryOperator::Add, other)),
        }
    }

    pub fn sub_by(&self, other: &Self) -> EvalResult<Self> {
        match (&self.kind, &other.kind) {
            (ValueKind::Number(a), ValueKind::Number(b)) => Ok(Self::number(a - b)),
            _ => Err(self.illegal_operation(BinaryOperator::Sub, other)),
        }
    }

    /// `self * other`: number multiplication, or a string repeated a number
    /// of times. The count is truncated; a negative count gives `""`.
    pub fn mul_by(&self, other: &Self) -> EvalResult<Self> {
        match (&self.kind, &other.kind) {
            (ValueKind::Number(a), ValueKind::Number(b)) => Ok(Self::number(a * b)),
            (ValueKind::String(s), ValueKind::Number(n)) => {
                Ok(Self::string(s.repeat(f64_to_index(*n).unwrap_or(0))))
            },
            _ => Err(self.illegal_operation(BinaryOperator::Mul, other)),
        }
    }

    /// # Errors
    /// `Can't divide by zero` when `other` is exactly `0`.
    pub fn div_by(&self, other: &Self) -> EvalResult<Self> {
        match (&self.kind, &other.kind) {
            (ValueKind::Number(a), ValueKind::Number(b)) => {
                if *b == 0.0 {
                    return Err(other.division_by_zero());
                }
                Ok(Self::number(a / b))
            },
            _ => Err(self.illegal_operation(BinaryOperator::Div, other)),
        }
    }

    /// Floating point remainder, with the sign of `self`.
    ///
    /// # Errors
    /// `Can't divide by zero` when `other` is exactly `0`.
    pub fn modulo(&self, other: &Self) -> EvalResult<Self> {
        match (&self.kind, &other.kind) {
            (ValueKind::Number(a), ValueKind::Number(b)) => {
                if *b == 0.0 {
                    return Err(other.division_by_zero());
                }
                Ok(Self::number(a % b))
            },
            _ => Err(self.illegal_operation(BinaryOperator::Mod, other)),
        }
    }

    pub fn pow(&self, other: &Self) -> EvalResult<Self> {
        match (&self.kind, &other.kind) {
            (ValueKind::Number(a), ValueKind::Number(b)) => Ok(Self::number(a.powf(*b))),
            _ => Err(self.illegal_operation(BinaryOperator::Pow, other)),
        }
    }

    /// Language equality. Numbers and strings compare by value and `null`
    /// equals `null`; lists and functions are never equal to anything.
    #[must_use]
    pub fn is_equal_to(&self, other: &Self) -> Self {
        let equal = match (&self.kind, &other.kind) {
            (ValueKind::Number(a), ValueKind::Number(b)) => a == b,
            (ValueKind::String(a), ValueKind::String(b)) => a == b,
            (ValueKind::Null, ValueKind::Null) => true,
            _ => false,
        };
        Self::boolean(equal)
    }

    #[must_use]
    pub fn is_not_equal_to(&self, other: &Self) -> Self {
        Self::boolean(!self.is_equal_to(other).is_true())
    }

    pub fn is_greater_than(&self, other: &Self) -> EvalResult<Self> {
        self.compare(other, BinaryOperator::Greater, Ordering::is_gt)
    }

    pub fn is_greater_than_or_equal(&self, other: &Self) -> EvalResult<Self> {
        self.compare(other, BinaryOperator::GreaterEqual, Ordering::is_ge)
    }

    pub fn is_less_than(&self, other: &Self) -> EvalResult<Self> {
        self.compare(other, BinaryOperator::Less, Ordering::is_lt)
    }

    pub fn is_less_than_or_equal(&self, other: &Self) -> EvalResult<Self> {
        self.compare(other, BinaryOperator::LessEqual, Ordering::is_le)
    }

    /// `other` when both operands are truthy, otherwise `0`.
    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        if self.is_true() && other.is_true() {
            other.clone()
        } else {
            Self::boolean(false)
        }
    }

    /// The first truthy operand, otherwise `0`.
    #[must_use]
    pub fn or(&self, other: &Self) -> Self {
        if self.is_true() {
            self.clone()
        } else if other.is_true() {
            other.clone()
        } else {
            Self::boolean(false)
        }
    }

    /// `1` for a falsy value, `0` for a truthy one.
    #[must_use]
    pub fn not(&self) -> Self {
        Self::boolean(!self.is_true())
    }

    /// Truthiness: non-zero numbers and non-empty strings are true, `null`
    /// is false, and lists and functions are always true.
    ///
    /// # Example
    /// ```
    /// use luminary::interpreter::value::core::Value;
    ///
    /// assert!(Value::number(2.0).is_true());
    /// assert!(!Value::string("").is_true());
    /// assert!(Value::list(vec![]).is_true());
    /// assert!(!Value::null().is_true());
    /// ```
    #[must_use]
    pub fn is_true(&self) -> bool {
        match &self.kind {
            ValueKind::Number(n) => *n != 0.0,
            ValueKind::String(s) => !s.is_empty(),
            ValueKind::List(_) | ValueKind::Function(_) | ValueKind::Builtin(_) => true,
            ValueKind::Null => false,
        }
    }

    fn compare(&self,
               other: &Self,
               op: BinaryOperator,
               test: fn(Ordering) -> bool)
               -> EvalResult<Self> {
        let ordering = match (&self.kind, &other.kind) {
            (ValueKind::Number(a), ValueKind::Number(b)) => a.partial_cmp(b),
            (ValueKind::String(a), ValueKind::String(b)) => Some(a.cmp(b)),
            _ => {
                return Err(Error::runtime(format!("Can't compare {} with {} using '{op}'",
                                                  self.type_name(),
                                                  other.type_name()),
                                          self.span.clone()));
            },
        };
        Ok(Self::boolean(ordering.is_some_and(test)))
    }

    fn illegal_operation(&self, op: BinaryOperator, other: &Self) -> Error {
        Error::invalid_syntax(format!("Invalid '{op}' operation on a {} with a {}",
                                      self.type_name(),
                                      other.type_name()),
                              self.span.clone())
    }

    fn division_by_zero(&self) -> Error {
        Error::runtime("Can't divide by zero", self.span.clone())
    }
}
