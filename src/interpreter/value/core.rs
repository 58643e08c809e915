use std::{fmt, rc::Rc};

use crate::interpreter::{
    position::Span,
    value::{
        function::{BuiltinFunction, Function},
        list::List,
    },
};

/// The payload of a runtime value.
#[derive(Debug, Clone)]
pub enum ValueKind {
    /// A double precision number. Booleans are numbers: `1` is true, `0` is
    /// false.
    Number(f64),
    /// An immutable string.
    String(Rc<str>),
    /// A list whose storage is shared by every copy of the value.
    List(List),
    /// A user-defined function closing over its defining scope.
    Function(Rc<Function>),
    /// A function implemented by the host.
    Builtin(&'static BuiltinFunction),
    Null,
}

/// A runtime value together with the span of the code that produced it.
///
/// Cloning a value is cheap: strings, lists and functions are reference
/// counted. Two clones of a list value share and observe the same elements.
///
/// `==` on `Value` compares payloads structurally and ignores spans. It is
/// meant for host code and tests; the language's own `==` is
/// [`Value::is_equal_to`].
#[derive(Debug, Clone)]
pub struct Value {
    pub kind: ValueKind,
    pub span: Option<Span>,
}

impl Value {
    #[must_use]
    pub const fn new(kind: ValueKind) -> Self {
        Self { kind, span: None }
    }

    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::new(ValueKind::Number(value))
    }

    /// `1` for `true`, `0` for `false`.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::number(if value { 1.0 } else { 0.0 })
    }

    #[must_use]
    pub fn string(value: impl Into<Rc<str>>) -> Self {
        Self::new(ValueKind::String(value.into()))
    }

    /// Creates a list value owning fresh storage for `elements`.
    ///
    /// # Example
    /// ```
    /// use luminary::interpreter::value::core::Value;
    ///
    /// let list = Value::list(vec![Value::number(1.0), Value::string("a")]);
    /// assert_eq!(list.to_string(), "[1, a]");
    /// ```
    #[must_use]
    pub fn list(elements: Vec<Self>) -> Self {
        Self::new(ValueKind::List(List::new(elements)))
    }

    #[must_use]
    pub fn function(function: Function) -> Self {
        Self::new(ValueKind::Function(Rc::new(function)))
    }

    #[must_use]
    pub const fn builtin(builtin: &'static BuiltinFunction) -> Self {
        Self::new(ValueKind::Builtin(builtin))
    }

    #[must_use]
    pub const fn null() -> Self {
        Self::new(ValueKind::Null)
    }

    /// Returns the value with its span replaced.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self.kind {
            ValueKind::Number(n) => Some(n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            ValueKind::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&List> {
        match &self.kind {
            ValueKind::List(list) => Some(list),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self.kind, ValueKind::Null)
    }

    /// Name of the value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self.kind {
            ValueKind::Number(_) => "number",
            ValueKind::String(_) => "string",
            ValueKind::List(_) => "list",
            ValueKind::Function(_) => "function",
            ValueKind::Builtin(_) => "builtin function",
            ValueKind::Null => "null",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (&self.kind, &other.kind) {
            (ValueKind::Number(a), ValueKind::Number(b)) => a == b,
            (ValueKind::String(a), ValueKind::String(b)) => a == b,
            (ValueKind::List(a), ValueKind::List(b)) => a.elements() == b.elements(),
            (ValueKind::Function(a), ValueKind::Function(b)) => Rc::ptr_eq(a, b),
            (ValueKind::Builtin(a), ValueKind::Builtin(b)) => a.name == b.name,
            (ValueKind::Null, ValueKind::Null) => true,
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::string(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::list(elements)
    }
}

impl fmt::Display for Value {
    /// Numbers print without a trailing `.0`, strings print raw, and lists
    /// print their elements' display forms separated by `, `.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValueKind::Number(n) => write!(f, "{n}"),
            ValueKind::String(s) => write!(f, "{s}"),
            ValueKind::List(list) => write!(f, "{list}"),
            ValueKind::Function(function) => write!(f, "{function}"),
            ValueKind::Builtin(builtin) => write!(f, "{builtin}"),
            ValueKind::Null => write!(f, "null"),
        }
    }
}
