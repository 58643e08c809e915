use std::{fmt, rc::Rc};

use crate::interpreter::position::Span;

/// A node of the syntax tree.
///
/// Every node carries the [`Span`] of source text it was parsed from, which
/// runtime errors use to point back at the offending code. Control
/// constructs (`if`, loops, function definitions) are expressions and can
/// appear anywhere a value can.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric literal, e.g. `3.5`.
    Number {
        value: f64,
        span:  Span,
    },
    /// A string literal with escapes resolved.
    String {
        value: String,
        span:  Span,
    },
    /// The `null` literal.
    Null {
        span: Span,
    },
    /// A list literal, e.g. `[1, "a", x]`.
    List {
        elements: Vec<Self>,
        span:     Span,
    },
    /// `condition ? left : right`
    Ternary {
        condition: Box<Self>,
        left:      Box<Self>,
        right:     Box<Self>,
        span:      Span,
    },
    BinaryOp {
        op:    BinaryOperator,
        left:  Box<Self>,
        right: Box<Self>,
        span:  Span,
    },
    UnaryOp {
        op:      UnaryOperator,
        operand: Box<Self>,
        span:    Span,
    },
    /// Reads a variable; an unknown name evaluates to `null`.
    VarAccess {
        name: String,
        span: Span,
    },
    /// `name = value`, binding in the current scope.
    VarAssign {
        name:  String,
        value: Box<Self>,
        span:  Span,
    },
    /// `target[index]` or the slice `target[index:to]`.
    ElementAccess {
        target: Box<Self>,
        index:  Box<Self>,
        to:     Option<Box<Self>>,
        span:   Span,
    },
    /// `name[index] = value`
    ElementAssign {
        name:  String,
        index: Box<Self>,
        value: Box<Self>,
        span:  Span,
    },
    /// `if`/`elif` cases tried in order, then the optional `else`.
    If {
        cases:     Vec<(Self, Self)>,
        else_case: Option<Box<Self>>,
        span:      Span,
    },
    /// `for var = from : to by step body`
    For {
        var:  String,
        from: Box<Self>,
        to:   Box<Self>,
        step: Option<Box<Self>>,
        body: Box<Self>,
        span: Span,
    },
    /// `each item in list body`
    Each {
        item: String,
        list: Box<Self>,
        body: Box<Self>,
        span: Span,
    },
    While {
        condition: Box<Self>,
        body:      Box<Self>,
        span:      Span,
    },
    Break {
        span: Span,
    },
    Continue {
        span: Span,
    },
    FunctionDef(Rc<FunctionDef>),
    FunctionCall {
        callee:    Box<Self>,
        arguments: Vec<Self>,
        span:      Span,
    },
    Return {
        value: Option<Box<Self>>,
        span:  Span,
    },
    /// A sequence of statements. Blocks do not open a scope; the value of a
    /// block is the value of its last statement.
    Block {
        statements: Vec<Self>,
        span:       Span,
    },
}

impl Node {
    /// Returns the source range this node was parsed from.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::FunctionDef(def) => &def.span,
            Self::Number { span, .. }
            | Self::String { span, .. }
            | Self::Null { span }
            | Self::List { span, .. }
            | Self::Ternary { span, .. }
            | Self::BinaryOp { span, .. }
            | Self::UnaryOp { span, .. }
            | Self::VarAccess { span, .. }
            | Self::VarAssign { span, .. }
            | Self::ElementAccess { span, .. }
            | Self::ElementAssign { span, .. }
            | Self::If { span, .. }
            | Self::For { span, .. }
            | Self::Each { span, .. }
            | Self::While { span, .. }
            | Self::Break { span }
            | Self::Continue { span }
            | Self::FunctionCall { span, .. }
            | Self::Return { span, .. }
            | Self::Block { span, .. } => span,
        }
    }
}

/// A function literal: `func name(a, b) -> a + b` or `func (x) { ... }`.
///
/// Shared between the syntax tree and every function value created from it.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// `None` for anonymous functions.
    pub name:               Option<String>,
    pub params:             Vec<String>,
    pub body:               Node,
    /// `true` when the body was written as `-> statement`.
    pub is_expression_body: bool,
    pub span:               Span,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Equal,
    NotEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    And,
    Or,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::And => "and",
            Self::Or => "or",
        };
        f.write_str(symbol)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-x`
    Negate,
    /// `+x`, which yields its operand unchanged.
    Identity,
    /// `not x`
    Not,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => f.write_str("-"),
            Self::Identity => f.write_str("+"),
            Self::Not => f.write_str("not"),
        }
    }
}
