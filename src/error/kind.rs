use std::fmt;

/// Classifies an [`Error`](crate::error::Error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The lexer met a character that cannot start any token.
    IllegalChar,
    /// Malformed syntax, or an operator applied to a value that does not
    /// support it.
    InvalidSyntax,
    /// A failure raised while evaluating a program.
    Runtime,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalChar => write!(f, "Illigal Char"),
            Self::InvalidSyntax => write!(f, "Invalid Syntax"),
            Self::Runtime => write!(f, "Runtime Error"),
        }
    }
}
