use thiserror::Error;

use crate::{
    error::ErrorKind,
    interpreter::position::{Position, Span},
};

/// An error raised while lexing, parsing or evaluating a program.
///
/// The rendered form starts with the red ANSI escape and names the kind,
/// the message and, when known, the file and location of the failure:
///
/// ```text
/// Error(Runtime Error): Index out of range (5) with length of 3.
/// File: main.lum - Line: 1 - Col: 0:12
/// ```
///
/// # Example
/// ```
/// use luminary::error::{Error, ErrorKind};
///
/// let err = Error::runtime("Can't divide by zero", None);
/// assert_eq!(err.kind, ErrorKind::Runtime);
/// assert_eq!(err.to_string(), "\x1b[31mError(Runtime Error): Can't divide by zero.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\x1b[31mError({kind}): {details}.{}", render_location(.span.as_ref()))]
pub struct Error {
    pub kind:    ErrorKind,
    pub details: String,
    pub span:    Option<Span>,
}

impl Error {
    #[must_use]
    pub fn new(kind: ErrorKind, details: impl Into<String>, span: Option<Span>) -> Self {
        Self { kind,
               details: details.into(),
               span }
    }

    /// An unrecognised character at `start`.
    #[must_use]
    pub fn illegal_char(details: impl Into<String>, start: Position, end: Option<Position>) -> Self {
        Self::new(ErrorKind::IllegalChar, details, Some(Span::new(start, end)))
    }

    #[must_use]
    pub fn invalid_syntax(details: impl Into<String>, span: Option<Span>) -> Self {
        Self::new(ErrorKind::InvalidSyntax, details, span)
    }

    #[must_use]
    pub fn runtime(details: impl Into<String>, span: Option<Span>) -> Self {
        Self::new(ErrorKind::Runtime, details, span)
    }
}

fn render_location(span: Option<&Span>) -> String {
    span.map_or_else(String::new, |span| {
            format!("\nFile: {} - Line: {} - Col: {}:{}",
                    span.start.file, span.start.line, span.start.col, span.end.col)
        })
}
