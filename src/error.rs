/// Error categories.
///
/// Every failure the interpreter reports falls into one of three kinds:
/// characters the lexer does not recognise, malformed syntax (including
/// operations a value type does not support), and failures raised while a
/// program runs.
pub mod kind;
/// The diagnostic error type.
///
/// Pairs an [`ErrorKind`] with a human readable message and the source span
/// the failure points at, and renders it in the form shown to users.
pub mod diagnostic;

pub use diagnostic::Error;
pub use kind::ErrorKind;
