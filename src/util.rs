/// Numeric conversion helpers.
///
/// Conversions between the language's `f64` numbers and the integer types
/// the host needs for indexing, counting and exit codes, without silent
/// wrap-around.
pub mod num;
/// Stack growth for deeply nested programs.
pub mod stack;
