/// Function definitions and calls, and the builtin table.
pub mod core;
/// `print`, `println`, `scan` and `exit`.
pub mod io;
/// `append`, `prepend`, `shift` and `pop`.
pub mod list;
/// `len`, `trim`, `upper`, `lower` and `replace`.
pub mod string;
