/// The `Value` type and its constructors, accessors and display form.
pub mod core;
/// User-defined and builtin function values, and calling them.
pub mod function;
/// Shared, mutable list storage with index and slice access.
pub mod list;
/// The operator capabilities every value supports: arithmetic,
/// comparison, logic and truthiness.
pub mod ops;
