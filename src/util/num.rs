/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts a `usize` to `f64` if and only if it is exactly representable.
///
/// Used when a length or count becomes a number value.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use luminary::util::num::usize_to_f64_checked;
///
/// assert_eq!(usize_to_f64_checked(42, "too big"), Ok(42.0));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked<E>(value: usize, error: E) -> Result<f64, E> {
    match u64::try_from(value) {
        Ok(v) if v <= MAX_SAFE_U64_INT => Ok(v as f64),
        _ => Err(error),
    }
}

/// Truncates a number toward zero and converts it to a list index.
///
/// Returns `None` for negative, non-finite, or oversized values so the
/// caller can report an out-of-range index.
///
/// ## Example
/// ```
/// use luminary::util::num::f64_to_index;
///
/// assert_eq!(f64_to_index(2.0), Some(2));
/// assert_eq!(f64_to_index(1.9), Some(1));
/// assert_eq!(f64_to_index(-1.0), None);
/// assert_eq!(f64_to_index(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_index(value: f64) -> Option<usize> {
    let truncated = value.trunc();
    if !truncated.is_finite() || truncated < 0.0 || truncated > MAX_SAFE_U64_INT as f64 {
        return None;
    }
    usize::try_from(truncated as u64).ok()
}

/// Truncates a number toward zero into a process exit code, saturating at
/// the bounds of `i32`. `NaN` maps to `0`.
///
/// ## Example
/// ```
/// use luminary::util::num::f64_to_exit_code;
///
/// assert_eq!(f64_to_exit_code(3.7), 3);
/// assert_eq!(f64_to_exit_code(1e20), i32::MAX);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_exit_code(value: f64) -> i32 {
    value as i32
}
