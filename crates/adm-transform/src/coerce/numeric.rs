//! Integer coercion.

/// Parses a cell as a 64-bit integer.
///
/// Integer literals (with optional sign) are taken as-is. Any other decimal
/// number is truncated toward zero, so `"3.9"` becomes `3` and `"-3.9"`
/// becomes `-3`. Empty, non-numeric, non-finite, and out-of-range input
/// yields `None`.
pub fn coerce_int64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(v) = trimmed.parse::<i64>() {
        return Some(v);
    }
    let parsed = trimmed.parse::<f64>().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    let truncated = parsed.trunc();
    // i64::MAX is not representable in f64; 2^63 is the first value out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}
