//! Numeric parsing for enrollment counts.
//!
//! Counts stay textual on [`gened_model::ClassRow`]; comparisons parse
//! here so multi-digit values order numerically ("9" < "10"), never
//! lexically.

/// Parses a count cell as i64, returning None for empty or non-numeric
/// values.
pub fn parse_count(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}
