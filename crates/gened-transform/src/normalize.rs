//! Scrubs export artifacts out of individual cells.
//!
//! The student admin export wraps some cells in a literal `="..."` (Excel
//! text marker), writes integral credits as `4.00`, and embeds newlines in
//! multi-instructor cells. All three scrubbers are idempotent.

use gened_model::ClassRow;

/// Strips the leading `="` and trailing `"` markers from a catalog number.
pub fn normalize_catalog_number(raw: &str) -> String {
    let value = raw.strip_prefix("=\"").unwrap_or(raw);
    let value = value.strip_suffix('"').unwrap_or(value);
    value.to_string()
}

/// Strips `.00`, `="`, a trailing `"`, and internal spaces from the units
/// cell. Credits are integral in the export. An absent value stays empty.
pub fn normalize_units(raw: &str) -> String {
    let value = raw
        .replace(".00", "")
        .replace("=\"", "")
        .replace(' ', "");
    let value = value.strip_suffix('"').unwrap_or(&value);
    value.to_string()
}

/// Removes embedded carriage-return/newline sequences from the instructor
/// cell so multi-instructor sections render on one line.
pub fn normalize_instructor(raw: &str) -> String {
    raw.replace(['\r', '\n'], "")
}

/// Applies all cell scrubbers to one row.
pub fn normalize_row(row: &ClassRow) -> ClassRow {
    let mut normalized = row.clone();
    normalized.catalog_number = normalize_catalog_number(&row.catalog_number);
    normalized.units = normalize_units(&row.units);
    normalized.instructor = normalize_instructor(&row.instructor);
    normalized
}

/// Normalizes every row, preserving order.
pub fn normalize_rows(rows: &[ClassRow]) -> Vec<ClassRow> {
    rows.iter().map(normalize_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_number_markers_are_stripped() {
        assert_eq!(normalize_catalog_number("=\"1060\""), "1060");
        assert_eq!(normalize_catalog_number("=\"1127Q\""), "1127Q");
        assert_eq!(normalize_catalog_number("1060"), "1060");
        assert_eq!(normalize_catalog_number(""), "");
    }

    #[test]
    fn units_artifacts_are_stripped() {
        assert_eq!(normalize_units("=\"4.00\""), "4");
        assert_eq!(normalize_units("4.00"), "4");
        assert_eq!(normalize_units("3.00 - 4.00"), "3-4");
        assert_eq!(normalize_units(""), "");
    }

    #[test]
    fn instructor_newlines_are_removed() {
        assert_eq!(
            normalize_instructor("Smith, Jane (PI)\r\nDoe, John (TA)"),
            "Smith, Jane (PI)Doe, John (TA)"
        );
        assert_eq!(normalize_instructor("Smith, Jane (PI)"), "Smith, Jane (PI)");
    }
}
