//! Property tests for cell normalization.
//!
//! Generators follow the shapes the export actually produces: catalog
//! numbers optionally wrapped in `="..."`, credits as `N.00` or a
//! `N.00 - M.00` range, instructor cells with embedded CR/LF between
//! names.

use proptest::prelude::*;

use gened_model::ClassRow;
use gened_transform::{
    normalize_catalog_number, normalize_instructor, normalize_row, normalize_units,
};

fn raw_row(catalog: &str, units: &str, instructor: &str) -> ClassRow {
    ClassRow {
        catalog_number: catalog.to_string(),
        units: units.to_string(),
        instructor: instructor.to_string(),
        ..ClassRow::default()
    }
}

#[test]
fn normalize_row_touches_only_its_fields() {
    let mut row = raw_row("=\"1060\"", "4.00", "Smith, Jane (PI)\nDoe, John (TA)");
    row.subject = "MATH".to_string();
    row.open_slots = "2".to_string();
    let normalized = normalize_row(&row);
    assert_eq!(normalized.catalog_number, "1060");
    assert_eq!(normalized.units, "4");
    assert_eq!(normalized.instructor, "Smith, Jane (PI)Doe, John (TA)");
    assert_eq!(normalized.subject, "MATH");
    assert_eq!(normalized.open_slots, "2");
}

proptest! {
    #[test]
    fn catalog_number_is_idempotent(raw in "(=\")?[0-9]{3,5}[QW]?(\")?") {
        let once = normalize_catalog_number(&raw);
        prop_assert_eq!(normalize_catalog_number(&once), once.clone());
        prop_assert!(!once.starts_with("=\""));
        prop_assert!(!once.ends_with('"'));
    }

    #[test]
    fn wrapped_catalog_number_loses_its_markers(inner in "[0-9]{4}[QW]?") {
        let wrapped = format!("=\"{inner}\"");
        prop_assert_eq!(normalize_catalog_number(&wrapped), inner);
    }

    #[test]
    fn units_carry_no_artifacts(
        raw in "((=\")?[0-9](\\.00)?( - [0-9](\\.00)?)?(\")?)?",
    ) {
        let once = normalize_units(&raw);
        prop_assert!(!once.contains(".00"));
        prop_assert!(!once.contains("=\""));
        prop_assert!(!once.contains(' '));
        prop_assert_eq!(normalize_units(&once), once);
    }

    #[test]
    fn instructor_is_flat_and_idempotent(raw in "[a-zA-Z,() \r\n]{0,30}") {
        let once = normalize_instructor(&raw);
        prop_assert!(!once.contains('\r'));
        prop_assert!(!once.contains('\n'));
        prop_assert_eq!(normalize_instructor(&once), once);
    }

    #[test]
    fn row_normalization_is_idempotent(
        catalog in "(=\")?[0-9]{4}[QW]?(\")?",
        units in "([0-9](\\.00)?( - [0-9](\\.00)?)?)?",
        instructor in "[a-zA-Z, ()]{0,20}(\r\n[a-zA-Z, ()]{0,20})?",
    ) {
        let row = raw_row(&catalog, &units, &instructor);
        let once = normalize_row(&row);
        let twice = normalize_row(&once);
        prop_assert_eq!(once, twice);
    }
}
