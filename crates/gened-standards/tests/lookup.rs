//! Tests against the bundled content-area table.

use gened_standards::{CONTENT_AREAS, load_default_content_areas};

#[test]
fn bundled_table_loads() {
    let lookup = load_default_content_areas().expect("bundled table parses");
    assert!(!lookup.is_empty());
}

#[test]
fn bundled_table_has_known_courses() {
    let lookup = load_default_content_areas().unwrap();
    assert_eq!(lookup.get("MATH 1060"), Some("3"));
    assert_eq!(lookup.get("ANTH 1000"), Some("2"));
    assert_eq!(lookup.get("PHIL 1104"), Some("1W"));
    assert_eq!(lookup.get("HRTS 1007"), Some("4I"));
    // Unlisted course is a miss, not an error.
    assert_eq!(lookup.get("MATH 2110"), None);
}

#[test]
fn bundled_codes_belong_to_a_known_group() {
    let lookup = load_default_content_areas().unwrap();
    for (course, codes) in lookup.entries() {
        let digit = codes.chars().next().unwrap_or(' ');
        assert!(
            CONTENT_AREAS.iter().any(|area| area.code == digit),
            "{course} has unknown group in code {codes}"
        );
        assert!(codes.len() <= 2, "{course} code {codes} is too long");
    }
}

#[test]
fn lookup_is_case_and_whitespace_sensitive() {
    let lookup = load_default_content_areas().unwrap();
    assert_eq!(lookup.get("math 1060"), None);
    assert_eq!(lookup.get("MATH  1060"), None);
    assert_eq!(lookup.get(" MATH 1060"), None);
}
