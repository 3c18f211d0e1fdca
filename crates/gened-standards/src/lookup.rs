//! Content-area lookup table.
//!
//! The mapping from `"{subject} {catalog number}"` to content-area codes is
//! a version-pinned asset compiled into the binary. It is parsed once at
//! startup and read-only afterward.

use std::collections::BTreeMap;

use crate::error::StandardsError;

/// Catalog year the bundled table was taken from.
pub const CATALOG_VERSION: &str = "2015-2016";

const CONTENT_AREAS_CSV: &str = include_str!("../data/content_areas_2015_2016.csv");

const COURSE_COLUMN: &str = "Course";
const AREA_COLUMN: &str = "Content Area";

/// Immutable map from course key (`"MATH 1060"`) to content-area codes
/// (`"3"`, `"1W"`, `"4I"`, ...).
#[derive(Debug, Clone)]
pub struct ContentAreaLookup {
    map: BTreeMap<String, String>,
}

impl ContentAreaLookup {
    /// Exact-match lookup on the composite course key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates `(course key, codes)` pairs in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for ContentAreaLookup {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn parse_content_areas(data: &str) -> Result<ContentAreaLookup, StandardsError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| StandardsError::Csv {
            message: e.to_string(),
        })?
        .clone();
    let idx_course = header_index(&headers, COURSE_COLUMN).ok_or_else(|| {
        StandardsError::MissingColumn {
            name: COURSE_COLUMN.to_string(),
        }
    })?;
    let idx_area = header_index(&headers, AREA_COLUMN).ok_or_else(|| {
        StandardsError::MissingColumn {
            name: AREA_COLUMN.to_string(),
        }
    })?;

    let mut map = BTreeMap::new();
    for (row_idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| StandardsError::Csv {
            message: e.to_string(),
        })?;
        let course = record.get(idx_course).map(str::trim).unwrap_or("");
        let area = record.get(idx_area).map(str::trim).unwrap_or("");
        if course.is_empty() {
            return Err(StandardsError::EmptyValue {
                row: row_idx + 2,
                column: COURSE_COLUMN,
            });
        }
        if area.is_empty() {
            return Err(StandardsError::EmptyValue {
                row: row_idx + 2,
                column: AREA_COLUMN,
            });
        }
        map.insert(course.to_string(), area.to_string());
    }
    Ok(ContentAreaLookup { map })
}

/// Loads the bundled content-area table.
pub fn load_default_content_areas() -> Result<ContentAreaLookup, StandardsError> {
    parse_content_areas(CONTENT_AREAS_CSV)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_course_and_area_columns() {
        let lookup =
            parse_content_areas("Course,Content Area\nMATH 1060,3\nANTH 1006,4I\n").unwrap();
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.get("MATH 1060"), Some("3"));
        assert_eq!(lookup.get("ANTH 1006"), Some("4I"));
        assert_eq!(lookup.get("MATH 1060Q"), None);
    }

    #[test]
    fn missing_column_is_an_error() {
        let err = parse_content_areas("Course,Area\nMATH 1060,3\n").unwrap_err();
        assert!(matches!(err, StandardsError::MissingColumn { .. }));
    }

    #[test]
    fn empty_code_is_an_error() {
        let err = parse_content_areas("Course,Content Area\nMATH 1060,\n").unwrap_err();
        assert!(matches!(
            err,
            StandardsError::EmptyValue {
                row: 2,
                column: "Content Area"
            }
        ));
    }
}
