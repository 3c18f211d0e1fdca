//! Parses the exported class listing into rows of cells.
//!
//! The export is an HTML document (saved as `.xls` by the student admin
//! system) whose first `<table>` holds the listing. The first non-blank
//! row is the column header; every following row is one class section.

use std::path::Path;

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, info};

use gened_model::ClassRow;

use crate::error::IngestError;

static TABLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("td, th").unwrap());

/// The class listing: header titles plus data rows in document order.
#[derive(Debug, Clone)]
pub struct ClassTable {
    pub headers: Vec<String>,
    pub rows: Vec<ClassRow>,
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

/// Parses an in-memory class listing document. `source` only labels errors.
pub fn parse_class_table(html: &str, source: &Path) -> Result<ClassTable, IngestError> {
    let document = Html::parse_document(html);
    let table = document
        .select(&TABLE_SELECTOR)
        .next()
        .ok_or_else(|| IngestError::NoTable {
            path: source.to_path_buf(),
        })?;

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for (row_idx, tr) in table.select(&ROW_SELECTOR).enumerate() {
        let cells: Vec<String> = tr
            .select(&CELL_SELECTOR)
            .map(|cell| normalize_cell(&cell.text().collect::<String>()))
            .collect();
        if cells.iter().all(|cell| cell.is_empty()) {
            debug!(row = row_idx + 1, "skipping blank row");
            continue;
        }
        if headers.is_none() {
            headers = Some(cells);
            continue;
        }
        let row =
            ClassRow::from_cells(&cells).ok_or_else(|| IngestError::MalformedRow {
                path: source.to_path_buf(),
                row: row_idx + 1,
                expected: ClassRow::FIELD_COUNT,
                found: cells.len(),
            })?;
        rows.push(row);
    }

    let Some(headers) = headers else {
        return Err(IngestError::NoTable {
            path: source.to_path_buf(),
        });
    };
    info!(rows = rows.len(), "parsed class listing");
    Ok(ClassTable { headers, rows })
}

/// Reads and parses the class listing at `path`.
pub fn read_class_table(path: &Path) -> Result<ClassTable, IngestError> {
    let html = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    parse_class_table(&html, path)
}
