//! Fixed-width report rendering.
//!
//! One header line, then one line per passing row. Column order: class
//! number, subject, catalog number, content area, section, units,
//! description, auto-enroll, open/enrolled/max/wait, instructor, schedule.

use tracing::debug;

use gened_model::AnnotatedRow;

use crate::filter::{ReportOptions, filter_rows};

const W_CLASS: usize = 5;
const W_SUBJECT: usize = 4;
const W_CATALOG: usize = 7;
const W_AREA: usize = 4;
const W_SECTION: usize = 7;
const W_UNITS: usize = 5;
const W_DESCRIPTION: usize = 30;
const W_AUTO_ENROLL: usize = 11;
const W_SEATS: usize = 22;
const W_INSTRUCTOR: usize = 30;

/// The column-title line. Emitted before the data lines regardless of how
/// many rows pass the filters.
pub fn header_line() -> String {
    format!(
        "{:<W_CLASS$} {:<W_SUBJECT$} {:<W_CATALOG$} {:<W_AREA$} {:<W_SECTION$} \
         {:<W_UNITS$} {:<W_DESCRIPTION$} {:<W_AUTO_ENROLL$} {:<W_SEATS$} \
         {:<W_INSTRUCTOR$} {}",
        "Class",
        "Subj",
        "Catalog",
        "CA",
        "Section",
        "Units",
        "Description",
        "Auto-Enroll",
        "Open/Enrolled/Max/Wait",
        "Instructor",
        "Hours",
    )
}

/// Renders one data row as a fixed-width line.
pub fn render_row(annotated: &AnnotatedRow) -> String {
    let row = &annotated.row;
    let seats = format!(
        "{:>4}/{:>4}/{:>4}/{:>4}",
        row.open_slots, row.enrolled, row.capacity, row.waitlist
    );
    format!(
        "{:<W_CLASS$} {:<W_SUBJECT$} {:<W_CATALOG$} {:<W_AREA$} {:<W_SECTION$} \
         {:<W_UNITS$} {:<W_DESCRIPTION$} {:<W_AUTO_ENROLL$} {:<W_SEATS$} \
         {:<W_INSTRUCTOR$} {}",
        row.class_number,
        row.subject,
        row.catalog_number,
        annotated.content_area,
        row.section,
        row.units,
        row.description,
        row.auto_enroll,
        seats,
        row.instructor,
        row.schedule,
    )
}

/// Renders the full report: header plus every row passing `options`.
pub fn render_report(rows: &[AnnotatedRow], options: &ReportOptions) -> String {
    let selected = filter_rows(rows, options);
    debug!(
        total = rows.len(),
        rendered = selected.len(),
        "rendering report"
    );
    let mut out = header_line();
    out.push('\n');
    for row in selected {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out
}
