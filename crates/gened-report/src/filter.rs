//! Selector predicates.
//!
//! Both selectors apply conjunctively: a row renders only when it passes
//! the content-area selector and the fullness selector.

use gened_model::{AnnotatedRow, AreaFilter, ClassRow, ContentArea, FullnessFilter};
use gened_transform::parse_count;

/// Validated report filters.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub area: AreaFilter,
    pub fullness: FullnessFilter,
}

pub fn area_passes(filter: AreaFilter, content_area: &ContentArea) -> bool {
    match filter {
        AreaFilter::All => true,
        AreaFilter::Area(digit) => match content_area {
            // Codes may carry a suffix ("1Q", "4I"); the digit test is a
            // substring check.
            ContentArea::Assigned(codes) => codes.contains((b'0' + digit) as char),
            ContentArea::NotAssigned => false,
        },
        AreaFilter::AnyAssigned => content_area.is_assigned(),
    }
}

pub fn fullness_passes(filter: FullnessFilter, row: &ClassRow) -> bool {
    match filter {
        FullnessFilter::All => true,
        FullnessFilter::ExactlyFull => {
            match (parse_count(&row.enrolled), parse_count(&row.capacity)) {
                (Some(enrolled), Some(capacity)) => enrolled == capacity,
                _ => false,
            }
        }
        FullnessFilter::OpenSeats => {
            parse_count(&row.open_slots).is_some_and(|open| open > 0)
        }
    }
}

pub fn row_passes(annotated: &AnnotatedRow, options: &ReportOptions) -> bool {
    area_passes(options.area, &annotated.content_area)
        && fullness_passes(options.fullness, &annotated.row)
}

/// Selects the rows to render, preserving order.
pub fn filter_rows<'a>(
    rows: &'a [AnnotatedRow],
    options: &ReportOptions,
) -> Vec<&'a AnnotatedRow> {
    rows.iter().filter(|row| row_passes(row, options)).collect()
}
