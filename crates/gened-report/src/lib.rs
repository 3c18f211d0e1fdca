#![deny(unsafe_code)]

pub mod filter;
pub mod render;

pub use filter::{ReportOptions, area_passes, filter_rows, fullness_passes, row_passes};
pub use render::{header_line, render_report, render_row};
