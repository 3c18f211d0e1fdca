//! Subcommand implementations.

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info_span};

use gened_ingest::read_class_table;
use gened_model::{AreaFilter, FullnessFilter};
use gened_report::{ReportOptions, render_report};
use gened_standards::{CATALOG_VERSION, CONTENT_AREAS, load_default_content_areas};
use gened_transform::{annotate_rows, normalize_rows};

use crate::cli::CheckArgs;
use crate::summary::apply_table_style;

/// Runs the full pipeline and returns the rendered report.
///
/// Selector validation happens before any file I/O, so a bad `--show` or
/// `--full` never touches the listing.
pub fn run_check(args: &CheckArgs) -> Result<String> {
    let area = AreaFilter::from_selector(args.show)?;
    let fullness = FullnessFilter::from_selector(args.full)?;
    let lookup = load_default_content_areas().context("load content-area table")?;
    debug!(
        courses = lookup.len(),
        catalog = CATALOG_VERSION,
        "loaded content-area table"
    );

    let span = info_span!("check", classes = %args.classes.display());
    let _guard = span.enter();
    let table = read_class_table(&args.classes)?;
    let rows = normalize_rows(&table.rows);
    let annotated = annotate_rows(rows, &lookup);
    let options = ReportOptions { area, fullness };
    Ok(render_report(&annotated, &options))
}

/// Prints the content-area groups with their bundled course counts.
pub fn run_areas() -> Result<()> {
    let lookup = load_default_content_areas().context("load content-area table")?;
    let mut table = Table::new();
    table.set_header(vec!["Code", "Content Area", "Courses"]);
    apply_table_style(&mut table);
    for area in CONTENT_AREAS {
        let courses = lookup
            .entries()
            .filter(|(_, codes)| codes.starts_with(area.code))
            .count();
        table.add_row(vec![
            area.code.to_string(),
            area.name.to_string(),
            courses.to_string(),
        ]);
    }
    println!("{table}");
    println!("Catalog: {CATALOG_VERSION} ({} courses)", lookup.len());
    Ok(())
}
