//! Joins class rows against the content-area lookup.

use tracing::debug;

use gened_model::{AnnotatedRow, ClassRow, ContentArea};
use gened_standards::ContentAreaLookup;

/// Annotates every row with its content area, preserving order.
///
/// The join is an exact match on `"{subject} {catalog_number}"`; rows
/// should be normalized first so the key carries no export markers. A miss
/// is not an error: the row gets the not-assigned sentinel.
pub fn annotate_rows(rows: Vec<ClassRow>, lookup: &ContentAreaLookup) -> Vec<AnnotatedRow> {
    let annotated: Vec<AnnotatedRow> = rows
        .into_iter()
        .map(|row| {
            let content_area = match lookup.get(&row.lookup_key()) {
                Some(codes) => ContentArea::Assigned(codes.to_string()),
                None => ContentArea::NotAssigned,
            };
            AnnotatedRow { row, content_area }
        })
        .collect();
    let assigned = annotated
        .iter()
        .filter(|r| r.content_area.is_assigned())
        .count();
    debug!(
        rows = annotated.len(),
        assigned,
        unassigned = annotated.len() - assigned,
        "annotated class rows"
    );
    annotated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> ContentAreaLookup {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn row(subject: &str, catalog: &str) -> ClassRow {
        ClassRow {
            subject: subject.to_string(),
            catalog_number: catalog.to_string(),
            ..ClassRow::default()
        }
    }

    #[test]
    fn hit_appends_the_mapped_codes() {
        let annotated = annotate_rows(
            vec![row("MATH", "1060")],
            &lookup(&[("MATH 1060", "3")]),
        );
        assert_eq!(
            annotated[0].content_area,
            ContentArea::Assigned("3".to_string())
        );
    }

    #[test]
    fn miss_gets_the_sentinel() {
        let annotated =
            annotate_rows(vec![row("MATH", "2110")], &lookup(&[("MATH 1060", "3")]));
        assert_eq!(annotated[0].content_area, ContentArea::NotAssigned);
    }

    #[test]
    fn join_is_exact_not_substring() {
        // "1060" must not match the "1060Q" entry or vice versa.
        let table = lookup(&[("MATH 1060Q", "3")]);
        let annotated = annotate_rows(vec![row("MATH", "1060")], &table);
        assert_eq!(annotated[0].content_area, ContentArea::NotAssigned);
        let annotated = annotate_rows(vec![row("MATH", "1060Q")], &table);
        assert!(annotated[0].content_area.is_assigned());
    }

    #[test]
    fn order_is_preserved_and_every_row_annotated() {
        let table = lookup(&[("ANTH 1000", "2")]);
        let rows = vec![row("ANTH", "1000"), row("ZZZZ", "9999"), row("ANTH", "1000")];
        let annotated = annotate_rows(rows, &table);
        assert_eq!(annotated.len(), 3);
        assert_eq!(annotated[0].row.subject, "ANTH");
        assert_eq!(annotated[1].row.subject, "ZZZZ");
        assert!(annotated[0].content_area.is_assigned());
        assert!(!annotated[1].content_area.is_assigned());
        assert!(annotated[2].content_area.is_assigned());
    }
}
