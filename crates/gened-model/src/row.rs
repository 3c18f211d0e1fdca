#![deny(unsafe_code)]

use std::fmt;

/// One data row of the exported class listing, in source column order.
///
/// All fields carry the cell text as exported; the enrollment counts stay
/// textual and are parsed only where a numeric comparison is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClassRow {
    pub class_number: String,
    pub subject: String,
    pub catalog_number: String,
    pub section: String,
    pub career: String,
    pub units: String,
    pub campus: String,
    pub session: String,
    pub description: String,
    pub instruction_mode: String,
    pub auto_enroll: String,
    pub capacity: String,
    pub enrolled: String,
    pub limitations: String,
    pub open_slots: String,
    pub waitlist: String,
    pub instructor: String,
    pub schedule: String,
}

impl ClassRow {
    /// Number of cells a well-formed data row carries.
    pub const FIELD_COUNT: usize = 18;

    /// Builds a row from positional cells. Returns `None` when fewer than
    /// [`Self::FIELD_COUNT`] cells are present; extra cells are ignored.
    pub fn from_cells(cells: &[String]) -> Option<Self> {
        if cells.len() < Self::FIELD_COUNT {
            return None;
        }
        Some(Self {
            class_number: cells[0].clone(),
            subject: cells[1].clone(),
            catalog_number: cells[2].clone(),
            section: cells[3].clone(),
            career: cells[4].clone(),
            units: cells[5].clone(),
            campus: cells[6].clone(),
            session: cells[7].clone(),
            description: cells[8].clone(),
            instruction_mode: cells[9].clone(),
            auto_enroll: cells[10].clone(),
            capacity: cells[11].clone(),
            enrolled: cells[12].clone(),
            limitations: cells[13].clone(),
            open_slots: cells[14].clone(),
            waitlist: cells[15].clone(),
            instructor: cells[16].clone(),
            schedule: cells[17].clone(),
        })
    }

    /// Composite lookup key, `"{subject} {catalog_number}"`, exactly as the
    /// content-area table is keyed. Case- and whitespace-sensitive.
    pub fn lookup_key(&self) -> String {
        format!("{} {}", self.subject, self.catalog_number)
    }
}

/// Content-area annotation attached to every data row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ContentArea {
    /// One or two catalog codes, e.g. `"3"` or `"1Q"`.
    Assigned(String),
    /// No mapping exists for the row's subject + catalog number.
    NotAssigned,
}

impl ContentArea {
    /// Rendered form of the not-assigned sentinel.
    pub const SENTINEL: &'static str = "N/A";

    pub fn is_assigned(&self) -> bool {
        matches!(self, Self::Assigned(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Assigned(codes) => codes,
            Self::NotAssigned => Self::SENTINEL,
        }
    }
}

impl fmt::Display for ContentArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A class row plus its content-area annotation, produced by the annotator.
/// Row order in the source listing is preserved across the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnnotatedRow {
    pub row: ClassRow,
    pub content_area: ContentArea,
}
