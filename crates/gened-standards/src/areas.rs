//! The four content-area groups from the undergraduate catalog.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentAreaInfo {
    /// Single-digit group code; bundled course codes may carry a suffix
    /// (`W` writing, `Q` quantitative, `I` international).
    pub code: char,
    pub name: &'static str,
}

pub const CONTENT_AREAS: [ContentAreaInfo; 4] = [
    ContentAreaInfo {
        code: '1',
        name: "Arts and Humanities",
    },
    ContentAreaInfo {
        code: '2',
        name: "Social Sciences",
    },
    ContentAreaInfo {
        code: '3',
        name: "Science and Technology",
    },
    ContentAreaInfo {
        code: '4',
        name: "Diversity and Multiculturalism",
    },
];
