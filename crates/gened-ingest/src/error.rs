#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read class listing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no class table found in {path}")]
    NoTable { path: PathBuf },

    #[error("{path} row {row}: expected {expected} cells, found {found}")]
    MalformedRow {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
