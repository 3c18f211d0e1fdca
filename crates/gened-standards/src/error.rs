#![deny(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to parse content-area table: {message}")]
    Csv { message: String },

    #[error("content-area table is missing required column: {name}")]
    MissingColumn { name: String },

    #[error("content-area table row {row} has an empty {column} value")]
    EmptyValue { row: usize, column: &'static str },
}
