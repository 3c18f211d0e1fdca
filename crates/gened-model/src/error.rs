use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid content-area selector {value}: expected 0-5")]
    InvalidAreaSelector { value: i64 },
    #[error("invalid fullness selector {value}: expected 0-2")]
    InvalidFullnessSelector { value: i64 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
