//! Report filter selectors.
//!
//! Both selectors arrive as small integers on the command line and are
//! validated here before any file I/O happens.

use crate::error::{ModelError, Result};

/// Content-area selector (`--show`, 0-5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaFilter {
    /// 0: every row passes.
    All,
    /// 1-4: rows whose annotation contains this digit.
    Area(u8),
    /// 5: rows with any content-area annotation at all.
    AnyAssigned,
}

impl AreaFilter {
    pub fn from_selector(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Self::All),
            1..=4 => Ok(Self::Area(value as u8)),
            5 => Ok(Self::AnyAssigned),
            _ => Err(ModelError::InvalidAreaSelector { value }),
        }
    }
}

/// Fullness selector (`--full`, 0-2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullnessFilter {
    /// 0: every row passes.
    All,
    /// 1: current enrollment equals capacity.
    ExactlyFull,
    /// 2: at least one enrollment slot is open.
    OpenSeats,
}

impl FullnessFilter {
    pub fn from_selector(value: i64) -> Result<Self> {
        match value {
            0 => Ok(Self::All),
            1 => Ok(Self::ExactlyFull),
            2 => Ok(Self::OpenSeats),
            _ => Err(ModelError::InvalidFullnessSelector { value }),
        }
    }
}
