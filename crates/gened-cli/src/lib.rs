//! CLI library components for the content-area class report.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
