pub mod class_table;
pub mod error;

pub use class_table::{ClassTable, parse_class_table, read_class_table};
pub use error::IngestError;
