pub mod error;
pub mod filter;
pub mod row;

pub use error::{ModelError, Result};
pub use filter::{AreaFilter, FullnessFilter};
pub use row::{AnnotatedRow, ClassRow, ContentArea};
