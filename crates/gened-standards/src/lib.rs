#![deny(unsafe_code)]

pub mod areas;
pub mod error;
pub mod lookup;

pub use areas::{CONTENT_AREAS, ContentAreaInfo};
pub use error::StandardsError;
pub use lookup::{CATALOG_VERSION, ContentAreaLookup, load_default_content_areas};
