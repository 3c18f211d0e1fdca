#![deny(unsafe_code)]

pub mod annotate;
pub mod normalize;
pub mod numeric;

pub use annotate::annotate_rows;
pub use normalize::{
    normalize_catalog_number, normalize_instructor, normalize_row, normalize_rows,
    normalize_units,
};
pub use numeric::parse_count;
