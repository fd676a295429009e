//! CSV import module
//!
//! Turns statement files into transaction records.
//!
//! # Components
//!
//! - `parser` - pure CSV schema validation and record building
//! - `reader` - async file reading (the import pipeline's only async boundary)

pub mod parser;
pub mod reader;

pub use parser::{parse_csv, REQUIRED_COLUMNS};
pub use reader::read_csv_file;
