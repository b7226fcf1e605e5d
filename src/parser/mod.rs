mod column_map;
mod errors;
mod fields;
mod record_reader;

pub use errors::{FieldError, ParseError};
pub use record_reader::read_records;
