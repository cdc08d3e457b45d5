pub mod record;
pub mod value;

pub use record::Record;
pub use value::{parse_numeric, FieldValue};
