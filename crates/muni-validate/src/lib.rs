pub mod validator;

pub use validator::{missing_in_record, validate_required_fields};
