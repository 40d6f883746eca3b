//! Domain value objects and validation.
//!
//! Phone numbers are the directory key and must be a bare ten-digit national
//! number; names only have to be non-empty. Emails are free-form and carry no
//! validation at all.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::{is_valid_name, validate_name};
pub use phone::{format_phone, is_valid_phone, PhoneNumber};
