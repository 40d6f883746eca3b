//! Error types for the phone book.
//!
//! The public directory operations report failure as `false` or an empty
//! result; these types carry the reason underneath and for configuration.

use crate::domain::ValidationError;
use thiserror::Error;

/// Reasons a directory mutation can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Phone or name failed format validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record already exists for this phone
    #[error("Phone number already present: {0}")]
    DuplicatePhone(String),

    /// No record exists for this phone
    #[error("No record for phone number: {0}")]
    NotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
