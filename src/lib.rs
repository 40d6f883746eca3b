//! Phone Book - an in-memory contact directory keyed by phone number.
//!
//! Records carry a name and an optional email under a ten-digit national
//! phone number. The directory supports add, update, substring search,
//! removal by query and bulk import from `name;phone;email` text.
//!
//! # Architecture
//!
//! - **domain**: Phone number and name validation
//! - **models**: Stored entries and phone-augmented query records
//! - **directory**: The `Directory` itself and CSV import
//! - **shared**: Lock-guarded handle for use across threads
//! - **error**: Error types behind the boolean results
//! - **config**: Binary configuration from environment variables
//!
//! # Example
//!
//! ```
//! use phone_book::Directory;
//!
//! let mut book = Directory::new();
//! assert!(book.add("9161234567", "Ann", None));
//! assert_eq!(book.find("Ann"), vec!["Ann, +7 (916) 123-45-67"]);
//! ```

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod shared;

pub use config::Config;
pub use directory::{CsvLine, Directory, WILDCARD};
pub use domain::{is_valid_name, is_valid_phone, PhoneNumber, ValidationError};
pub use error::{ConfigError, DirectoryError};
pub use models::{text_representation, Entry, Record};
pub use shared::SharedDirectory;
