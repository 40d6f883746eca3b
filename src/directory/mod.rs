//! The phone book directory: storage, search, removal and CSV import.

mod collation;
mod csv_import;
mod phone_book;

pub use collation::compare_names;
pub use csv_import::CsvLine;
pub use phone_book::{Directory, WILDCARD};
