//! Data models for phone book contents.
//!
//! - `Entry`: what the directory stores under a phone key
//! - `Record`: a query result, the entry plus its phone

mod record;

pub use record::{text_representation, Entry, Record};
