//! Stored entries and phone-augmented query records.

use crate::domain::format_phone;
use serde::Serialize;

/// Contact data stored under a phone key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entry {
    /// Contact name, never empty once stored
    pub name: String,

    /// Email address, empty when unknown
    pub email: String,
}

impl Entry {
    /// Create an entry from a name and optional email.
    pub fn new(name: impl Into<String>, email: Option<&str>) -> Self {
        Self {
            name: name.into(),
            email: email.unwrap_or_default().to_string(),
        }
    }

    /// Build the query view of this entry under `phone`.
    pub fn to_record(&self, phone: &str) -> Record {
        Record {
            phone: phone.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// A directory entry together with its phone key.
///
/// Records are detached copies; changing one does not touch the directory.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct Record {
    pub phone: String,
    pub name: String,
    pub email: String,
}

impl Record {
    /// Create a record from its three fields.
    pub fn new(
        phone: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            phone: phone.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Field values in scan order: name, email, phone.
    pub fn fields(&self) -> [&str; 3] {
        [self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }

    /// Check whether any field contains `query` (case-sensitive).
    pub fn matches(&self, query: &str) -> bool {
        self.fields().iter().any(|value| value.contains(query))
    }

    /// Render as `name, +7 (AAA) BBB-CC-DD, email`, skipping empty name or email.
    pub fn text_representation(&self) -> String {
        let mut values = Vec::with_capacity(3);
        if !self.name.is_empty() {
            values.push(self.name.clone());
        }
        values.push(format_phone(&self.phone));
        if !self.email.is_empty() {
            values.push(self.email.clone());
        }
        values.join(", ")
    }
}

/// Free-function form of [`Record::text_representation`], handy for `map`.
pub fn text_representation(record: &Record) -> String {
    record.text_representation()
}
