//! The in-memory phone book.

use super::collation::compare_names;
use crate::domain::{validate_name, PhoneNumber};
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{Entry, Record};
use std::collections::BTreeMap;

/// Query that matches every record.
pub const WILDCARD: &str = "*";

/// Contact records keyed by phone number.
///
/// Each instance is independent; nothing is shared between directories.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    entries: BTreeMap<PhoneNumber, Entry>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory has no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a record exists for `phone`.
    pub fn contains(&self, phone: &str) -> bool {
        self.entries.contains_key(phone)
    }

    /// Copy of the record stored under `phone`.
    pub fn get(&self, phone: &str) -> Option<Record> {
        self.entries
            .get_key_value(phone)
            .map(|(phone, entry)| entry.to_record(phone.as_str()))
    }

    /// Insert a new record, reporting why it was refused.
    ///
    /// A missing email is stored as an empty string. Existing records are
    /// never overwritten.
    pub fn try_add(
        &mut self,
        phone: &str,
        name: &str,
        email: Option<&str>,
    ) -> DirectoryResult<()> {
        let phone = PhoneNumber::new(phone)?;
        validate_name(name)?;

        if self.entries.contains_key(&phone) {
            return Err(DirectoryError::DuplicatePhone(phone.into_inner()));
        }

        self.entries.insert(phone, Entry::new(name, email));
        Ok(())
    }

    /// Insert a new record. Returns `false` and leaves the directory untouched
    /// when the phone or name is invalid or the phone is already present.
    pub fn add(&mut self, phone: &str, name: &str, email: Option<&str>) -> bool {
        match self.try_add(phone, name, email) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(phone = %phone, "Rejected add: {}", e);
                false
            }
        }
    }

    /// Update an existing record, reporting why it was refused.
    ///
    /// The name is always replaced. Email handling:
    /// - `None` clears the stored email
    /// - `Some("")` keeps the stored email
    /// - `Some(email)` replaces it
    pub fn try_update(
        &mut self,
        phone: &str,
        name: &str,
        email: Option<&str>,
    ) -> DirectoryResult<()> {
        let entry = self
            .entries
            .get_mut(phone)
            .ok_or_else(|| DirectoryError::NotFound(phone.to_string()))?;
        validate_name(name)?;

        entry.name = name.to_string();
        match email {
            None => entry.email.clear(),
            Some("") => {}
            Some(email) => entry.email = email.to_string(),
        }
        Ok(())
    }

    /// Update an existing record. Returns `false` when no record exists for
    /// `phone` or the name is invalid.
    pub fn update(&mut self, phone: &str, name: &str, email: Option<&str>) -> bool {
        match self.try_update(phone, name, email) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(phone = %phone, "Rejected update: {}", e);
                false
            }
        }
    }

    /// Records matching `query`, in storage order.
    ///
    /// An empty query matches nothing and `*` matches everything. Any other
    /// query is a case-sensitive substring test against name, email and the
    /// raw phone digits.
    pub fn find_entries(&self, query: &str) -> Vec<Record> {
        if query.is_empty() {
            return Vec::new();
        }

        let records = self
            .entries
            .iter()
            .map(|(phone, entry)| entry.to_record(phone.as_str()));

        if query == WILDCARD {
            return records.collect();
        }

        records.filter(|record| record.matches(query)).collect()
    }

    /// Formatted records matching `query`, ordered by name.
    pub fn find(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }

        let mut records = self.find_entries(query);
        records.sort_by(|a, b| compare_names(&a.name, &b.name));

        tracing::debug!(query = %query, matches = records.len(), "Search completed");

        records.iter().map(Record::text_representation).collect()
    }

    /// Remove every record matching `query` and return how many were removed.
    pub fn find_and_remove(&mut self, query: &str) -> usize {
        let matched = self.find_entries(query);
        for record in &matched {
            self.entries.remove(record.phone.as_str());
        }

        tracing::debug!(query = %query, removed = matched.len(), "Removed records");

        matched.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn sample_directory() -> Directory {
        let mut directory = Directory::new();
        assert!(directory.add("9161234567", "Ann", Some("ann@example.com")));
        assert!(directory.add("9169998888", "Bob", None));
        assert!(directory.add("9035551122", "Carol", Some("carol@mail.ru")));
        directory
    }

    #[test]
    fn test_add_and_get() {
        let directory = sample_directory();
        assert_eq!(directory.len(), 3);
        assert_eq!(
            directory.get("9161234567"),
            Some(Record::new("9161234567", "Ann", "ann@example.com"))
        );
        assert_eq!(directory.get("9169998888").unwrap().email, "");
        assert_eq!(directory.get("0000000000"), None);
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let mut directory = sample_directory();
        assert!(!directory.add("9161234567", "Other", Some("other@example.com")));
        assert_eq!(directory.get("9161234567").unwrap().name, "Ann");
        assert_eq!(
            directory.try_add("9161234567", "Other", None),
            Err(DirectoryError::DuplicatePhone("9161234567".to_string()))
        );
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let mut directory = Directory::new();
        assert!(!directory.add("123", "Ann", None));
        assert!(!directory.add("9161234567", "", None));
        assert!(directory.is_empty());
        assert_eq!(
            directory.try_add("9161234567", "", None),
            Err(DirectoryError::Validation(ValidationError::EmptyName))
        );
    }

    #[test]
    fn test_update_email_policy() {
        let mut directory = sample_directory();

        assert!(directory.update("9161234567", "Ann", Some("")));
        assert_eq!(directory.get("9161234567").unwrap().email, "ann@example.com");

        assert!(directory.update("9161234567", "Ann", Some("new@example.com")));
        assert_eq!(directory.get("9161234567").unwrap().email, "new@example.com");

        assert!(directory.update("9161234567", "Ann", None));
        assert_eq!(directory.get("9161234567").unwrap().email, "");
    }

    #[test]
    fn test_update_rejections() {
        let mut directory = sample_directory();
        assert_eq!(
            directory.try_update("0000000000", "Nobody", None),
            Err(DirectoryError::NotFound("0000000000".to_string()))
        );
        assert!(!directory.update("9161234567", "", None));
        assert_eq!(
            directory.get("9161234567"),
            Some(Record::new("9161234567", "Ann", "ann@example.com"))
        );
    }

    #[test]
    fn test_find_entries_does_not_touch_storage() {
        let directory = sample_directory();
        let mut records = directory.find_entries("*");
        records[0].name = "Changed".to_string();
        assert!(directory.find_entries("Changed").is_empty());
    }

    #[test]
    fn test_find_entries_matches_each_record_once() {
        let mut directory = Directory::new();
        assert!(directory.add("9161111111", "Ann 1111", Some("1111@example.com")));
        assert_eq!(directory.find_entries("1111").len(), 1);
    }

    #[test]
    fn test_find_sorted_by_name() {
        let mut directory = Directory::new();
        assert!(directory.add("9160000001", "carol", None));
        assert!(directory.add("9160000002", "Bob", None));
        assert!(directory.add("9160000003", "ann", None));
        assert_eq!(
            directory.find("*"),
            vec![
                "ann, +7 (916) 000-00-03",
                "Bob, +7 (916) 000-00-02",
                "carol, +7 (916) 000-00-01",
            ]
        );
    }

    #[test]
    fn test_find_empty_query() {
        let directory = sample_directory();
        assert!(directory.find("").is_empty());
        assert!(directory.find_entries("").is_empty());
    }

    #[test]
    fn test_find_and_remove() {
        let mut directory = sample_directory();
        assert_eq!(directory.find_and_remove("mail.ru"), 1);
        assert!(!directory.contains("9035551122"));
        assert_eq!(directory.find_and_remove(""), 0);
        assert_eq!(directory.find_and_remove("*"), 2);
        assert!(directory.is_empty());
    }
}
