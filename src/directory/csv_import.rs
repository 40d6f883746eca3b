//! Bulk import from `name;phone;email` lines.

use super::phone_book::Directory;
use once_cell::sync::Lazy;
use regex::Regex;

static NEW_LINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\r\n]+").expect("Failed to compile newline regex"));

const FIELDS_DELIMITER: char = ';';

/// One import line split into its positional fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvLine<'a> {
    pub name: &'a str,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
}

impl<'a> CsvLine<'a> {
    /// Split a line on `;`. Missing trailing fields are `None`, extra fields
    /// are ignored; no quoting or escaping is recognised.
    pub fn parse(line: &'a str) -> Self {
        let mut values = line.split(FIELDS_DELIMITER);
        Self {
            name: values.next().unwrap_or_default(),
            phone: values.next(),
            email: values.next(),
        }
    }
}

impl Directory {
    /// Import records from delimited text and return how many lines were
    /// applied.
    ///
    /// Lines are separated by any run of `\r`/`\n`. A line whose phone is not
    /// yet present is added, otherwise the existing record is updated with the
    /// same rules as [`Directory::update`]. Lines that fail validation are
    /// skipped without affecting the rest of the import.
    pub fn import_from_csv(&mut self, csv: &str) -> usize {
        let mut applied = 0;
        let mut skipped = 0;

        for line in NEW_LINE_REGEX.split(csv) {
            let CsvLine { name, phone, email } = CsvLine::parse(line);

            let ok = match phone {
                Some(phone) if self.contains(phone) => self.update(phone, name, email),
                Some(phone) => self.add(phone, name, email),
                None => {
                    tracing::debug!(line = %line, "Skipping line without phone field");
                    false
                }
            };

            if ok {
                applied += 1;
            } else {
                skipped += 1;
            }
        }

        tracing::info!(applied, skipped, "CSV import finished");

        applied
    }
}
