//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

static PHONE_GROUPS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{3})([0-9]{3})([0-9]{2})([0-9]{2})")
        .expect("Failed to compile phone groups regex")
});

const PHONE_FORMAT: &str = "+7 ($1) $2-$3-$4";

/// Check whether `phone` is exactly ten ASCII digits with nothing around them.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Rewrite a ten-digit number as `+7 (AAA) BBB-CC-DD`.
///
/// Input without a run of ten digits comes back unchanged. Stored keys are
/// always valid, so the directory never hits that case.
pub fn format_phone(phone: &str) -> String {
    PHONE_GROUPS_REGEX.replace(phone, PHONE_FORMAT).into_owned()
}

/// A type-safe wrapper for phone book keys.
///
/// Construction succeeds only for a bare ten-digit national number, so a
/// `PhoneNumber` can always be formatted.
///
/// # Example
///
/// ```
/// use phone_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("9161234567").unwrap();
/// assert_eq!(phone.formatted(), "+7 (916) 123-45-67");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the input is exactly ten digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !is_valid_phone(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Human readable form, e.g. `+7 (916) 123-45-67`.
    pub fn formatted(&self) -> String {
        format_phone(&self.0)
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Lets maps keyed by PhoneNumber be queried with a plain &str
impl Borrow<str> for PhoneNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
