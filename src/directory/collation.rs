//! Name ordering for search results.
//!
//! Uses the Unicode root collation (ICU4X compiled data): case and accents
//! are secondary to the base letter, punctuation sorts before digits, and
//! digits before letters.

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use once_cell::sync::Lazy;
use std::cmp::Ordering;

static ROOT_COLLATOR: Lazy<CollatorBorrowed<'static>> = Lazy::new(|| {
    Collator::try_new(Default::default(), CollatorOptions::default())
        .expect("Failed to load root collation data")
});

/// Compare two names for display order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.compare(a, b)
}
