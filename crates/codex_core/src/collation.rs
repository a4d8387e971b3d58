//! Display-name collation.
//!
//! Names are ordered with the Unicode Collation Algorithm using the CLDR
//! root tailoring, so mixed Hangul/Latin catalogs sort the way readers
//! expect instead of by code point.

use std::cmp::Ordering;

use feruca::Collator;

/// Comparator for display names.
///
/// Holds the collator's lookup cache; create one per sort.
pub struct NameCollator {
    inner: Collator,
}

impl NameCollator {
    /// Creates a collator with the CLDR root tailoring.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Collator::default(),
        }
    }

    /// Compares two names.
    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        self.inner.collate(a, b)
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NameCollator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameCollator").finish_non_exhaustive()
    }
}
