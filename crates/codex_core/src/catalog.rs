//! # Champion Catalog
//!
//! The data source seam. The application reads records through
//! [`ChampionSource`]; [`Catalog`] is the in-memory implementation backed by a
//! JSON array of records (the shape the catalog service returns).

use std::path::Path;

use crate::error::{CodexError, CodexResult};
use crate::model::ChampionRecord;

/// Where records come from.
pub trait ChampionSource {
    /// Every record, in source order. Invalid records included.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce its records.
    fn list_all(&self) -> CodexResult<Vec<ChampionRecord>>;

    /// The record whose English name is exactly `english_name`.
    ///
    /// # Errors
    ///
    /// Returns [`CodexError::NotFound`] if no valid record has that key.
    fn get_by_key(&self, english_name: &str) -> CodexResult<ChampionRecord>;
}

/// The valid record whose English name is exactly `english_name`.
#[must_use]
pub fn find_by_key<'a>(
    records: &'a [ChampionRecord],
    english_name: &str,
) -> Option<&'a ChampionRecord> {
    records
        .iter()
        .find(|record| record.key() == Some(english_name))
}

/// Immutable in-memory record set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    records: Vec<ChampionRecord>,
}

impl Catalog {
    /// Wraps an existing record set.
    #[must_use]
    pub fn new(records: Vec<ChampionRecord>) -> Self {
        Self { records }
    }

    /// Parses a JSON array of records.
    ///
    /// Each element is decoded on its own. An element that is not a record
    /// (wrong field types, not an object) is logged and skipped; the rest of
    /// the catalog still loads.
    ///
    /// # Errors
    ///
    /// Returns [`CodexError::InvalidCatalog`] if the document is not a JSON
    /// array.
    pub fn from_json_str(json: &str) -> CodexResult<Self> {
        let elements: Vec<serde_json::Value> =
            serde_json::from_str(json).map_err(|e| CodexError::InvalidCatalog(e.to_string()))?;

        let total = elements.len();
        let records: Vec<ChampionRecord> = elements
            .into_iter()
            .enumerate()
            .filter_map(|(index, element)| {
                match serde_json::from_value::<ChampionRecord>(element) {
                    Ok(record) => Some(record),
                    Err(error) => {
                        tracing::warn!(index, %error, "skipping malformed catalog record");
                        None
                    }
                }
            })
            .collect();

        let invalid = records.iter().filter(|r| !r.is_valid()).count();
        if invalid > 0 || records.len() < total {
            tracing::debug!(
                total,
                skipped = total - records.len(),
                invalid,
                "catalog has unusable records"
            );
        }
        Ok(Self::new(records))
    }

    /// Reads and parses a JSON catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CodexError::Io`] if the file cannot be read, or
    /// [`CodexError::InvalidCatalog`] if it does not parse.
    pub fn from_json_path(path: impl AsRef<Path>) -> CodexResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CodexError::io(path, &e))?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), records = catalog.len(), "loaded champion catalog");
        Ok(catalog)
    }

    /// All records.
    #[must_use]
    pub fn records(&self) -> &[ChampionRecord] {
        &self.records
    }

    /// Number of records, invalid ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrowing lookup by English name.
    #[must_use]
    pub fn find(&self, english_name: &str) -> Option<&ChampionRecord> {
        find_by_key(&self.records, english_name)
    }
}

impl ChampionSource for Catalog {
    fn list_all(&self) -> CodexResult<Vec<ChampionRecord>> {
        Ok(self.records.clone())
    }

    fn get_by_key(&self, english_name: &str) -> CodexResult<ChampionRecord> {
        self.find(english_name)
            .cloned()
            .ok_or_else(|| CodexError::NotFound(english_name.to_owned()))
    }
}
