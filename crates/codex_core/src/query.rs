//! # Query Pipeline
//!
//! Turns a record set plus the user's query state into a renderable view.
//!
//! ```text
//! records ──> drop invalid ──> search filter ──┬─> ByName:       collate by display name
//!                                              └─> ByPrimaryTag: bucket by tags[0], collate each bucket,
//!                                                                order buckets by key
//! ```
//!
//! ## Search rule
//!
//! A record matches when the term is empty, when its display name contains
//! the term exactly as typed, or when its English name contains the term
//! ignoring case. Display names are Hangul in the shipped catalog, which has
//! no case, so only the English side is folded.
//!
//! The pipeline is pure. It first computes a [`ViewLayout`] of indices into
//! the input slice, then borrows the records into a [`ViewModel`]. Callers
//! that memoize keep the layout.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use codex_shared::UNTAGGED_LABEL;

use crate::collation::NameCollator;
use crate::model::ChampionRecord;

/// How the list screen orders records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortMode {
    /// One flat list, collated by display name.
    #[default]
    #[serde(rename = "name")]
    ByName,
    /// Buckets keyed by primary tag.
    #[serde(rename = "tag")]
    ByPrimaryTag,
}

impl SortMode {
    /// Wire/config spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ByName => "name",
            Self::ByPrimaryTag => "tag",
        }
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::ByName),
            "tag" => Ok(Self::ByPrimaryTag),
            other => Err(format!("unknown sort mode `{other}` (expected `name` or `tag`)")),
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A view expressed as indices into the record slice it was computed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewLayout {
    /// Ordered indices.
    Flat(Vec<usize>),
    /// Buckets in key order, each with ordered indices.
    Grouped(Vec<(String, Vec<usize>)>),
}

impl ViewLayout {
    /// Number of records in the layout.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(indices) => indices.len(),
            Self::Grouped(groups) => groups.iter().map(|(_, indices)| indices.len()).sum(),
        }
    }

    /// Whether no record made it through the filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrows records into a view.
    ///
    /// `records` must be the slice the layout was computed from. Indices
    /// outside it are skipped.
    #[must_use]
    pub fn materialize<'a>(&self, records: &'a [ChampionRecord]) -> ViewModel<'a> {
        let pick = |indices: &[usize]| -> Vec<&'a ChampionRecord> {
            indices.iter().filter_map(|&i| records.get(i)).collect()
        };
        match self {
            Self::Flat(indices) => ViewModel::Flat(pick(indices)),
            Self::Grouped(groups) => ViewModel::Grouped(
                groups
                    .iter()
                    .map(|(key, indices)| (key.clone(), pick(indices)))
                    .collect(),
            ),
        }
    }
}

/// Renderable output of the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewModel<'a> {
    /// Records in display order.
    Flat(Vec<&'a ChampionRecord>),
    /// Tag label to records, iterated in key order.
    Grouped(BTreeMap<String, Vec<&'a ChampionRecord>>),
}

impl<'a> ViewModel<'a> {
    /// Number of records shown.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Flat(records) => records.len(),
            Self::Grouped(groups) => groups.values().map(Vec::len).sum(),
        }
    }

    /// Whether nothing is shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All shown records in display order, groups flattened.
    pub fn records(&self) -> Box<dyn Iterator<Item = &'a ChampionRecord> + '_> {
        match self {
            Self::Flat(records) => Box::new(records.iter().copied()),
            Self::Grouped(groups) => Box::new(groups.values().flat_map(|g| g.iter().copied())),
        }
    }
}

/// Whether `record` passes the search filter.
///
/// Does not check validity; the pipeline drops invalid records first.
#[must_use]
pub fn matches_search(record: &ChampionRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    if record.display_name().contains(term) {
        return true;
    }
    record
        .english_name
        .as_deref()
        .is_some_and(|name| name.to_lowercase().contains(&term.to_lowercase()))
}

/// The filter/sort/group pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryPipeline {
    untagged_label: String,
}

impl QueryPipeline {
    /// Creates a pipeline that files untagged records under `untagged_label`.
    #[must_use]
    pub fn new(untagged_label: impl Into<String>) -> Self {
        Self {
            untagged_label: untagged_label.into(),
        }
    }

    /// Group key for records without a primary tag.
    #[must_use]
    pub fn untagged_label(&self) -> &str {
        &self.untagged_label
    }

    /// Computes the layout for `(records, term, mode)`.
    #[must_use]
    pub fn layout(&self, records: &[ChampionRecord], term: &str, mode: SortMode) -> ViewLayout {
        let filtered: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.is_valid() && matches_search(record, term))
            .map(|(i, _)| i)
            .collect();

        tracing::debug!(
            total = records.len(),
            matched = filtered.len(),
            mode = %mode,
            "computed champion view"
        );

        let mut collator = NameCollator::new();
        match mode {
            SortMode::ByName => ViewLayout::Flat(sort_by_name(records, filtered, &mut collator)),
            SortMode::ByPrimaryTag => {
                let mut buckets: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
                for i in filtered {
                    let key = records[i].primary_tag().unwrap_or(self.untagged_label.as_str());
                    buckets.entry(key).or_default().push(i);
                }
                ViewLayout::Grouped(
                    buckets
                        .into_iter()
                        .map(|(key, members)| {
                            (key.to_owned(), sort_by_name(records, members, &mut collator))
                        })
                        .collect(),
                )
            }
        }
    }

    /// Computes the view for `(records, term, mode)`.
    #[must_use]
    pub fn compute_view<'a>(
        &self,
        records: &'a [ChampionRecord],
        term: &str,
        mode: SortMode,
    ) -> ViewModel<'a> {
        self.layout(records, term, mode).materialize(records)
    }
}

impl Default for QueryPipeline {
    fn default() -> Self {
        Self::new(UNTAGGED_LABEL)
    }
}

/// [`QueryPipeline::compute_view`] with the default untagged label.
#[must_use]
pub fn compute_view<'a>(
    records: &'a [ChampionRecord],
    term: &str,
    mode: SortMode,
) -> ViewModel<'a> {
    QueryPipeline::default().compute_view(records, term, mode)
}

/// Stable sort of `indices` by display name.
fn sort_by_name(
    records: &[ChampionRecord],
    mut indices: Vec<usize>,
    collator: &mut NameCollator,
) -> Vec<usize> {
    indices.sort_by(|&a, &b| {
        collator.compare(records[a].display_name(), records[b].display_name())
    });
    indices
}
