//! Screen routes.
//!
//! `/` is the list screen, `/<englishName>` the detail screen.

use crate::error::{CodexError, CodexResult};
use crate::model::ChampionRecord;

/// A screen the application can show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// The searchable list.
    List,
    /// Detail card for one English name.
    Detail(String),
}

impl Route {
    /// Parses a path.
    ///
    /// A single trailing slash is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`CodexError::InvalidRoute`] for paths with more than one
    /// segment or without a leading slash.
    pub fn parse(path: &str) -> CodexResult<Self> {
        let Some(rest) = path.strip_prefix('/') else {
            return Err(CodexError::InvalidRoute(path.to_owned()));
        };
        let rest = rest.strip_suffix('/').unwrap_or(rest);
        if rest.is_empty() {
            return Ok(Self::List);
        }
        if rest.contains('/') {
            return Err(CodexError::InvalidRoute(path.to_owned()));
        }
        Ok(Self::Detail(rest.to_owned()))
    }

    /// Link to a record's detail screen, if it has a key.
    #[must_use]
    pub fn detail_href(record: &ChampionRecord) -> Option<String> {
        record.key().map(|key| Self::Detail(key.to_owned()).path())
    }

    /// Path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::List => "/".to_owned(),
            Self::Detail(key) => format!("/{key}"),
        }
    }
}
