//! # Codex Configuration
//!
//! Loaded once at startup from TOML. Every key is optional.
//!
//! ```toml
//! [assets]
//! thumbnail_base_url = "https://ddragon.leagueoflegends.com/cdn/14.23.1/img/champion/"
//!
//! [view]
//! default_sort = "tag"
//! untagged_label = "Other"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use codex_shared::{ASSET_BASE_URL, UNTAGGED_LABEL};

use crate::error::{CodexError, CodexResult};
use crate::query::{QueryPipeline, SortMode};

/// Image asset settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetConfig {
    /// Prefix for `image.full` thumbnails.
    pub thumbnail_base_url: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            thumbnail_base_url: ASSET_BASE_URL.to_owned(),
        }
    }
}

/// List screen settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Sort mode the list opens with.
    pub default_sort: SortMode,
    /// Group label for records without a primary tag.
    pub untagged_label: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_sort: SortMode::ByName,
            untagged_label: UNTAGGED_LABEL.to_owned(),
        }
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodexConfig {
    /// `[assets]`
    pub assets: AssetConfig,
    /// `[view]`
    pub view: ViewConfig,
}

impl CodexConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`CodexError::InvalidConfig`] on syntax errors, unknown keys,
    /// or an empty untagged label.
    pub fn from_toml_str(source: &str) -> CodexResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| CodexError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CodexError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> CodexResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| CodexError::io(path, &e))?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), sort = %config.view.default_sort, "loaded config");
        Ok(config)
    }

    /// Pipeline configured with this file's untagged label.
    #[must_use]
    pub fn pipeline(&self) -> QueryPipeline {
        QueryPipeline::new(self.view.untagged_label.clone())
    }

    fn validate(&self) -> CodexResult<()> {
        if self.view.untagged_label.trim().is_empty() {
            return Err(CodexError::InvalidConfig(
                "view.untagged_label must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
