//! Image URL resolution.
//!
//! Thumbnails are `image.full` appended to the asset base URL. Portraits try
//! `image.loadingImageUrl` first and fall back to `image.url` when the first
//! load fails.

use codex_core::{AssetConfig, ImageRef};

/// A display URL with at most one fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    /// URL to load first.
    pub primary: String,
    /// URL to load if `primary` fails.
    pub fallback: Option<String>,
}

impl ImageSource {
    /// The next URL to try after `failed` did not load.
    ///
    /// The fallback is offered once. A failing fallback ends the chain.
    #[must_use]
    pub fn after_failure(&self, failed: &str) -> Option<&str> {
        let fallback = self.fallback.as_deref()?;
        if failed == self.primary && fallback != failed {
            tracing::debug!(primary = %self.primary, fallback, "image failed, using fallback");
            Some(fallback)
        } else {
            None
        }
    }
}

/// Builds display URLs from a record's image bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    thumbnail_base_url: String,
}

impl ImageResolver {
    /// Creates a resolver with an explicit asset base URL.
    #[must_use]
    pub fn new(thumbnail_base_url: impl Into<String>) -> Self {
        Self {
            thumbnail_base_url: thumbnail_base_url.into(),
        }
    }

    /// Creates a resolver from the `[assets]` config section.
    #[must_use]
    pub fn from_config(config: &AssetConfig) -> Self {
        Self::new(config.thumbnail_base_url.clone())
    }

    /// Thumbnail for list cards. `None` without `image.full`.
    #[must_use]
    pub fn thumbnail(&self, image: &ImageRef) -> Option<ImageSource> {
        let full = image.full.as_deref().filter(|f| !f.is_empty())?;
        Some(ImageSource {
            primary: format!("{}{full}", self.thumbnail_base_url),
            fallback: None,
        })
    }

    /// Portrait for the detail card.
    ///
    /// Falls back to `image.url`. With only `image.url` present it becomes
    /// the primary. `None` when neither is set.
    #[must_use]
    pub fn portrait(&self, image: &ImageRef) -> Option<ImageSource> {
        let loading = image.loading_image_url.clone().filter(|u| !u.is_empty());
        let url = image.url.clone().filter(|u| !u.is_empty());
        match (loading, url) {
            (Some(primary), fallback) => Some(ImageSource { primary, fallback }),
            (None, Some(primary)) => Some(ImageSource {
                primary,
                fallback: None,
            }),
            (None, None) => None,
        }
    }
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::from_config(&AssetConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> ImageRef {
        ImageRef {
            full: Some("Garen.png".into()),
            loading_image_url: Some("https://cdn/loading/Garen_0.jpg".into()),
            url: Some("https://cdn/fallback/Garen.jpg".into()),
        }
    }

    #[test]
    fn test_thumbnail_uses_asset_base() {
        let source = ImageResolver::default().thumbnail(&bundle()).unwrap();
        assert_eq!(
            source.primary,
            "https://ddragon.leagueoflegends.com/cdn/14.23.1/img/champion/Garen.png"
        );
        assert_eq!(source.fallback, None);
    }

    #[test]
    fn test_thumbnail_needs_filename() {
        assert_eq!(ImageResolver::default().thumbnail(&ImageRef::default()), None);
    }

    #[test]
    fn test_portrait_falls_back_once() {
        let source = ImageResolver::default().portrait(&bundle()).unwrap();
        assert_eq!(source.primary, "https://cdn/loading/Garen_0.jpg");

        let next = source.after_failure(&source.primary);
        assert_eq!(next, Some("https://cdn/fallback/Garen.jpg"));
        assert_eq!(source.after_failure("https://cdn/fallback/Garen.jpg"), None);
    }

    #[test]
    fn test_portrait_promotes_fallback() {
        let image = ImageRef {
            url: Some("https://cdn/fallback/Garen.jpg".into()),
            ..ImageRef::default()
        };
        let source = ImageResolver::new("http://assets/").portrait(&image).unwrap();
        assert_eq!(source.primary, "https://cdn/fallback/Garen.jpg");
        assert_eq!(source.after_failure(&source.primary), None);
    }
}
