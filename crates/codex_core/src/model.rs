//! # Champion Records
//!
//! Value snapshots of catalog entries as delivered by the data source.
//!
//! Every field except `englishName` is optional on the wire and defaults when
//! it is missing or `null`. Ratings accept any JSON number and truncate toward
//! zero. A record without a usable `englishName` is kept as data but is never
//! part of a view and can never be looked up.

use serde::{Deserialize, Deserializer, Serialize};

/// Attribute ratings shown on the radar chart and the star row.
///
/// Nominal domain is 0-10. Nothing here enforces it; consumers degrade
/// gracefully on anything else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChampionInfo {
    /// Attack rating.
    #[serde(deserialize_with = "rating")]
    pub attack: i32,
    /// Defense rating.
    #[serde(deserialize_with = "rating")]
    pub defense: i32,
    /// Magic rating.
    #[serde(deserialize_with = "rating")]
    pub magic: i32,
    /// Difficulty rating.
    #[serde(deserialize_with = "rating")]
    pub difficulty: i32,
}

/// Combat statistics. Passed through to the presentation layer untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChampionStats {
    /// Base health.
    pub hp: Option<f64>,
    /// Base mana.
    pub mp: Option<f64>,
    /// Base attack damage.
    pub attackdamage: Option<f64>,
    /// Base attack speed.
    pub attackspeed: Option<f64>,
    /// Base armor.
    pub armor: Option<f64>,
    /// Base magic resist.
    pub spellblock: Option<f64>,
    /// Base movement speed.
    pub movespeed: Option<f64>,
    /// Attack range.
    pub attackrange: Option<f64>,
}

/// Image reference bundle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageRef {
    /// Thumbnail filename, resolved against the asset base URL.
    pub full: Option<String>,
    /// Large portrait URL.
    pub loading_image_url: Option<String>,
    /// Fallback portrait URL.
    pub url: Option<String>,
}

/// One catalog entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChampionRecord {
    /// Opaque identifier. Numbers on the wire are kept as their decimal text.
    #[serde(deserialize_with = "opaque_id")]
    pub id: Option<String>,
    /// Canonical ASCII key, used for search-by-key and routing.
    pub english_name: Option<String>,
    /// Localized name.
    #[serde(rename = "name")]
    pub display_name: Option<String>,
    /// Subtitle.
    pub title: Option<String>,
    /// Role labels, primary first. `null` entries read as empty labels.
    #[serde(deserialize_with = "tag_list")]
    pub tags: Vec<String>,
    /// Attribute ratings.
    pub info: Option<ChampionInfo>,
    /// Combat statistics.
    pub stats: Option<ChampionStats>,
    /// Image references.
    #[serde(deserialize_with = "null_as_default")]
    pub image: ImageRef,
    /// Lore text.
    pub blurb: Option<String>,
}

impl ChampionRecord {
    /// Creates a record with only its keys set.
    #[must_use]
    pub fn new(english_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            english_name: Some(english_name.into()),
            display_name: Some(display_name.into()),
            ..Self::default()
        }
    }

    /// Builder: replaces the tag list.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: sets the attribute ratings.
    #[must_use]
    pub fn with_info(mut self, info: ChampionInfo) -> Self {
        self.info = Some(info);
        self
    }

    /// The routing key, if the record has a usable one.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.english_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    /// Whether the record can appear in a view.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.key().is_some()
    }

    /// Display name, empty when absent.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or_default()
    }

    /// First non-empty role label.
    #[must_use]
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str).filter(|tag| !tag.is_empty())
    }

    /// Attribute ratings, zeroed when absent.
    #[must_use]
    pub fn info_or_default(&self) -> ChampionInfo {
        self.info.unwrap_or_default()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

fn opaque_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(raw.map(|id| match id {
        RawId::Text(text) => text,
        RawId::Signed(n) => n.to_string(),
        RawId::Unsigned(n) => n.to_string(),
    }))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn tag_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Any JSON number, truncated toward zero and saturated to `i32`.
#[allow(clippy::cast_possible_truncation)]
fn rating<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    // `as` saturates and maps NaN to 0.
    Ok(Option::<f64>::deserialize(deserializer)?.map_or(0, |value| value as i32))
}
