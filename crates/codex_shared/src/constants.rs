//! # Catalog & Drawing Constants
//!
//! Fixed values for the champion catalog and its chart drawing space.
//!
//! **NOTE:** The drawing constants define the chart's coordinate system.
//! Renderers scale the 0-100 space; they never change it.

// =============================================================================
// DRAWING SPACE
// =============================================================================

/// Side length of the normalized drawing space (view box is `0 0 100 100`).
pub const DRAWING_SIZE: f64 = 100.0;

/// Center of the radar chart, both axes.
pub const RADAR_CENTER: f64 = 50.0;

/// Radius of the radar chart at full scale.
pub const RADAR_RADIUS: f64 = 30.0;

/// Attribute value that lands exactly on the reference triangle.
pub const RATING_SCALE: f64 = 10.0;

/// Number of slots in a difficulty rating.
pub const RATING_SLOTS: usize = 10;

// =============================================================================
// CATALOG
// =============================================================================

/// Group label for records without a primary tag ("Other").
pub const UNTAGGED_LABEL: &str = "기타";

/// Base URL for champion thumbnails (Data Dragon 14.23.1).
///
/// `image.full` is appended verbatim.
pub const ASSET_BASE_URL: &str = "https://ddragon.leagueoflegends.com/cdn/14.23.1/img/champion/";
