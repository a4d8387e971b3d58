//! # Codex Shared
//!
//! Common types used by the catalog crate and the rendering crate.
//!
//! ## RULE
//!
//! This crate must NEVER depend on:
//! - `codex_core` (records, queries)
//! - `codex_ui` (colors, render commands)
//!
//! If you need a record type, put it in `codex_core`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod math;

pub use constants::{
    ASSET_BASE_URL, DRAWING_SIZE, RADAR_CENTER, RADAR_RADIUS, RATING_SCALE, RATING_SLOTS,
    UNTAGGED_LABEL,
};
pub use math::Point;
