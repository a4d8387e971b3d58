//! # Codex UI
//!
//! Geometry and drawing for the champion detail card:
//! - Radar projection of attack / magic / defense
//! - Difficulty stars
//! - Image fallback, stat lines, render commands, SVG output
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                    DETAIL PIPELINE                      │
//! ├────────────────────────────────────────────────────────┤
//! │  ChampionRecord → ChampionDetail → RenderList → SVG    │
//! │                        ↓                               │
//! │        RadarChart · StarRating · StatLine · Image      │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! `radar::project` and `difficulty::expand` are the pure core; the rest
//! only arranges their output.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod detail;
pub mod difficulty;
pub mod image;
pub mod radar;
pub mod render;
pub mod stats;
pub mod style;
pub mod svg;

pub use detail::ChampionDetail;
pub use difficulty::{expand, StarRating};
pub use image::{ImageResolver, ImageSource};
pub use radar::{
    project, project_info, reference_triangle, Axis, RadarChart, RadarProjection, Triangle,
};
pub use render::{RenderCommand, RenderList, TextAnchor};
pub use stats::{stat_lines, StatKind, StatLine};
pub use style::{Color, Theme};
