//! # Codex Core
//!
//! Catalog model and query logic for the champion codex.
//!
//! ## Design Principles
//!
//! 1. **Pure pipeline** - `compute_view` has no state, no I/O, no randomness
//! 2. **Default, don't fail** - missing fields are defaulted; only records
//!    without an English name are dropped
//! 3. **Ordered output** - grouped views iterate in key order, always
//! 4. **External configuration** - labels and asset URLs come from TOML
//!
//! ## Example
//!
//! ```rust,ignore
//! use codex_core::{Catalog, ChampionSource, QueryPipeline, SortMode};
//!
//! let catalog = Catalog::from_json_path("data/champions.json")?;
//! let view = QueryPipeline::default().compute_view(catalog.records(), "ash", SortMode::ByName);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod catalog;
pub mod collation;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod route;

pub use catalog::{find_by_key, Catalog, ChampionSource};
pub use collation::NameCollator;
pub use config::{AssetConfig, CodexConfig, ViewConfig};
pub use error::{CodexError, CodexResult};
pub use model::{ChampionInfo, ChampionRecord, ChampionStats, ImageRef};
pub use query::{compute_view, matches_search, QueryPipeline, SortMode, ViewLayout, ViewModel};
pub use route::Route;
