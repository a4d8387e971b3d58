//! # Codex
//!
//! The main crate, integrating the catalog and the detail card.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                          CHAMPION CODEX                          │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  ┌─────────────────┐     ┌─────────────────┐                     │
//! │  │  codex_core     │     │  codex_ui       │                     │
//! │  │                 │     │                 │                     │
//! │  │  • Records      │     │  • Radar        │                     │
//! │  │  • Pipeline     │     │  • Stars        │                     │
//! │  │  • Catalog      │     │  • Detail card  │                     │
//! │  └────────┬────────┘     └────────┬────────┘                     │
//! │           │                       │                              │
//! │           └──────────┬────────────┘                              │
//! │                      ▼                                           │
//! │            ┌─────────────────┐                                   │
//! │            │  BrowseSession  │  search · sort · route · memo     │
//! │            └─────────────────┘                                   │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod session;

// Re-export the layers
pub use codex_core as core;
pub use codex_shared as shared;
pub use codex_ui as ui;

pub use session::{BrowseSession, Screen};
