//! Difficulty stars.
//!
//! Slot `i` (1-based) is filled iff `i <= difficulty`. The comparison alone
//! saturates out-of-range values: anything at or below 0 fills nothing,
//! anything at or above 10 fills everything.

use codex_shared::{Point, RATING_SLOTS};

use crate::render::{RenderCommand, RenderList, TextAnchor};
use crate::style::Theme;

/// Glyph drawn for every slot.
pub const STAR: &str = "★";

/// Expands a difficulty into per-slot flags.
#[must_use]
pub fn expand(difficulty: i32) -> [bool; RATING_SLOTS] {
    let mut slots = [false; RATING_SLOTS];
    for (slot, position) in slots.iter_mut().zip(1..) {
        *slot = position <= difficulty;
    }
    slots
}

/// A row of difficulty stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    slots: [bool; RATING_SLOTS],
}

impl StarRating {
    /// Creates a rating row.
    #[must_use]
    pub fn new(difficulty: i32) -> Self {
        Self {
            slots: expand(difficulty),
        }
    }

    /// Per-slot flags.
    #[must_use]
    pub const fn slots(&self) -> &[bool; RATING_SLOTS] {
        &self.slots
    }

    /// Number of filled slots.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|&&filled| filled).count()
    }

    /// Plain-text rendering, `★` filled and `☆` empty.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.slots
            .iter()
            .map(|&filled| if filled { '★' } else { '☆' })
            .collect()
    }

    /// One star per slot, left to right from `origin`.
    pub fn render(&self, origin: Point, spacing: f64, theme: &Theme, out: &mut RenderList) {
        out.extend(self.slots.iter().zip(0u32..).map(|(&filled, i)| RenderCommand::Text {
            text: STAR.to_owned(),
            at: Point::new(origin.x + f64::from(i) * spacing, origin.y),
            anchor: TextAnchor::Start,
            color: if filled {
                theme.star_filled
            } else {
                theme.star_empty
            },
            font_size: theme.label_size,
        }));
    }
}
