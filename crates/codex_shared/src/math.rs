//! Mathematical types shared between the projector and the renderers.
//!
//! Coordinates live in the 100x100 drawing space: origin top-left, y down.

use serde::{Deserialize, Serialize};

/// 2D point - chart vertices, label anchors
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
}

impl Point {
    /// Creates a new point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin of the drawing space
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Point at `distance` from `self` along `degrees`.
    ///
    /// Angles are measured from +x and grow clockwise, since y points down.
    #[must_use]
    pub fn polar_offset(self, distance: f64, degrees: f64) -> Self {
        let theta = degrees.to_radians();
        Self::new(
            self.x + distance * theta.cos(),
            self.y + distance * theta.sin(),
        )
    }

    /// Distance to another point
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let d = self - other;
        (d.x * d.x + d.y * d.y).sqrt()
    }
}

impl std::ops::Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
