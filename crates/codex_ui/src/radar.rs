//! # Radar Projection
//!
//! Maps attack / magic / defense onto an upward-pointing triangle.
//!
//! ```text
//!              attack (-90°)
//!                  *
//!                 / \
//!                / C \
//!               *-----*
//!   defense (150°)     magic (30°)
//! ```
//!
//! `C = (50, 50)`, full scale radius 30. A value `v` sits at distance
//! `v / 10 * 30` from `C` along its axis. Values outside 0-10 simply land
//! inside or beyond the reference outline; nothing is clamped.

use std::sync::OnceLock;

use codex_core::ChampionInfo;
use codex_shared::{Point, RADAR_CENTER, RADAR_RADIUS, RATING_SCALE};

use crate::render::{RenderCommand, RenderList, TextAnchor};
use crate::style::Theme;

/// Three vertices in `[attack, magic, defense]` order.
pub type Triangle = [Point; 3];

/// One radar axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Straight up.
    Attack,
    /// Lower right.
    Magic,
    /// Lower left.
    Defense,
}

impl Axis {
    /// Axes in vertex order.
    pub const ALL: [Self; 3] = [Self::Attack, Self::Magic, Self::Defense];

    /// Angle from +x in degrees, clockwise (y grows downward).
    #[must_use]
    pub const fn angle_degrees(self) -> f64 {
        match self {
            Self::Attack => -90.0,
            Self::Magic => 30.0,
            Self::Defense => 150.0,
        }
    }

    /// Label shown next to the axis.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Attack => "공격",
            Self::Magic => "마법",
            Self::Defense => "방어",
        }
    }

    /// Label anchor, just outside the reference outline.
    #[must_use]
    pub const fn label_anchor(self) -> Point {
        match self {
            Self::Attack => Point::new(50.0, 15.0),
            Self::Magic => Point::new(85.0, 75.0),
            Self::Defense => Point::new(15.0, 75.0),
        }
    }
}

/// Output of [`project`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarProjection {
    /// The champion's polygon.
    pub data_triangle: Triangle,
    /// Full-scale outline, identical for every call.
    pub reference_triangle: Triangle,
}

/// The chart center.
#[must_use]
pub const fn center() -> Point {
    Point::new(RADAR_CENTER, RADAR_CENTER)
}

/// Vertex for `value` on `axis`.
fn vertex(value: f64, axis: Axis) -> Point {
    let distance = (value / RATING_SCALE) * RADAR_RADIUS;
    center().polar_offset(distance, axis.angle_degrees())
}

/// `NaN` reads as "absent".
fn sanitize(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Full-scale outline, computed once per process.
#[must_use]
pub fn reference_triangle() -> Triangle {
    static REFERENCE: OnceLock<Triangle> = OnceLock::new();
    *REFERENCE.get_or_init(|| Axis::ALL.map(|axis| vertex(RATING_SCALE, axis)))
}

/// Projects three ratings onto the chart.
///
/// Total over every input: `NaN` counts as 0, everything else projects as is.
#[must_use]
pub fn project(attack: f64, defense: f64, magic: f64) -> RadarProjection {
    let values = [sanitize(attack), sanitize(magic), sanitize(defense)];
    let mut data_triangle = [Point::ZERO; 3];
    for ((slot, value), axis) in data_triangle.iter_mut().zip(values).zip(Axis::ALL) {
        *slot = vertex(value, axis);
    }
    RadarProjection {
        data_triangle,
        reference_triangle: reference_triangle(),
    }
}

/// Projects a record's ratings, zero for anything absent.
#[must_use]
pub fn project_info(info: Option<&ChampionInfo>) -> RadarProjection {
    let info = info.copied().unwrap_or_default();
    project(
        f64::from(info.attack),
        f64::from(info.defense),
        f64::from(info.magic),
    )
}

/// A labelled radar chart ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarChart {
    /// Raw values, `[attack, magic, defense]`, shown in the labels.
    values: [f64; 3],
    projection: RadarProjection,
}

impl RadarChart {
    /// Creates a chart for three ratings.
    #[must_use]
    pub fn new(attack: f64, defense: f64, magic: f64) -> Self {
        Self {
            values: [sanitize(attack), sanitize(magic), sanitize(defense)],
            projection: project(attack, defense, magic),
        }
    }

    /// Creates a chart from a record's ratings.
    #[must_use]
    pub fn from_info(info: Option<&ChampionInfo>) -> Self {
        let info = info.copied().unwrap_or_default();
        Self::new(
            f64::from(info.attack),
            f64::from(info.defense),
            f64::from(info.magic),
        )
    }

    /// The projected geometry.
    #[must_use]
    pub const fn projection(&self) -> &RadarProjection {
        &self.projection
    }

    /// Raw value on `axis`.
    #[must_use]
    pub fn value(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Attack => self.values[0],
            Axis::Magic => self.values[1],
            Axis::Defense => self.values[2],
        }
    }

    /// Outline, spokes, data polygon, then labels.
    pub fn render(&self, theme: &Theme, out: &mut RenderList) {
        let reference = self.projection.reference_triangle;

        out.push(RenderCommand::Polygon {
            points: reference.to_vec(),
            fill: None,
            stroke: theme.outline,
            stroke_width: theme.outline_width,
        });
        out.extend(reference.iter().map(|&tip| RenderCommand::Line {
            from: center(),
            to: tip,
            color: theme.spoke,
            width: theme.spoke_width,
        }));
        out.push(RenderCommand::Polygon {
            points: self.projection.data_triangle.to_vec(),
            fill: Some(theme.data_fill),
            stroke: theme.data_stroke,
            stroke_width: theme.data_width,
        });
        out.extend(Axis::ALL.iter().map(|&axis| RenderCommand::Text {
            text: format!("{} ({})", axis.label(), self.value(axis)),
            at: axis.label_anchor(),
            anchor: TextAnchor::Middle,
            color: theme.label,
            font_size: theme.label_size,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn test_full_scale_equals_reference() {
        let projection = project(10.0, 10.0, 10.0);
        assert_eq!(projection.data_triangle, projection.reference_triangle);
    }

    #[test]
    fn test_zero_collapses_to_center() {
        let projection = project(0.0, 0.0, 0.0);
        assert_eq!(projection.data_triangle, [Point::new(50.0, 50.0); 3]);
    }

    #[test]
    fn test_reference_vertices() {
        let [attack, magic, defense] = reference_triangle();
        let half_width = 30.0 * 30f64.to_radians().cos();
        assert!(close(attack, Point::new(50.0, 20.0)));
        assert!(close(magic, Point::new(50.0 + half_width, 65.0)));
        assert!(close(defense, Point::new(50.0 - half_width, 65.0)));
    }

    #[test]
    fn test_axes_are_independent() {
        let projection = project(5.0, 0.0, 0.0);
        let [attack, magic, defense] = projection.data_triangle;
        assert!(close(attack, Point::new(50.0, 35.0)));
        assert!(close(magic, center()));
        assert!(close(defense, center()));
    }

    #[test]
    fn test_out_of_range_extrapolates() {
        let [attack, _, _] = project(20.0, 0.0, 0.0).data_triangle;
        assert!(close(attack, Point::new(50.0, -10.0)));

        let [attack, _, _] = project(-5.0, 0.0, 0.0).data_triangle;
        assert!(close(attack, Point::new(50.0, 65.0)));
    }

    #[test]
    fn test_nan_reads_as_zero() {
        let projection = project(f64::NAN, f64::NAN, f64::NAN);
        assert_eq!(projection.data_triangle, [center(); 3]);
    }

    #[test]
    fn test_missing_info_projects_to_center() {
        assert_eq!(project_info(None).data_triangle, [center(); 3]);
    }

    #[test]
    fn test_render_order_and_labels() {
        let info = ChampionInfo {
            attack: 7,
            defense: 7,
            magic: 1,
            difficulty: 5,
        };
        let chart = RadarChart::from_info(Some(&info));
        let mut list = RenderList::new();
        chart.render(&Theme::default(), &mut list);

        // outline + 3 spokes + data + 3 labels
        assert_eq!(list.command_count(), 8);
        assert!(matches!(
            &list.commands()[0],
            RenderCommand::Polygon { fill: None, .. }
        ));
        assert!(matches!(
            &list.commands()[4],
            RenderCommand::Polygon { fill: Some(_), .. }
        ));
        let RenderCommand::Text { text, .. } = &list.commands()[5] else {
            panic!("expected attack label");
        };
        assert_eq!(text, "공격 (7)");
    }
}
