//! Render commands.
//!
//! Widgets emit commands in drawing-space coordinates; a backend (SVG here,
//! anything else downstream) turns them into pixels.

use codex_shared::Point;

use crate::style::Color;

/// Horizontal anchoring of a text command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// `at` is the left edge.
    Start,
    /// `at` is the center.
    #[default]
    Middle,
}

impl TextAnchor {
    /// SVG `text-anchor` value.
    #[must_use]
    pub const fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// A render command.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Closed polygon.
    Polygon {
        /// Vertices in drawing order.
        points: Vec<Point>,
        /// Fill color, `None` for outline only.
        fill: Option<Color>,
        /// Stroke color.
        stroke: Color,
        /// Stroke width.
        stroke_width: f32,
    },
    /// Line segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke color.
        color: Color,
        /// Stroke width.
        width: f32,
    },
    /// Text.
    Text {
        /// Text content.
        text: String,
        /// Anchor position (baseline).
        at: Point,
        /// Horizontal anchoring.
        anchor: TextAnchor,
        /// Text color.
        color: Color,
        /// Font size.
        font_size: f32,
    },
}

/// Collects commands for one drawing.
#[derive(Debug, Clone, Default)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(32),
        }
    }

    /// Adds a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Adds multiple render commands.
    pub fn extend(&mut self, commands: impl IntoIterator<Item = RenderCommand>) {
        self.commands.extend(commands);
    }

    /// Commands in paint order.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Returns the total command count.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_list_keeps_paint_order() {
        let mut list = RenderList::new();
        list.push(RenderCommand::Line {
            from: Point::ZERO,
            to: Point::new(1.0, 1.0),
            color: Color::WHITE,
            width: 1.0,
        });
        list.extend([RenderCommand::Text {
            text: "x".into(),
            at: Point::ZERO,
            anchor: TextAnchor::Middle,
            color: Color::WHITE,
            font_size: 8.0,
        }]);

        assert_eq!(list.command_count(), 2);
        assert!(matches!(list.commands()[0], RenderCommand::Line { .. }));
        assert!(matches!(list.commands()[1], RenderCommand::Text { .. }));
    }
}
