//! SVG backend for render commands.

use std::fmt::Write;

use codex_shared::{Point, DRAWING_SIZE};

use crate::render::RenderCommand;

/// Writes `commands` as a standalone SVG document over the drawing space.
#[must_use]
pub fn write_document(commands: &[RenderCommand]) -> String {
    let mut out = String::with_capacity(256 + commands.len() * 96);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {DRAWING_SIZE} {DRAWING_SIZE}">"#
    );
    for command in commands {
        write_command(&mut out, command);
    }
    out.push_str("</svg>\n");
    out
}

fn write_command(out: &mut String, command: &RenderCommand) {
    // Writing into a String cannot fail.
    let _ = match command {
        RenderCommand::Polygon {
            points,
            fill,
            stroke,
            stroke_width,
        } => writeln!(
            out,
            r#"  <polygon points="{}" fill="{}" stroke="{}" stroke-width="{stroke_width}" />"#,
            point_list(points),
            fill.map_or_else(|| "none".to_owned(), |c| c.to_css()),
            stroke.to_css(),
        ),
        RenderCommand::Line {
            from,
            to,
            color,
            width,
        } => writeln!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{width}" />"#,
            from.x,
            from.y,
            to.x,
            to.y,
            color.to_css(),
        ),
        RenderCommand::Text {
            text,
            at,
            anchor,
            color,
            font_size,
        } => writeln!(
            out,
            r#"  <text x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{font_size}">{}</text>"#,
            at.x,
            at.y,
            anchor.as_svg(),
            color.to_css(),
            escape(text),
        ),
    };
}

fn point_list(points: &[Point]) -> String {
    points
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextAnchor;
    use crate::style::Color;

    #[test]
    fn test_polygon_outline() {
        let svg = write_document(&[RenderCommand::Polygon {
            points: vec![Point::new(50.0, 20.0), Point::new(76.0, 65.0), Point::new(24.0, 65.0)],
            fill: None,
            stroke: Color::SLATE,
            stroke_width: 1.0,
        }]);
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">"#
        ));
        assert!(svg.contains(
            r##"<polygon points="50,20 76,65 24,65" fill="none" stroke="#4b5563" stroke-width="1" />"##
        ));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let svg = write_document(&[RenderCommand::Text {
            text: "<Kai'Sa & co>".into(),
            at: Point::new(50.0, 15.0),
            anchor: TextAnchor::Middle,
            color: Color::MUTED,
            font_size: 8.0,
        }]);
        assert!(svg.contains("&lt;Kai'Sa &amp; co&gt;"));
        assert!(svg.contains(r#"text-anchor="middle""#));
    }
}
