//! Styling for the codex cards.
//!
//! Dark slate panels, gold accents, gray guide lines.

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Gold accent (filled stars, data polygon).
    pub const GOLD: Self = Self::hex_rgb(0x00fa_cc15);
    /// Guide outline gray.
    pub const SLATE: Self = Self::hex_rgb(0x004b_5563);
    /// Spoke gray, darker than the outline.
    pub const SLATE_DARK: Self = Self::hex_rgb(0x0037_4151);
    /// Label gray.
    pub const MUTED: Self = Self::hex_rgb(0x009c_a3af);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates an opaque color from `0xRRGGBB`.
    #[must_use]
    pub const fn hex_rgb(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// CSS spelling: `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    #[must_use]
    pub fn to_css(self) -> String {
        let [r, g, b] = [self.r, self.g, self.b].map(channel);
        if self.a >= 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("rgba({r}, {g}, {b}, {})", self.a.clamp(0.0, 1.0))
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Colors and stroke widths for the radar chart and the star row.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Reference triangle outline.
    pub outline: Color,
    /// Center-to-vertex spokes.
    pub spoke: Color,
    /// Data polygon stroke.
    pub data_stroke: Color,
    /// Data polygon fill.
    pub data_fill: Color,
    /// Axis labels.
    pub label: Color,
    /// Filled difficulty star.
    pub star_filled: Color,
    /// Empty difficulty star.
    pub star_empty: Color,
    /// Outline stroke width.
    pub outline_width: f32,
    /// Spoke stroke width.
    pub spoke_width: f32,
    /// Data polygon stroke width.
    pub data_width: f32,
    /// Label font size in drawing units.
    pub label_size: f32,
}

impl Theme {
    /// Dark card theme.
    pub const CODEX_DARK: Self = Self {
        outline: Color::SLATE,
        spoke: Color::SLATE_DARK,
        data_stroke: Color::GOLD,
        data_fill: Color::GOLD.with_alpha(0.5),
        label: Color::MUTED,
        star_filled: Color::GOLD,
        star_empty: Color::SLATE,
        outline_width: 1.0,
        spoke_width: 0.5,
        data_width: 2.0,
        label_size: 8.0,
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::CODEX_DARK
    }
}
