//! Render inputs: stroke color, button style, render config and draw area.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use super::constants::*;
use crate::error::ButtonError;
use crate::{clamp, color_to_hex, parse_hex_color};

/// RGBA stroke color, channels in [0.0, 1.0].
///
/// Serialized as a `#RRGGBB` / `#RRGGBBAA` string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(s: &str) -> Result<Self, ButtonError> {
        parse_hex_color(s)
            .map(|(r, g, b, a)| Self { r, g, b, a })
            .ok_or_else(|| ButtonError::InvalidColor(s.to_string()))
    }

    /// Hex form, alpha omitted when fully opaque.
    pub fn to_hex(&self) -> String {
        color_to_hex(self.r, self.g, self.b, self.a)
    }

    /// Returns a copy with every channel clamped to [0.0, 1.0].
    pub fn clamped(self) -> Self {
        Self {
            r: clamp(self.r, 0.0, 1.0),
            g: clamp(self.g, 0.0, 1.0),
            b: clamp(self.b, 0.0, 1.0),
            a: clamp(self.a, 0.0, 1.0),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgba(DEFAULT_COLOR.0, DEFAULT_COLOR.1, DEFAULT_COLOR.2, DEFAULT_COLOR.3)
    }
}

impl TryFrom<String> for Color {
    type Error = ButtonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Visual style of the button, loadable from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyle {
    /// Stroke color for every state.
    pub stroke_color: Color,
    /// Stroke width in points.
    pub stroke_width: f64,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::default(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl ButtonStyle {
    /// Validates and clamps all values to valid ranges.
    pub fn validate(&mut self) {
        self.stroke_width = clamp(self.stroke_width, MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
        self.stroke_color = self.stroke_color.clamped();
    }
}

/// Everything the renderer needs besides the state and the area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub stroke_color: Color,
    pub stroke_width: f64,
    /// Completion fraction. Only read in `Progress`; never clamped by the renderer.
    pub percent: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::from_style(&ButtonStyle::default(), DEFAULT_PERCENT)
    }
}

impl RenderConfig {
    pub fn from_style(style: &ButtonStyle, percent: f64) -> Self {
        Self {
            stroke_color: style.stroke_color,
            stroke_width: style.stroke_width,
            percent,
        }
    }

    pub fn with_percent(mut self, percent: f64) -> Self {
        self.percent = percent;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }
}

/// The rectangle available for drawing, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawArea {
    pub width: f64,
    pub height: f64,
}

impl DrawArea {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Side of the largest square that fits in the area.
    #[inline]
    pub fn side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Inset between the square and the drawn shapes.
    #[inline]
    pub fn padding(&self) -> f64 {
        self.side() / PADDING_DIVISOR
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Hit test for taps delivered in area coordinates. Edges count as inside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x <= self.width && point.y <= self.height
    }
}
