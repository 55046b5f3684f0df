//! Colours, theme palettes and guideline styling

use crate::constants::{MARGIN_STROKE_MM, MARKER_SIZE_MM, MARKER_STROKE_MM};
use crate::error::GuidelinesError;
use std::fmt;
use std::str::FromStr;

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values should be 0.0-1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Create a color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Gray color
    pub fn gray(level: f32) -> Self {
        let l = level.clamp(0.0, 1.0);
        Self::rgb(l, l, l)
    }

    /// Light blue used for the marker fill
    pub fn light_blue() -> Self {
        Self::from_rgb8(0xAD, 0xD8, 0xE6)
    }

    /// Opaque 8-bit RGBA channels
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            255,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Light or dark appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Preview colours for this theme
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                page: Color::white(),
                marker_fill: Color::light_blue(),
                marker_stroke: Color::black(),
                margin_stroke: Color::gray(0.6),
            },
            Theme::Dark => Palette {
                page: Color::from_rgb8(0x1E, 0x1E, 0x22),
                marker_fill: Color::from_rgb8(0x3A, 0x6E, 0x82),
                marker_stroke: Color::from_rgb8(0xE8, 0xE8, 0xEE),
                margin_stroke: Color::gray(0.45),
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = GuidelinesError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(GuidelinesError::PreferenceError(format!(
                "unknown theme '{other}'"
            ))),
        }
    }
}

/// Colours used when drawing a sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub page: Color,
    pub marker_fill: Color,
    pub marker_stroke: Color,
    pub margin_stroke: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Theme::Light.palette()
    }
}

/// Physical sizes of the drawn guidelines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuidelineStyle {
    /// Edge length of the centred marker in mm
    pub marker_size_mm: f32,
    /// Marker border width in mm
    pub marker_stroke_mm: f32,
    /// Margin guide width in mm (0 hides the guide)
    pub margin_stroke_mm: f32,
}

impl GuidelineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marker_size(mut self, size_mm: f32) -> Self {
        self.marker_size_mm = size_mm.max(0.0);
        self
    }

    pub fn with_marker_stroke(mut self, width_mm: f32) -> Self {
        self.marker_stroke_mm = width_mm.max(0.0);
        self
    }

    pub fn with_margin_stroke(mut self, width_mm: f32) -> Self {
        self.margin_stroke_mm = width_mm.max(0.0);
        self
    }
}

impl Default for GuidelineStyle {
    fn default() -> Self {
        Self {
            marker_size_mm: MARKER_SIZE_MM,
            marker_stroke_mm: MARKER_STROKE_MM,
            margin_stroke_mm: MARGIN_STROKE_MM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_channels() {
        assert_eq!(Color::light_blue().to_rgba8(), [0xAD, 0xD8, 0xE6, 255]);
        assert_eq!(Color::rgb(2.0, -1.0, 0.5).to_rgba8(), [255, 0, 128, 255]);
    }

    #[test]
    fn test_theme_names() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().to_string(), "light");
        assert!(matches!(
            "sepia".parse::<Theme>(),
            Err(GuidelinesError::PreferenceError(_))
        ));
        assert_eq!(Palette::default().page, Color::white());
    }

    #[test]
    fn test_style_builder() {
        let style = GuidelineStyle::new()
            .with_marker_size(30.0)
            .with_margin_stroke(-1.0);
        assert_eq!(style.marker_size_mm, 30.0);
        assert_eq!(style.margin_stroke_mm, 0.0);
        assert_eq!(style.marker_stroke_mm, MARKER_STROKE_MM);
    }
}
