//! Constants for paper units, layout defaults and export resolution

/// Millimetres per inch
pub const MM_PER_INCH: f32 = 25.4;

/// PDF points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Resolution used when rendering a page for print
pub const PRINT_DPI: f32 = 300.0;

/// Absolute tolerance in mm when matching dimensions against a named paper size
pub const PAPER_MATCH_TOLERANCE_MM: f32 = 0.1;

/// Slack absorbing f32 rounding of entered values, so the tolerance is inclusive
pub const PAPER_MATCH_ROUNDING_MM: f64 = 1e-4;

/// Default margin on every side in mm
pub const DEFAULT_MARGIN_MM: f32 = 10.0;

/// Edge length of the centred reference marker in mm
pub const MARKER_SIZE_MM: f32 = 50.0;

/// Marker border width in mm
pub const MARKER_STROKE_MM: f32 = 0.25;

/// Margin guide width in mm
pub const MARGIN_STROKE_MM: f32 = 0.2;

/// Strokes never get thinner than one device pixel
pub const MIN_STROKE_PX: f32 = 1.0;

/// Padding kept clear around the preview canvas, per side, in pixels
pub const PREVIEW_PADDING_PX: f32 = 24.0;

/// Largest raster, in pixels, a sheet may be rendered to
pub const MAX_RASTER_PIXELS: u64 = 100_000_000;

/// Preference key holding the light/dark theme
pub const THEME_PREFERENCE_KEY: &str = "theme";

/// Convert millimetres to pixels at the given resolution
#[inline]
pub fn mm_to_px(mm: f32, dpi: f32) -> f32 {
    mm * dpi / MM_PER_INCH
}

/// Convert millimetres to PDF points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_INCH / MM_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversions() {
        assert!((mm_to_px(25.4, PRINT_DPI) - 300.0).abs() < 1e-3);
        assert!((mm_to_pt(210.0) - 595.2756).abs() < 1e-2);
    }
}
