//! Layout calculation mapping paper millimetres onto pixels

use crate::Result;
use crate::constants::{MIN_STROKE_PX, MM_PER_INCH, PREVIEW_PADDING_PX, PRINT_DPI, mm_to_px};
use crate::error::GuidelinesError;
use crate::geometry::{DocumentGeometry, Margins};
use crate::style::GuidelineStyle;
use tracing::{debug, trace};

/// Axis-aligned rectangle in pixels, origin at the canvas top-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Which axis limited the canvas size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    Width,
    Height,
    /// Scale fixed from a resolution, no fitting
    Resolution,
}

/// Pixel size of the area the preview may occupy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width_px: f32,
    pub height_px: f32,
}

impl Viewport {
    pub fn new(width_px: f32, height_px: f32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    /// Area left after removing `padding_px` on every side
    pub fn inset(&self, padding_px: f32) -> Viewport {
        Viewport::new(
            (self.width_px - 2.0 * padding_px).max(0.0),
            (self.height_px - 2.0 * padding_px).max(0.0),
        )
    }
}

/// Preview configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewOptions {
    pub padding_px: f32,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            padding_px: PREVIEW_PADDING_PX,
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    pub dpi: f32,
}

impl ExportOptions {
    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { dpi: PRINT_DPI }
    }
}

/// Derived pixel layout of a sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledLayout {
    /// Pixels per millimetre on both axes
    pub scale: f32,
    pub canvas_width_px: f32,
    pub canvas_height_px: f32,
    /// Full paper rectangle the margins are measured from
    pub margin_box: PixelRect,
    /// Drawable region inside the margins
    pub content_box: PixelRect,
    /// Reference marker centred in the content box
    pub marker_box: PixelRect,
    pub marker_stroke_px: f32,
    pub margin_stroke_px: f32,
    pub fit: Fit,
}

/// Fit the paper into `available` while keeping its aspect ratio
pub fn calculate_preview_layout(
    geometry: &DocumentGeometry,
    style: &GuidelineStyle,
    available: Viewport,
) -> Result<ScaledLayout> {
    let (width_mm, height_mm) = paper_dimensions(geometry)?;
    if !(available.width_px.is_finite()
        && available.height_px.is_finite()
        && available.width_px > 0.0
        && available.height_px > 0.0)
    {
        return Err(GuidelinesError::LayoutError(format!(
            "available area must be positive, got {}x{}",
            available.width_px, available.height_px
        )));
    }

    let paper_aspect = width_mm / height_mm;
    let area_aspect = available.width_px / available.height_px;

    let (canvas_width_px, canvas_height_px, fit) = if area_aspect > paper_aspect {
        let height = available.height_px;
        (height * paper_aspect, height, Fit::Height)
    } else {
        let width = available.width_px;
        (width, width / paper_aspect, Fit::Width)
    };
    let scale = canvas_width_px / width_mm;

    debug!(
        "Preview {:?}-fit: {}x{} px at {} px/mm",
        fit, canvas_width_px, canvas_height_px, scale
    );

    Ok(place_guidelines(
        scale,
        canvas_width_px,
        canvas_height_px,
        &geometry.margins(),
        style,
        fit,
    ))
}

/// Lay the paper out at a fixed resolution
pub fn calculate_export_layout(
    geometry: &DocumentGeometry,
    style: &GuidelineStyle,
    options: &ExportOptions,
) -> Result<ScaledLayout> {
    let (width_mm, height_mm) = paper_dimensions(geometry)?;
    if !(options.dpi.is_finite() && options.dpi > 0.0) {
        return Err(GuidelinesError::LayoutError(format!(
            "export resolution must be positive, got {} dpi",
            options.dpi
        )));
    }

    let scale = options.dpi / MM_PER_INCH;
    let canvas_width_px = mm_to_px(width_mm, options.dpi);
    let canvas_height_px = mm_to_px(height_mm, options.dpi);

    debug!(
        "Export at {} dpi: {}x{} px",
        options.dpi, canvas_width_px, canvas_height_px
    );

    Ok(place_guidelines(
        scale,
        canvas_width_px,
        canvas_height_px,
        &geometry.margins(),
        style,
        Fit::Resolution,
    ))
}

/// Stroke width in pixels, never thinner than one pixel unless disabled
pub fn stroke_px(width_mm: f32, scale: f32) -> f32 {
    if width_mm <= 0.0 {
        0.0
    } else {
        (width_mm * scale).max(MIN_STROKE_PX)
    }
}

fn paper_dimensions(geometry: &DocumentGeometry) -> Result<(f32, f32)> {
    let (w, h) = (geometry.width_mm(), geometry.height_mm());
    if w > 0.0 && h > 0.0 {
        Ok((w, h))
    } else {
        Err(GuidelinesError::DimensionError(format!(
            "paper must have positive size, got {w}x{h} mm"
        )))
    }
}

fn place_guidelines(
    scale: f32,
    canvas_width_px: f32,
    canvas_height_px: f32,
    margins: &Margins,
    style: &GuidelineStyle,
    fit: Fit,
) -> ScaledLayout {
    let top = margins.top * scale;
    let bottom = margins.bottom * scale;
    let left = margins.left * scale;
    let right = margins.right * scale;

    let drawable_width = (canvas_width_px - left - right).max(0.0);
    let drawable_height = (canvas_height_px - top - bottom).max(0.0);
    let margin_box = PixelRect::new(0.0, 0.0, canvas_width_px, canvas_height_px);
    let content_box = PixelRect::new(left, top, drawable_width, drawable_height);

    let marker_size = style.marker_size_mm * scale;
    let marker_box = PixelRect::new(
        left + (drawable_width - marker_size) / 2.0,
        top + (drawable_height - marker_size) / 2.0,
        marker_size,
        marker_size,
    );

    trace!("Content box {:?}, marker {:?}", content_box, marker_box);

    ScaledLayout {
        scale,
        canvas_width_px,
        canvas_height_px,
        margin_box,
        content_box,
        marker_box,
        marker_stroke_px: stroke_px(style.marker_stroke_mm, scale),
        margin_stroke_px: stroke_px(style.margin_stroke_mm, scale),
        fit,
    }
}
