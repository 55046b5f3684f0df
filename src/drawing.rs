//! Drawing operations for guideline sheets

use crate::Result;
use crate::constants::MAX_RASTER_PIXELS;
use crate::drawing_utils::{fill_rect, stroke_rect};
use crate::error::GuidelinesError;
use crate::layout::{PixelRect, ScaledLayout};
use crate::raster::RasterImage;
use crate::style::{Color, Palette};
use tracing::{debug, trace};

/// A single raster drawing step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Fill {
        rect: PixelRect,
        color: Color,
    },
    Stroke {
        rect: PixelRect,
        width: f32,
        color: Color,
    },
}

/// Generate the drawing steps for a laid-out sheet, back to front
pub fn generate_sheet_operations(layout: &ScaledLayout, palette: &Palette) -> Vec<DrawOp> {
    let mut operations = Vec::with_capacity(3);

    if layout.margin_stroke_px > 0.0 {
        operations.push(DrawOp::Stroke {
            rect: layout.content_box,
            width: layout.margin_stroke_px,
            color: palette.margin_stroke,
        });
    }

    operations.push(DrawOp::Fill {
        rect: layout.marker_box,
        color: palette.marker_fill,
    });

    if layout.marker_stroke_px > 0.0 {
        operations.push(DrawOp::Stroke {
            rect: layout.marker_box,
            width: layout.marker_stroke_px,
            color: palette.marker_stroke,
        });
    }

    trace!("Generated {} operations", operations.len());
    operations
}

/// Pixel size of the canvas, at least one pixel per axis
pub fn canvas_size(layout: &ScaledLayout) -> Result<(u32, u32)> {
    let width = layout.canvas_width_px.round();
    let height = layout.canvas_height_px.round();
    if !(width.is_finite() && height.is_finite()) || width > u32::MAX as f32 || height > u32::MAX as f32
    {
        return Err(GuidelinesError::LayoutError(format!(
            "canvas {}x{} px cannot be allocated",
            layout.canvas_width_px, layout.canvas_height_px
        )));
    }
    let (width, height) = ((width as u32).max(1), (height as u32).max(1));
    if u64::from(width) * u64::from(height) > MAX_RASTER_PIXELS {
        return Err(GuidelinesError::LayoutError(format!(
            "canvas {width}x{height} px exceeds the {MAX_RASTER_PIXELS} pixel limit"
        )));
    }
    Ok((width, height))
}

/// Render a layout onto a fresh surface
pub fn render_layout(layout: &ScaledLayout, palette: &Palette) -> Result<RasterImage> {
    let (width, height) = canvas_size(layout)?;
    debug!("Rendering sheet onto {}x{} px surface", width, height);

    let mut surface = RasterImage::new(width, height, palette.page);
    for op in generate_sheet_operations(layout, palette) {
        apply_operation(&mut surface, &op);
    }
    Ok(surface)
}

fn apply_operation(surface: &mut RasterImage, op: &DrawOp) {
    match *op {
        DrawOp::Fill { rect, color } => fill_rect(surface.pixels_mut(), rect, color),
        DrawOp::Stroke { rect, width, color } => {
            stroke_rect(surface.pixels_mut(), rect, width, color)
        }
    }
}
