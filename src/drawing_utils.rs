//! Shared raster primitives for sheet drawing

use crate::layout::PixelRect;
use crate::style::Color;
use image::{Rgba, RgbaImage};

/// Pixel span covering `[start, end)` after rounding, clamped to `limit`
fn pixel_span(start: f32, end: f32, limit: u32) -> (u32, u32) {
    let lo = start.round().max(0.0) as u32;
    let hi = end.round().max(0.0) as u32;
    (lo.min(limit), hi.min(limit))
}

/// Fill a rectangle, clipped to the image
pub fn fill_rect(image: &mut RgbaImage, rect: PixelRect, color: Color) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return;
    }
    let (x0, x1) = pixel_span(rect.x, rect.right(), image.width());
    let (y0, y1) = pixel_span(rect.y, rect.bottom(), image.height());
    let rgba = Rgba(color.to_rgba8());
    for y in y0..y1 {
        for x in x0..x1 {
            image.put_pixel(x, y, rgba);
        }
    }
}

/// Stroke a rectangle outline centred on its edges
pub fn stroke_rect(image: &mut RgbaImage, rect: PixelRect, width: f32, color: Color) {
    if width <= 0.0 {
        return;
    }
    let half = width / 2.0;
    let outer = PixelRect::new(
        rect.x - half,
        rect.y - half,
        rect.width + width,
        rect.height + width,
    );

    // Top and bottom bands span the full outer width
    fill_rect(image, PixelRect::new(outer.x, outer.y, outer.width, width), color);
    fill_rect(
        image,
        PixelRect::new(outer.x, outer.bottom() - width, outer.width, width),
        color,
    );
    // Left and right bands between them
    let side_height = (outer.height - 2.0 * width).max(0.0);
    fill_rect(
        image,
        PixelRect::new(outer.x, outer.y + width, width, side_height),
        color,
    );
    fill_rect(
        image,
        PixelRect::new(outer.right() - width, outer.y + width, width, side_height),
        color,
    );
}
