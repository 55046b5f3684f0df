//! Raster surfaces produced by preview and export

use crate::Result;
use crate::style::Color;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// An RGBA image together with the resolution it was rendered at
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pixels: RgbaImage,
    dpi: Option<f32>,
}

impl RasterImage {
    /// Blank surface of the given size filled with `background`
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width.max(1), height.max(1), Rgba(background.to_rgba8())),
            dpi: None,
        }
    }

    /// Record the physical resolution of this image
    pub fn with_dpi(mut self, dpi: f32) -> Self {
        self.dpi = Some(dpi);
        self
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Resolution for export rasters; `None` for screen previews
    pub fn dpi(&self) -> Option<f32> {
        self.dpi
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (x < self.width() && y < self.height()).then(|| self.pixels.get_pixel(x, y).0)
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut RgbaImage {
        &mut self.pixels
    }

    /// Packed 8-bit RGB samples, row-major
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.width() as usize * self.height() as usize * 3);
        for pixel in self.pixels.pixels() {
            rgb.extend_from_slice(&pixel.0[..3]);
        }
        rgb
    }

    /// Encode as PNG
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.pixels
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Write a PNG file
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!(
            "Saving {}x{} raster to {}",
            self.width(),
            self.height(),
            path.display()
        );
        self.pixels.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_surface() {
        let raster = RasterImage::new(4, 3, Color::white()).with_dpi(300.0);
        assert_eq!((raster.width(), raster.height()), (4, 3));
        assert_eq!(raster.dpi(), Some(300.0));
        assert_eq!(raster.pixel(3, 2), Some([255, 255, 255, 255]));
        assert_eq!(raster.pixel(4, 0), None);
        assert_eq!(raster.to_rgb_bytes().len(), 4 * 3 * 3);
    }

    #[test]
    fn test_png_encoding() {
        let raster = RasterImage::new(2, 2, Color::black());
        let png = raster.to_png_bytes().unwrap();
        assert_eq!(&png[1..4], b"PNG");
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(1, 1).0, [0, 0, 0, 255]);
    }
}
