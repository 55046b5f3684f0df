//! Paper guideline sheets: size reconciliation, scaled preview layout and print export
//!
//! A [`GuidelinesSession`] owns the [`DocumentGeometry`] of one sheet. Form
//! controls feed it [`Edit`]s, the preview is laid out with
//! [`calculate_preview_layout`] for the current viewport, and the same sheet is
//! rendered at 300 DPI by [`GuidelinesSession::export_to_current_geometry`] and
//! handed to a [`PrintHost`].

pub mod constants;
mod drawing;
mod drawing_utils;
pub mod error;
pub mod export;
pub mod geometry;
pub mod layout;
pub mod paper;
pub mod pdf;
pub mod preferences;
pub mod raster;
pub mod session;
pub mod style;

pub use drawing::{DrawOp, generate_sheet_operations, render_layout};
pub use error::{GuidelinesError, Result};
pub use export::{PdfPrintHost, PrintHost, PrintSurface, print_page};
pub use geometry::{DocumentGeometry, MarginSide, Margins};
pub use layout::{
    ExportOptions, Fit, PixelRect, PreviewOptions, ScaledLayout, Viewport,
    calculate_export_layout, calculate_preview_layout,
};
pub use paper::{Orientation, PaperLabel, PaperSize};
pub use pdf::{PrintPage, build_print_document, render_pdf_bytes};
pub use preferences::{
    ColorSchemeQuery, FixedColorScheme, JsonFilePreferenceStore, MemoryPreferenceStore,
    PreferenceStore,
};
pub use raster::RasterImage;
pub use session::{Edit, GuidelinesSession};
pub use style::{Color, GuidelineStyle, Palette, Theme};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_session_flow() {
        let mut session = GuidelinesSession::new(
            MemoryPreferenceStore::default(),
            &FixedColorScheme::default(),
            Viewport::new(1024.0, 768.0),
        );
        assert!(session.apply(Edit::PaperSize("Letter".into())));
        assert_eq!(session.geometry().paper_label().to_string(), "Letter");

        let layout = session.preview_layout().unwrap();
        assert!(layout.canvas_width_px > 0.0);
        assert!(layout.marker_box.width > 0.0);
    }
}
