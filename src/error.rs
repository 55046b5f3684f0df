//! Error types for the guideline-sheet library

use thiserror::Error;

/// Result type alias using GuidelinesError
pub type Result<T> = std::result::Result<T, GuidelinesError>;

/// Errors that can occur while editing, laying out or exporting a sheet
#[derive(Debug, Error)]
pub enum GuidelinesError {
    /// Error from the underlying lopdf library
    #[error("PDF operation failed: {0}")]
    PdfError(#[from] lopdf::Error),

    /// Raster encoding failure
    #[error("Image operation failed: {0}")]
    ImageError(#[from] image::ImageError),

    /// Filesystem failure
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Preference store could not be read or written
    #[error("Preference store failed: {0}")]
    PreferenceError(String),

    /// Layout calculation error
    #[error("Layout calculation failed: {0}")]
    LayoutError(String),

    /// Invalid dimensions
    #[error("Invalid dimensions: {0}")]
    DimensionError(String),

    /// Name does not match any known paper size
    #[error("Unknown paper size: {0}")]
    UnknownPaperSize(String),

    /// Name does not match any orientation
    #[error("Unknown orientation: {0}")]
    UnknownOrientation(String),

    /// The host refused to open a print surface
    #[error("Unable to open the print window. Please allow pop-ups for this page and try again.")]
    SurfaceBlocked,

    /// The host failed while printing
    #[error("Printing failed: {0}")]
    PrintError(String),
}
