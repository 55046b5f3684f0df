//! The application session owning the sheet state

use crate::Result;
use crate::drawing::render_layout;
use crate::export::{PrintHost, print_page};
use crate::geometry::{DocumentGeometry, MarginSide, parse_number};
use crate::layout::{
    ExportOptions, PreviewOptions, ScaledLayout, Viewport, calculate_export_layout,
    calculate_preview_layout,
};
use crate::paper::Orientation;
use crate::pdf::PrintPage;
use crate::preferences::{ColorSchemeQuery, PreferenceStore, load_theme, save_theme};
use crate::raster::RasterImage;
use crate::style::{GuidelineStyle, Theme};
use tracing::{debug, instrument};

/// A raw edit coming from a form control
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    PaperSize(String),
    Orientation(Orientation),
    Width(String),
    Height(String),
    Margin(MarginSide, String),
    MarginsLinked(bool),
}

/// Owned state for one editing session
pub struct GuidelinesSession<S: PreferenceStore> {
    geometry: DocumentGeometry,
    style: GuidelineStyle,
    preview_options: PreviewOptions,
    export_options: ExportOptions,
    viewport: Viewport,
    theme: Theme,
    preferences: S,
}

impl<S: PreferenceStore> GuidelinesSession<S> {
    /// Start a session with default geometry and the remembered theme
    pub fn new<Q: ColorSchemeQuery>(preferences: S, system: &Q, viewport: Viewport) -> Self {
        let theme = load_theme(&preferences, system);
        debug!("Starting session with {} theme", theme);
        Self {
            geometry: DocumentGeometry::new(),
            style: GuidelineStyle::default(),
            preview_options: PreviewOptions::default(),
            export_options: ExportOptions::default(),
            viewport,
            theme,
            preferences,
        }
    }

    pub fn with_style(mut self, style: GuidelineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_preview_options(mut self, options: PreviewOptions) -> Self {
        self.preview_options = options;
        self
    }

    pub fn with_export_options(mut self, options: ExportOptions) -> Self {
        self.export_options = options;
        self
    }

    pub fn geometry(&self) -> &DocumentGeometry {
        &self.geometry
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn preferences(&self) -> &S {
        &self.preferences
    }

    /// Apply an edit; invalid input is ignored and the state kept
    ///
    /// Returns whether the edit was accepted.
    pub fn apply(&mut self, edit: Edit) -> bool {
        let outcome = match &edit {
            Edit::PaperSize(name) => self.geometry.select_paper_size_named(name),
            Edit::Orientation(orientation) => {
                self.geometry.set_orientation(*orientation);
                Ok(())
            }
            Edit::Width(raw) => parse_number(raw).and_then(|v| self.geometry.set_width_mm(v)),
            Edit::Height(raw) => parse_number(raw).and_then(|v| self.geometry.set_height_mm(v)),
            Edit::Margin(side, raw) => {
                parse_number(raw).and_then(|v| self.geometry.set_margin_mm(*side, v))
            }
            Edit::MarginsLinked(linked) => {
                self.geometry.set_margins_linked(*linked);
                Ok(())
            }
        };

        match outcome {
            Ok(()) => true,
            Err(e) => {
                debug!("Ignoring edit {:?}: {}", edit, e);
                false
            }
        }
    }

    /// Record a new preview container size
    pub fn resize(&mut self, viewport: Viewport) {
        debug!("Viewport resized to {}x{}", viewport.width_px, viewport.height_px);
        self.viewport = viewport;
    }

    /// Flip the theme and remember the choice
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let theme = self.theme.toggled();
        save_theme(&mut self.preferences, theme)?;
        self.theme = theme;
        Ok(theme)
    }

    /// Layout of the live preview for the current viewport
    pub fn preview_layout(&self) -> Result<ScaledLayout> {
        let available = self.viewport.inset(self.preview_options.padding_px);
        calculate_preview_layout(&self.geometry, &self.style, available)
    }

    /// Render the live preview in the active theme
    pub fn render_preview(&self) -> Result<RasterImage> {
        let layout = self.preview_layout()?;
        render_layout(&layout, &self.theme.palette())
    }

    /// Render the sheet at print resolution on white paper
    #[instrument(skip(self))]
    pub fn export_to_current_geometry(&self) -> Result<RasterImage> {
        let layout = calculate_export_layout(&self.geometry, &self.style, &self.export_options)?;
        let image = render_layout(&layout, &Theme::Light.palette())?;
        debug!("Exported {}x{} px raster", image.width(), image.height());
        Ok(image.with_dpi(self.export_options.dpi))
    }

    /// Export and send the page through the host's print flow
    pub fn print_with<H: PrintHost>(&self, host: &mut H) -> Result<()> {
        let page = PrintPage {
            title: format!(
                "{} {} guidelines",
                self.geometry.paper_label(),
                self.geometry.orientation()
            ),
            image: self.export_to_current_geometry()?,
            width_mm: self.geometry.width_mm(),
            height_mm: self.geometry.height_mm(),
        };
        print_page(host, &page)
    }
}
