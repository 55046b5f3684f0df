//! Document geometry and dimension reconciliation
//!
//! [`DocumentGeometry`] keeps the paper label, the orientation and the raw
//! width/height consistent under size selection, orientation changes and
//! direct edits. Rejected edits leave every field untouched.

use crate::constants::DEFAULT_MARGIN_MM;
use crate::error::{GuidelinesError, Result};
use crate::paper::{Orientation, PaperLabel, PaperSize};
use tracing::{debug, trace};

/// Which side of the page a margin applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginSide {
    Top,
    Bottom,
    Left,
    Right,
}

/// Margins in millimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Margins {
    /// Same margin on every side
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }

    pub fn get(&self, side: MarginSide) -> f32 {
        match side {
            MarginSide::Top => self.top,
            MarginSide::Bottom => self.bottom,
            MarginSide::Left => self.left,
            MarginSide::Right => self.right,
        }
    }

    fn set(&mut self, side: MarginSide, value: f32) {
        match side {
            MarginSide::Top => self.top = value,
            MarginSide::Bottom => self.bottom = value,
            MarginSide::Left => self.left = value,
            MarginSide::Right => self.right = value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(DEFAULT_MARGIN_MM)
    }
}

/// The editable page description for one session
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentGeometry {
    paper_label: PaperLabel,
    orientation: Orientation,
    width_mm: f32,
    height_mm: f32,
    margins: Margins,
    margins_linked: bool,
}

impl DocumentGeometry {
    /// A4 portrait with linked 10 mm margins
    pub fn new() -> Self {
        let size = PaperSize::A4;
        let (width_mm, height_mm) = size.dimensions_mm();
        Self {
            paper_label: PaperLabel::Named(size),
            orientation: Orientation::Portrait,
            width_mm,
            height_mm,
            margins: Margins::default(),
            margins_linked: true,
        }
    }

    pub fn paper_label(&self) -> PaperLabel {
        self.paper_label
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn width_mm(&self) -> f32 {
        self.width_mm
    }

    pub fn height_mm(&self) -> f32 {
        self.height_mm
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn margins_linked(&self) -> bool {
        self.margins_linked
    }

    /// Apply a named size in the current orientation
    pub fn select_paper_size(&mut self, size: PaperSize) {
        let (w, h) = size.oriented_mm(self.orientation);
        debug!("Selecting {} ({} x {} mm, {})", size, w, h, self.orientation);
        self.width_mm = w;
        self.height_mm = h;
        self.paper_label = PaperLabel::Named(size);
    }

    /// Apply a size by its display name
    pub fn select_paper_size_named(&mut self, name: &str) -> Result<()> {
        let size = name.parse::<PaperSize>()?;
        self.select_paper_size(size);
        Ok(())
    }

    /// Switch orientation by swapping the current width and height
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if orientation == self.orientation {
            trace!("Orientation already {}", orientation);
            return;
        }
        std::mem::swap(&mut self.width_mm, &mut self.height_mm);
        self.orientation = orientation;
        debug!(
            "Orientation now {} ({} x {} mm)",
            orientation, self.width_mm, self.height_mm
        );
    }

    pub fn toggle_orientation(&mut self) {
        self.set_orientation(self.orientation.toggled());
    }

    /// Set the paper width and re-derive the label
    pub fn set_width_mm(&mut self, value: f32) -> Result<()> {
        self.width_mm = validate_dimension(value)?;
        self.reclassify();
        Ok(())
    }

    /// Set the paper height and re-derive the label
    pub fn set_height_mm(&mut self, value: f32) -> Result<()> {
        self.height_mm = validate_dimension(value)?;
        self.reclassify();
        Ok(())
    }

    /// Set one margin, or all four while margins are linked
    pub fn set_margin_mm(&mut self, side: MarginSide, value: f32) -> Result<()> {
        let value = validate_margin(value)?;
        if self.margins_linked {
            self.margins = Margins::uniform(value);
        } else {
            self.margins.set(side, value);
        }
        trace!("Margins now {:?}", self.margins);
        Ok(())
    }

    /// Link or unlink margins; linking copies the top margin to every side
    pub fn set_margins_linked(&mut self, linked: bool) {
        self.margins_linked = linked;
        if linked {
            self.margins = Margins::uniform(self.margins.top);
        }
        debug!("Margins linked: {}", linked);
    }

    fn reclassify(&mut self) {
        self.paper_label = PaperLabel::for_dimensions(self.width_mm, self.height_mm);
        debug!(
            "Dimensions {} x {} mm labelled {}",
            self.width_mm, self.height_mm, self.paper_label
        );
    }
}

impl Default for DocumentGeometry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a raw text field into a number
pub fn parse_number(raw: &str) -> Result<f32> {
    raw.trim()
        .parse::<f32>()
        .map_err(|_| GuidelinesError::DimensionError(format!("'{raw}' is not a number")))
}

fn validate_dimension(value: f32) -> Result<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GuidelinesError::DimensionError(format!(
            "paper dimension must be positive, got {value}"
        )))
    }
}

fn validate_margin(value: f32) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(GuidelinesError::DimensionError(format!(
            "margin must be zero or more, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let geometry = DocumentGeometry::new();
        assert_eq!(geometry.paper_label(), PaperLabel::Named(PaperSize::A4));
        assert_eq!(geometry.orientation(), Orientation::Portrait);
        assert_eq!((geometry.width_mm(), geometry.height_mm()), (210.0, 297.0));
        assert_eq!(geometry.margins(), Margins::uniform(10.0));
        assert!(geometry.margins_linked());
    }

    #[test]
    fn test_select_then_toggle_commutes() {
        for size in PaperSize::ALL {
            for orientation in [Orientation::Portrait, Orientation::Landscape] {
                let mut toggled = DocumentGeometry::new();
                toggled.select_paper_size(size);
                toggled.set_orientation(orientation);

                let mut direct = DocumentGeometry::new();
                direct.set_orientation(orientation);
                direct.select_paper_size(size);

                assert_eq!(
                    (toggled.width_mm(), toggled.height_mm()),
                    (direct.width_mm(), direct.height_mm()),
                    "{size} {orientation}"
                );
                assert_eq!(toggled.paper_label(), PaperLabel::Named(size));
            }
        }
    }

    #[test]
    fn test_a3_scenario() {
        let mut geometry = DocumentGeometry::new();
        geometry.select_paper_size_named("A3").unwrap();
        assert_eq!((geometry.width_mm(), geometry.height_mm()), (297.0, 420.0));

        geometry.set_orientation(Orientation::Landscape);
        assert_eq!((geometry.width_mm(), geometry.height_mm()), (420.0, 297.0));
        assert_eq!(geometry.paper_label(), PaperLabel::Named(PaperSize::A3));

        geometry.set_width_mm(420.05).unwrap();
        assert_eq!(geometry.paper_label(), PaperLabel::Named(PaperSize::A3));

        geometry.set_width_mm(500.0).unwrap();
        assert_eq!(geometry.paper_label(), PaperLabel::Custom);
    }

    #[test]
    fn test_edits_land_on_named_size() {
        let mut geometry = DocumentGeometry::new();
        geometry.set_width_mm(500.0).unwrap();
        assert_eq!(geometry.paper_label(), PaperLabel::Custom);

        geometry.set_width_mm(148.0).unwrap();
        geometry.set_height_mm(105.04).unwrap();
        assert_eq!(geometry.paper_label(), PaperLabel::Named(PaperSize::A6));

        geometry.set_height_mm(210.0).unwrap();
        assert_eq!(geometry.paper_label(), PaperLabel::Named(PaperSize::A5));
    }

    #[test]
    fn test_edits_at_tolerance_boundary() {
        let mut geometry = DocumentGeometry::new();
        geometry.set_width_mm(210.1).unwrap();
        assert_eq!(geometry.paper_label(), PaperLabel::Named(PaperSize::A4));
        geometry.set_width_mm(209.9).unwrap();
        assert_eq!(geometry.paper_label(), PaperLabel::Named(PaperSize::A4));
        geometry.set_height_mm(297.1).unwrap();
        assert_eq!(geometry.paper_label(), PaperLabel::Named(PaperSize::A4));
        geometry.set_height_mm(297.2).unwrap();
        assert_eq!(geometry.paper_label(), PaperLabel::Custom);
    }

    #[test]
    fn test_custom_sizes_stay_custom() {
        let mut geometry = DocumentGeometry::new();
        for (w, h) in [(100.0, 100.0), (210.5, 297.0), (1.0, 2.0), (999.0, 333.0)] {
            geometry.set_width_mm(w).unwrap();
            geometry.set_height_mm(h).unwrap();
            assert_eq!(geometry.paper_label(), PaperLabel::Custom, "{w}x{h}");
        }
    }

    #[test]
    fn test_invalid_edits_leave_state() {
        let mut geometry = DocumentGeometry::new();
        let before = geometry.clone();

        assert!(geometry.set_width_mm(-5.0).is_err());
        assert!(geometry.set_width_mm(0.0).is_err());
        assert!(geometry.set_height_mm(f32::NAN).is_err());
        assert!(geometry.set_height_mm(f32::INFINITY).is_err());
        assert!(geometry.set_margin_mm(MarginSide::Top, -1.0).is_err());
        assert!(geometry.select_paper_size_named("Custom").is_err());
        assert_eq!(geometry, before);

        assert!(parse_number("").is_err());
        assert!(parse_number("abc").is_err());
        assert_eq!(parse_number(" 12.5 ").unwrap(), 12.5);
    }

    #[test]
    fn test_toggle_keeps_custom_label() {
        let mut geometry = DocumentGeometry::new();
        geometry.set_width_mm(123.0).unwrap();
        geometry.toggle_orientation();
        assert_eq!(geometry.paper_label(), PaperLabel::Custom);
        assert_eq!((geometry.width_mm(), geometry.height_mm()), (297.0, 123.0));

        // Setting the current orientation again is a no-op
        geometry.set_orientation(Orientation::Landscape);
        assert_eq!((geometry.width_mm(), geometry.height_mm()), (297.0, 123.0));
    }

    #[test]
    fn test_linked_margins() {
        let mut geometry = DocumentGeometry::new();
        geometry.set_margin_mm(MarginSide::Left, 15.0).unwrap();
        assert_eq!(geometry.margins(), Margins::uniform(15.0));

        geometry.set_margins_linked(false);
        geometry.set_margin_mm(MarginSide::Top, 5.0).unwrap();
        geometry.set_margin_mm(MarginSide::Right, 0.0).unwrap();
        let margins = geometry.margins();
        assert_eq!(margins.top, 5.0);
        assert_eq!(margins.right, 0.0);
        assert_eq!(margins.get(MarginSide::Bottom), 15.0);

        geometry.set_margins_linked(true);
        assert_eq!(geometry.margins(), Margins::uniform(5.0));
    }
}
