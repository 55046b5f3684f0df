//! Named paper sizes, orientation and dimension matching

use crate::constants::{PAPER_MATCH_ROUNDING_MM, PAPER_MATCH_TOLERANCE_MM};
use crate::error::{GuidelinesError, Result};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Known paper sizes, in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaperSize {
    Letter,
    Legal,
    Tabloid,
    Ledger,
    Executive,
    A3,
    A4,
    A5,
    A6,
    A7,
    A8,
}

impl PaperSize {
    /// Every size in the order used for matching
    pub const ALL: [PaperSize; 11] = [
        PaperSize::Letter,
        PaperSize::Legal,
        PaperSize::Tabloid,
        PaperSize::Ledger,
        PaperSize::Executive,
        PaperSize::A3,
        PaperSize::A4,
        PaperSize::A5,
        PaperSize::A6,
        PaperSize::A7,
        PaperSize::A8,
    ];

    /// Portrait (width, height) in millimetres
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            // US sizes
            PaperSize::Letter => (216.0, 279.0),
            PaperSize::Legal => (216.0, 356.0),
            PaperSize::Tabloid => (279.0, 432.0),
            PaperSize::Ledger => (432.0, 279.0),
            PaperSize::Executive => (184.0, 267.0),
            // ISO sizes
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::A6 => (105.0, 148.0),
            PaperSize::A7 => (74.0, 105.0),
            PaperSize::A8 => (52.0, 74.0),
        }
    }

    /// (width, height) for the given orientation
    pub fn oriented_mm(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperSize::Letter => "Letter",
            PaperSize::Legal => "Legal",
            PaperSize::Tabloid => "Tabloid",
            PaperSize::Ledger => "Ledger",
            PaperSize::Executive => "Executive",
            PaperSize::A3 => "A3",
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::A6 => "A6",
            PaperSize::A7 => "A7",
            PaperSize::A8 => "A8",
        }
    }

    /// Whether (width, height) equals this size in either orientation
    pub fn matches(self, width_mm: f32, height_mm: f32) -> bool {
        let (w, h) = self.dimensions_mm();
        (within_tolerance(width_mm, w) && within_tolerance(height_mm, h))
            || (within_tolerance(width_mm, h) && within_tolerance(height_mm, w))
    }

    /// Find the first size in table order matching the given dimensions
    pub fn classify(width_mm: f32, height_mm: f32) -> Option<PaperSize> {
        let found = Self::ALL
            .iter()
            .copied()
            .find(|size| size.matches(width_mm, height_mm));
        trace!("Classified {}x{} mm as {:?}", width_mm, height_mm, found);
        found
    }
}

fn within_tolerance(value: f32, target: f32) -> bool {
    // 210.1f32 is 210.100006; compare in f64 with room for that rounding
    let delta = (f64::from(value) - f64::from(target)).abs();
    delta <= f64::from(PAPER_MATCH_TOLERANCE_MM) + PAPER_MATCH_ROUNDING_MM
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaperSize {
    type Err = GuidelinesError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|size| size.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GuidelinesError::UnknownPaperSize(wanted.to_string()))
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => f.write_str("portrait"),
            Orientation::Landscape => f.write_str("landscape"),
        }
    }
}

impl FromStr for Orientation {
    type Err = GuidelinesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            _ => Err(GuidelinesError::UnknownOrientation(s.trim().to_string())),
        }
    }
}

/// Label shown for the current dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaperLabel {
    Named(PaperSize),
    Custom,
}

impl PaperLabel {
    /// Label for arbitrary dimensions
    pub fn for_dimensions(width_mm: f32, height_mm: f32) -> Self {
        PaperSize::classify(width_mm, height_mm)
            .map(PaperLabel::Named)
            .unwrap_or(PaperLabel::Custom)
    }

    pub fn paper_size(self) -> Option<PaperSize> {
        match self {
            PaperLabel::Named(size) => Some(size),
            PaperLabel::Custom => None,
        }
    }
}

impl fmt::Display for PaperLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaperLabel::Named(size) => f.write_str(size.name()),
            PaperLabel::Custom => f.write_str("Custom"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("A4".parse::<PaperSize>().unwrap(), PaperSize::A4);
        assert_eq!(" letter ".parse::<PaperSize>().unwrap(), PaperSize::Letter);
        assert!(matches!(
            "Custom".parse::<PaperSize>(),
            Err(GuidelinesError::UnknownPaperSize(_))
        ));
        for size in PaperSize::ALL {
            assert_eq!(size.to_string().parse::<PaperSize>().unwrap(), size);
        }
    }

    #[test]
    fn test_classify_either_orientation() {
        for size in PaperSize::ALL {
            let (w, h) = size.dimensions_mm();
            let portrait = PaperSize::classify(w, h).unwrap();
            let landscape = PaperSize::classify(h, w).unwrap();
            // Tabloid and Ledger are the same sheet; the earlier entry wins.
            assert!(portrait.matches(w, h));
            assert!(landscape.matches(h, w));
            if size != PaperSize::Ledger {
                assert_eq!(portrait, size);
                assert_eq!(landscape, size);
            }
        }
    }

    #[test]
    fn test_ledger_reports_tabloid_first() {
        assert_eq!(PaperSize::classify(432.0, 279.0), Some(PaperSize::Tabloid));
    }

    #[test]
    fn test_tolerance_edges() {
        assert_eq!(PaperSize::classify(210.09, 296.91), Some(PaperSize::A4));
        assert_eq!(PaperSize::classify(210.2, 297.0), None);
        assert_eq!(PaperLabel::for_dimensions(500.0, 297.0), PaperLabel::Custom);
        assert_eq!(PaperLabel::Custom.to_string(), "Custom");
    }

    #[test]
    fn test_tolerance_is_inclusive() {
        for (w, h) in [(210.1, 297.0), (209.9, 297.0), (210.0, 297.1), (210.0, 296.9)] {
            assert_eq!(PaperSize::classify(w, h), Some(PaperSize::A4), "{w}x{h}");
            assert_eq!(PaperSize::classify(h, w), Some(PaperSize::A4), "{h}x{w}");
        }
        assert_eq!(PaperSize::classify(420.1, 296.9), Some(PaperSize::A3));
        for (w, h) in [(210.11, 297.0), (209.89, 297.0), (210.0, 297.11), (210.0, 296.89)] {
            assert_eq!(PaperSize::classify(w, h), None, "{w}x{h}");
        }
    }

    #[test]
    fn test_orientation() {
        assert_eq!(Orientation::Portrait.toggled(), Orientation::Landscape);
        assert_eq!("Landscape".parse::<Orientation>().unwrap(), Orientation::Landscape);
        assert!(matches!(
            "sideways".parse::<Orientation>(),
            Err(GuidelinesError::UnknownOrientation(name)) if name == "sideways"
        ));
        assert_eq!(PaperSize::A4.oriented_mm(Orientation::Landscape), (297.0, 210.0));
    }
}
