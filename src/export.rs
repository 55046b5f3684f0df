//! Print hosts and the export flow
//!
//! Exporting renders the sheet at print resolution, then hands it to a
//! [`PrintHost`]. The host opens a surface, receives the page, prints it and
//! closes it again. If the host refuses to open a surface the export fails with
//! [`GuidelinesError::SurfaceBlocked`], whose message is meant to be shown to the
//! user as a blocking alert.

use crate::Result;
use crate::error::GuidelinesError;
use crate::pdf::{PrintPage, render_pdf_bytes};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// A transient surface that receives one page and prints it
pub trait PrintSurface {
    /// Place the rendered page on the surface
    fn write_page(&mut self, page: &PrintPage) -> Result<()>;

    /// Invoke the native print flow
    fn print(&mut self) -> Result<()>;

    /// Release the surface
    fn close(self) -> Result<()>;
}

/// Capability to open print surfaces
pub trait PrintHost {
    type Surface: PrintSurface;

    /// Open a surface, or `None` when the host blocks it
    fn open_surface(&mut self, title: &str) -> Option<Self::Surface>;
}

/// Send a page through the host's print flow
///
/// The surface is closed on every path once it has been opened.
#[instrument(skip(host, page), fields(title = %page.title))]
pub fn print_page<H: PrintHost>(host: &mut H, page: &PrintPage) -> Result<()> {
    let Some(mut surface) = host.open_surface(&page.title) else {
        warn!("Print surface was blocked by the host");
        return Err(GuidelinesError::SurfaceBlocked);
    };

    let printed = surface.write_page(page).and_then(|_| surface.print());
    let closed = surface.close();
    printed?;
    closed?;

    debug!("Printed {}x{} mm page", page.width_mm, page.height_mm);
    Ok(())
}

/// Host whose "print" writes the page as a PDF file
#[derive(Debug, Clone)]
pub struct PdfPrintHost {
    output: PathBuf,
}

impl PdfPrintHost {
    pub fn new<P: Into<PathBuf>>(output: P) -> Self {
        Self {
            output: output.into(),
        }
    }

    pub fn output(&self) -> &std::path::Path {
        &self.output
    }
}

impl PrintHost for PdfPrintHost {
    type Surface = PdfSurface;

    fn open_surface(&mut self, title: &str) -> Option<PdfSurface> {
        debug!("Opening PDF surface '{}'", title);
        Some(PdfSurface {
            output: self.output.clone(),
            pending: None,
        })
    }
}

/// Surface buffering one PDF until it is printed
#[derive(Debug)]
pub struct PdfSurface {
    output: PathBuf,
    pending: Option<Vec<u8>>,
}

impl PrintSurface for PdfSurface {
    fn write_page(&mut self, page: &PrintPage) -> Result<()> {
        self.pending = Some(render_pdf_bytes(page)?);
        Ok(())
    }

    fn print(&mut self) -> Result<()> {
        let bytes = self
            .pending
            .as_ref()
            .ok_or_else(|| GuidelinesError::PrintError("no page was written".to_string()))?;
        let partial = partial_path(&self.output);
        let written = fs::write(&partial, bytes).and_then(|()| fs::rename(&partial, &self.output));
        if let Err(e) = written {
            fs::remove_file(&partial).ok();
            return Err(e.into());
        }
        debug!("Wrote {} bytes to {}", bytes.len(), self.output.display());
        Ok(())
    }

    fn close(self) -> Result<()> {
        Ok(())
    }
}

/// Sibling path the document is staged under until it is complete
fn partial_path(output: &Path) -> PathBuf {
    let mut name = output.file_name().map(OsString::from).unwrap_or_default();
    name.push(".part");
    output.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::RasterImage;
    use crate::style::Color;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Journal {
        events: Vec<&'static str>,
    }

    struct RecordingHost {
        blocked: bool,
        fail_print: bool,
        journal: Rc<RefCell<Journal>>,
    }

    struct RecordingSurface {
        fail_print: bool,
        journal: Rc<RefCell<Journal>>,
    }

    impl PrintHost for RecordingHost {
        type Surface = RecordingSurface;

        fn open_surface(&mut self, _title: &str) -> Option<RecordingSurface> {
            if self.blocked {
                return None;
            }
            self.journal.borrow_mut().events.push("open");
            Some(RecordingSurface {
                fail_print: self.fail_print,
                journal: Rc::clone(&self.journal),
            })
        }
    }

    impl PrintSurface for RecordingSurface {
        fn write_page(&mut self, _page: &PrintPage) -> Result<()> {
            self.journal.borrow_mut().events.push("write");
            Ok(())
        }

        fn print(&mut self) -> Result<()> {
            if self.fail_print {
                return Err(GuidelinesError::PrintError("printer offline".to_string()));
            }
            self.journal.borrow_mut().events.push("print");
            Ok(())
        }

        fn close(self) -> Result<()> {
            self.journal.borrow_mut().events.push("close");
            Ok(())
        }
    }

    fn page() -> PrintPage {
        PrintPage {
            title: "test".to_string(),
            image: RasterImage::new(8, 10, Color::white()),
            width_mm: 80.0,
            height_mm: 100.0,
        }
    }

    fn host(blocked: bool, fail_print: bool) -> RecordingHost {
        RecordingHost {
            blocked,
            fail_print,
            journal: Rc::new(RefCell::new(Journal::default())),
        }
    }

    #[test]
    fn test_print_flow_order() {
        let mut host = host(false, false);
        print_page(&mut host, &page()).unwrap();
        assert_eq!(
            host.journal.borrow().events,
            vec!["open", "write", "print", "close"]
        );
    }

    #[test]
    fn test_blocked_surface() {
        let mut host = host(true, false);
        let err = print_page(&mut host, &page()).unwrap_err();
        assert!(matches!(err, GuidelinesError::SurfaceBlocked));
        assert!(err.to_string().contains("allow pop-ups"));
        assert!(host.journal.borrow().events.is_empty());
    }

    #[test]
    fn test_failed_print_still_closes() {
        let mut host = host(false, true);
        let err = print_page(&mut host, &page()).unwrap_err();
        assert!(matches!(err, GuidelinesError::PrintError(_)));
        assert_eq!(host.journal.borrow().events, vec!["open", "write", "close"]);
    }

    #[test]
    fn test_pdf_host_writes_file() {
        let path = std::env::temp_dir().join(format!(
            "guideline-sheet-export-{}.pdf",
            std::process::id()
        ));
        let mut host = PdfPrintHost::new(&path);
        print_page(&mut host, &page()).unwrap();

        let bytes = fs::read(host.output()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_failed_write_leaves_no_file() {
        let dir = std::env::temp_dir().join(format!(
            "guideline-sheet-missing-{}",
            std::process::id()
        ));
        let path = dir.join("sheet.pdf");
        let mut host = PdfPrintHost::new(&path);
        assert!(matches!(print_page(&mut host, &page()), Err(GuidelinesError::Io(_))));
        assert!(!path.exists());
        assert!(!partial_path(&path).exists());
    }

    #[test]
    fn test_staged_file_is_renamed() {
        let path = std::env::temp_dir().join(format!(
            "guideline-sheet-staged-{}.pdf",
            std::process::id()
        ));
        assert!(partial_path(&path).to_string_lossy().ends_with(".pdf.part"));

        let mut host = PdfPrintHost::new(&path);
        print_page(&mut host, &page()).unwrap();
        assert!(path.exists());
        assert!(!partial_path(&path).exists());
        fs::remove_file(&path).ok();
    }
}
