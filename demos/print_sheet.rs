//! Print a landscape A5 guideline sheet to a PDF file

use guideline_sheet::{
    Edit, FixedColorScheme, GuidelinesError, GuidelinesSession, MarginSide,
    MemoryPreferenceStore, Orientation, PdfPrintHost, Viewport,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging with debug level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let mut session = GuidelinesSession::new(
        MemoryPreferenceStore::default(),
        &FixedColorScheme::default(),
        Viewport::new(1024.0, 768.0),
    );

    session.apply(Edit::PaperSize("A5".into()));
    session.apply(Edit::Orientation(Orientation::Landscape));
    session.apply(Edit::MarginsLinked(false));
    session.apply(Edit::Margin(MarginSide::Left, "25".into()));

    let mut host = PdfPrintHost::new("guidelines_a5.pdf");
    match session.print_with(&mut host) {
        Ok(()) => println!("PDF saved as '{}'", host.output().display()),
        Err(GuidelinesError::SurfaceBlocked) => {
            eprintln!("{}", GuidelinesError::SurfaceBlocked);
        }
        Err(e) => return Err(e.into()),
    }

    let raster = session.export_to_current_geometry()?;
    raster.save_png("guidelines_a5.png")?;
    println!(
        "PNG saved as 'guidelines_a5.png' ({}x{} px)",
        raster.width(),
        raster.height()
    );

    Ok(())
}
