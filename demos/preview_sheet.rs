//! Render the on-screen preview while editing, remembering the theme on disk

use guideline_sheet::{
    Edit, FixedColorScheme, GuidelinesSession, JsonFilePreferenceStore, Viewport,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let preferences = JsonFilePreferenceStore::open("guidelines_prefs.json")?;
    let mut session = GuidelinesSession::new(
        preferences,
        &FixedColorScheme { dark: true },
        Viewport::new(848.0, 648.0),
    );
    println!("Theme: {}", session.theme());

    for edit in [
        Edit::PaperSize("Tabloid".into()),
        Edit::Width("-5".into()),
        Edit::Height("400".into()),
    ] {
        let accepted = session.apply(edit);
        let geometry = session.geometry();
        println!(
            "{:<6} -> {} {} x {} mm",
            if accepted { "ok" } else { "ignored" },
            geometry.paper_label(),
            geometry.width_mm(),
            geometry.height_mm()
        );
    }

    let layout = session.preview_layout()?;
    println!(
        "Preview {:.1} x {:.1} px at {:.3} px/mm ({:?}-fit)",
        layout.canvas_width_px, layout.canvas_height_px, layout.scale, layout.fit
    );
    session.render_preview()?.save_png("guidelines_preview.png")?;

    session.resize(Viewport::new(500.0, 900.0));
    session.toggle_theme()?;
    session.render_preview()?.save_png("guidelines_preview_resized.png")?;
    println!("Theme is now {}", session.theme());

    Ok(())
}
