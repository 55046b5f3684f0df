//! One-page PDF wrapping of an exported raster

use crate::Result;
use crate::constants::mm_to_pt;
use crate::error::GuidelinesError;
use crate::raster::RasterImage;
use lopdf::{
    Document, Object, Stream,
    content::{Content, Operation},
    dictionary,
};
use tracing::{debug, instrument, trace};

const IMAGE_RESOURCE: &[u8] = b"Im0";

/// A rendered page ready to hand to a printer
#[derive(Debug, Clone)]
pub struct PrintPage {
    pub title: String,
    pub image: RasterImage,
    pub width_mm: f32,
    pub height_mm: f32,
}

/// Build a PDF with a single page sized to the paper, the raster stretched over it
#[instrument(skip(page), fields(title = %page.title))]
pub fn build_print_document(page: &PrintPage) -> Result<Document> {
    if !(page.width_mm > 0.0 && page.height_mm > 0.0) {
        return Err(GuidelinesError::DimensionError(format!(
            "page must have positive size, got {}x{} mm",
            page.width_mm, page.height_mm
        )));
    }

    let width_pt = mm_to_pt(page.width_mm);
    let height_pt = mm_to_pt(page.height_mm);
    debug!(
        "Building {}x{} pt page from {}x{} px raster",
        width_pt,
        height_pt,
        page.image.width(),
        page.image.height()
    );

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => page.image.width() as i64,
            "Height" => page.image.height() as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        page.image.to_rgb_bytes(),
    ));

    let content = Content {
        operations: image_operations(width_pt, height_pt),
    };
    trace!("Page operations: {:?}", content.operations);
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), width_pt.into(), height_pt.into()],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "XObject" => dictionary! {
                "Im0" => image_id,
            },
        },
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(page.title.as_str()),
        "Producer" => Object::string_literal("guideline-sheet"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    doc.compress();
    Ok(doc)
}

/// Serialize a print page to PDF bytes
pub fn render_pdf_bytes(page: &PrintPage) -> Result<Vec<u8>> {
    let mut doc = build_print_document(page)?;
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

fn image_operations(width_pt: f32, height_pt: f32) -> Vec<Operation> {
    vec![
        Operation::new("q", vec![]),
        Operation::new(
            "cm",
            vec![
                width_pt.into(),
                0.into(),
                0.into(),
                height_pt.into(),
                0.into(),
                0.into(),
            ],
        ),
        Operation::new("Do", vec![Object::Name(IMAGE_RESOURCE.to_vec())]),
        Operation::new("Q", vec![]),
    ]
}
