//! In-process PDF rasterization and text extraction via pdfium.
//!
//! Optional replacement for the external collaborators: renders one
//! grayscale page per class at a fixed resolution and extracts the full
//! document text in page order. Requires the pdfium dynamic library at
//! runtime.

use crate::error::ScanError;
use crate::image::GrayImageU8;
use pdfium_render::prelude::*;
use std::path::Path;

/// Rasterized pages plus the extracted document text.
pub struct RasterizedDocument {
    /// One grayscale page per class, document order.
    pub pages: Vec<GrayImageU8>,
    /// Full document text, page order.
    pub text: String,
}

/// Render every page of `path` at `dpi` and extract the document text.
pub fn rasterize_document(path: &Path, dpi: f32) -> Result<RasterizedDocument, ScanError> {
    let pdf_error = |source| ScanError::Pdf {
        path: path.to_path_buf(),
        source,
    };

    let pdfium = Pdfium::default();
    let document = pdfium.load_pdf_from_file(path, None).map_err(pdf_error)?;

    // PDF points are 72 per inch
    let scale = dpi / 72.0;
    let mut pages = Vec::with_capacity(document.pages().len() as usize);
    let mut text = String::new();

    for page in document.pages().iter() {
        let pixel_width = (page.width().value * scale) as i32;
        let pixel_height = (page.height().value * scale) as i32;
        let bitmap = page
            .render_with_config(
                &PdfRenderConfig::new()
                    .set_target_width(pixel_width)
                    .set_target_height(pixel_height),
            )
            .map_err(pdf_error)?;
        let gray = bitmap.as_image().into_luma8();
        pages.push(GrayImageU8::new(
            gray.width() as usize,
            gray.height() as usize,
            gray.into_raw(),
        ));

        let page_text = page.text().map_err(pdf_error)?;
        text.push_str(&page_text.all());
        text.push('\n');
    }

    Ok(RasterizedDocument { pages, text })
}
