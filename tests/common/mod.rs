#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use memberdoc::{ApplicationDocumentRenderer, ApplicationRecord, RenderedDocument, SignatureImage};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a rendered document with its parsed PDF.
pub struct GeneratedPdf {
    pub rendered: RenderedDocument,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    pub fn text(&self) -> String {
        pdf_assertions::extract_text(&self.doc)
    }

    /// Text of one page, numbered from 1.
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), self.rendered.bytes())
    }
}

/// Render with the default layout and parse the result.
pub fn render_pdf(
    record: &ApplicationRecord,
    signature: Option<&SignatureImage>,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    init_logger();
    let rendered = ApplicationDocumentRenderer::default().render(record, signature)?;
    let doc = LopdfDocument::load_mem(rendered.bytes())?;
    Ok(GeneratedPdf { rendered, doc })
}
