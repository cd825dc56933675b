//! The membership application document renderer.
//!
//! One call lays out one application top to bottom on A4 pages: banner,
//! identifier and submission date, the four fixed field sections, an optional
//! signature block, and a footer on the last page. Content that would reach
//! into the footer reserve continues on a new page. All layout state lives on
//! the stack of the call, so a renderer can be shared freely between threads.

use crate::error::PipelineError;
use memberdoc_layout::{
    LayoutConfig, LayoutCursor, SignatureLayout, draw_banner, draw_footer, draw_metadata,
    draw_row, draw_section_header, draw_signature_block,
};
use memberdoc_render_core::{Canvas, RenderError};
use memberdoc_render_lopdf::{DocumentInfo, LopdfCanvas};
use memberdoc_types::{ApplicationRecord, Rect, SignatureImage};

pub const PERSONAL_SECTION: &str = "Personal Information";
pub const CONTACT_SECTION: &str = "Contact Information";
pub const ADDRESS_SECTION: &str = "Address Information";
pub const PAYMENT_SECTION: &str = "Payment Information";
pub const SIGNATURE_SECTION: &str = "Signature";

/// Shown in place of a missing payment reference.
pub const NOT_PROVIDED: &str = "Not provided";

const PRODUCER: &str = "memberdoc";
const SUBMITTED_DATE_FORMAT: &str = "%d %B %Y";

struct Section {
    title: &'static str,
    rows: Vec<(&'static str, String)>,
}

fn field_sections(record: &ApplicationRecord) -> [Section; 4] {
    let payment_reference = record
        .payment_transaction_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(NOT_PROVIDED)
        .to_string();

    [
        Section {
            title: PERSONAL_SECTION,
            rows: vec![
                ("Full Name", record.full_name.clone()),
                ("Date of Birth", record.date_of_birth.clone()),
                ("Qualification", record.qualification.clone()),
                ("Membership Type", record.membership_type.to_string()),
            ],
        },
        Section {
            title: CONTACT_SECTION,
            rows: vec![
                ("Email", record.email.clone()),
                ("Mobile Number", record.mobile.clone()),
            ],
        },
        Section {
            title: ADDRESS_SECTION,
            rows: vec![
                ("Address", record.address.clone()),
                ("District", record.district.clone()),
                ("State", record.state.clone()),
                ("PIN Code", record.pin_code.clone()),
            ],
        },
        Section {
            title: PAYMENT_SECTION,
            rows: vec![("Transaction Reference", payment_reference)],
        },
    ]
}

/// Identifier line, plus the submission date once one has been assigned.
fn metadata_lines(record: &ApplicationRecord) -> Vec<String> {
    let mut lines = vec![format!("Application ID: {}", record.identifier)];
    if let Some(date) = record.submitted_on {
        lines.push(format!("Submitted: {}", date.format(SUBMITTED_DATE_FORMAT)));
    }
    lines
}

/// One label/value row as it was laid out.
#[derive(Debug, Clone, PartialEq)]
pub struct RowReport {
    pub label: &'static str,
    pub value: String,
    pub lines: usize,
    /// Page holding the row's last line.
    pub page: usize,
    pub region: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionReport {
    pub title: &'static str,
    /// Page holding the section header.
    pub page: usize,
    pub header: Rect,
    pub rows: Vec<RowReport>,
}

/// What a render pass drew and where; carries no document content of its own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderReport {
    pub sections: Vec<SectionReport>,
    pub signature: Option<SignatureLayout>,
    /// Number of pages drawn; the footer is on the last one.
    pub pages: usize,
    pub final_cursor: f32,
    pub footer_y: f32,
}

impl RenderReport {
    pub fn section_titles(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.title).collect()
    }

    pub fn row(&self, label: &str) -> Option<&RowReport> {
        self.sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .find(|r| r.label == label)
    }

    pub fn has_signature(&self) -> bool {
        self.signature.is_some()
    }
}

/// A finished PDF and the file name it should be stored under.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    filename: String,
    bytes: Vec<u8>,
    report: RenderReport,
}

impl RenderedDocument {
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn report(&self) -> &RenderReport {
        &self.report
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Renders membership applications into PDF summaries.
#[derive(Debug, Clone)]
pub struct ApplicationDocumentRenderer {
    config: LayoutConfig,
}

impl ApplicationDocumentRenderer {
    pub fn new(config: LayoutConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Renders `record` to PDF bytes.
    ///
    /// A signature that cannot be decoded is left out of the document; any
    /// other drawing failure fails the whole render and no bytes are returned.
    pub fn render(
        &self,
        record: &ApplicationRecord,
        signature: Option<&SignatureImage>,
    ) -> Result<RenderedDocument, PipelineError> {
        let info = DocumentInfo {
            title: format!("Membership Application {}", record.identifier),
            producer: PRODUCER.to_string(),
        };
        let mut canvas = LopdfCanvas::new(self.config.page_size(), info)?;
        let report = self.render_on(&mut canvas, record, signature)?;
        let bytes = canvas.finish()?;

        log::debug!(
            "Rendered application {} ({} bytes, signature: {})",
            record.identifier,
            bytes.len(),
            report.has_signature()
        );

        Ok(RenderedDocument {
            filename: record.identifier.document_filename(),
            bytes,
            report,
        })
    }

    /// Lays the document out on any canvas.
    pub fn render_on<C: Canvas>(
        &self,
        canvas: &mut C,
        record: &ApplicationRecord,
        signature: Option<&SignatureImage>,
    ) -> Result<RenderReport, RenderError> {
        let config = &self.config;
        let mut cursor = LayoutCursor::new(config.cursor_start());
        let mut report = RenderReport::default();

        draw_banner(canvas, config, &mut cursor)?;

        draw_metadata(canvas, config, &mut cursor, &metadata_lines(record))?;

        for section in field_sections(record) {
            let header =
                draw_section_header(canvas, config, &mut cursor, section.title, config.row_height)?;
            let page = cursor.page();
            let mut rows = Vec::with_capacity(section.rows.len());
            for (label, value) in section.rows {
                let row = draw_row(canvas, config, &mut cursor, label, &value)?;
                rows.push(RowReport {
                    label,
                    value,
                    lines: row.lines,
                    page: row.page,
                    region: row.region,
                });
            }
            cursor.advance(config.section_gap);
            report.sections.push(SectionReport {
                title: section.title,
                page,
                header,
                rows,
            });
        }

        if let Some(signature) = signature {
            match canvas.embed_image(signature) {
                Ok(handle) => {
                    let header = draw_section_header(
                        canvas,
                        config,
                        &mut cursor,
                        SIGNATURE_SECTION,
                        config.signature_box_height,
                    )?;
                    let page = cursor.page();
                    let layout =
                        draw_signature_block(canvas, config, &mut cursor, &handle, &record.full_name)?;
                    report.sections.push(SectionReport {
                        title: SIGNATURE_SECTION,
                        page,
                        header,
                        rows: Vec::new(),
                    });
                    report.signature = Some(layout);
                }
                Err(e) => {
                    log::warn!(
                        "Omitting signature for application {}: {}",
                        record.identifier,
                        e
                    );
                }
            }
        }

        if cursor.page() > 0 {
            log::debug!(
                "Application {} continued over {} pages",
                record.identifier,
                cursor.page() + 1
            );
        }

        report.pages = canvas.page_count();
        report.final_cursor = cursor.y();
        report.footer_y = draw_footer(canvas, config, &cursor)?;
        Ok(report)
    }
}

impl Default for ApplicationDocumentRenderer {
    fn default() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }
}
