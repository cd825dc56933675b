//! Membership application summary documents.
//!
//! [`ApplicationDocumentRenderer`] lays out one submitted application on A4
//! pages, usually just one, and produces PDF bytes. [`submit_application`] ties the
//! renderer to a [`BlobStore`], and [`render_batch`] renders many applications
//! in parallel.
//!
//! ```no_run
//! use memberdoc::{ApplicationDocumentRenderer, ApplicationRecord};
//!
//! let renderer = ApplicationDocumentRenderer::default();
//! let record: ApplicationRecord = serde_json::from_str(r#"{"name": "Asha Verma"}"#)?;
//! let document = renderer.render(&record, None)?;
//! std::fs::write(document.filename(), document.bytes())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod batch;
pub mod error;
pub mod executor;
pub mod renderer;
pub mod storage;
pub mod submission;

pub use batch::{BatchItem, render_batch, render_batch_with};
pub use error::PipelineError;
pub use renderer::{
    ApplicationDocumentRenderer, NOT_PROVIDED, RenderReport, RenderedDocument, RowReport,
    SectionReport,
};
pub use storage::{BlobStore, FilesystemStore, InMemoryStore, StorageError};
pub use submission::{
    SubmissionOutcome, assign_submission_metadata, submit_application, submit_application_on,
};

pub use memberdoc_layout::{LayoutConfig, LayoutError, SignatureLayout};
pub use memberdoc_render_core::RenderError;
pub use memberdoc_types::{
    ApplicationId, ApplicationRecord, ImageFormat, MembershipCategory, SignatureImage,
};
