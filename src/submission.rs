//! Application submission: render the summary document and hand it to storage.

use crate::renderer::ApplicationDocumentRenderer;
use crate::storage::BlobStore;
use chrono::NaiveDate;
use memberdoc_types::{ApplicationId, ApplicationRecord, SignatureImage};

/// What happened to the summary document of a submitted application.
///
/// The application itself is always considered submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    DocumentStored { content_id: String },
    DocumentSkipped { reason: String },
}

impl SubmissionOutcome {
    pub fn content_id(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::DocumentStored { content_id } => Some(content_id),
            SubmissionOutcome::DocumentSkipped { .. } => None,
        }
    }

    pub fn is_stored(&self) -> bool {
        matches!(self, SubmissionOutcome::DocumentStored { .. })
    }
}

/// Gives `record` an identifier and a submission date unless it already has them.
pub fn assign_submission_metadata(record: &mut ApplicationRecord, today: NaiveDate) {
    if record.identifier.is_empty() {
        record.identifier = ApplicationId::generate();
    }
    if record.submitted_on.is_none() {
        record.submitted_on = Some(today);
    }
}

/// Submits `record` using today's local date.
pub fn submit_application(
    record: &mut ApplicationRecord,
    signature: Option<&SignatureImage>,
    renderer: &ApplicationDocumentRenderer,
    store: &dyn BlobStore,
) -> SubmissionOutcome {
    let today = chrono::Local::now().date_naive();
    submit_application_on(record, signature, renderer, store, today)
}

/// Submits `record` as of `today`.
///
/// Assigns the identifier and submission date if they are not set yet, renders
/// the document and uploads it. Rendering and upload failures are logged and
/// leave `document_id` untouched.
pub fn submit_application_on(
    record: &mut ApplicationRecord,
    signature: Option<&SignatureImage>,
    renderer: &ApplicationDocumentRenderer,
    store: &dyn BlobStore,
    today: NaiveDate,
) -> SubmissionOutcome {
    assign_submission_metadata(record, today);

    let document = match renderer.render(record, signature) {
        Ok(document) => document,
        Err(e) => {
            log::error!(
                "Failed to render document for application {}: {}",
                record.identifier,
                e
            );
            return SubmissionOutcome::DocumentSkipped {
                reason: e.to_string(),
            };
        }
    };

    match store.upload(document.filename(), document.bytes()) {
        Ok(content_id) => {
            log::info!(
                "Stored {} for application {} as {}",
                document.filename(),
                record.identifier,
                content_id
            );
            record.document_id = Some(content_id.clone());
            SubmissionOutcome::DocumentStored { content_id }
        }
        Err(e) => {
            log::error!(
                "Failed to store document for application {}: {}",
                record.identifier,
                e
            );
            SubmissionOutcome::DocumentSkipped {
                reason: e.to_string(),
            }
        }
    }
}
