mod common;

use chrono::NaiveDate;
use common::fixtures::*;
use common::{TestResult, init_logger};
use memberdoc::{
    ApplicationDocumentRenderer, ApplicationId, ApplicationRecord, BlobStore, FilesystemStore,
    InMemoryStore, StorageError, SubmissionOutcome, submit_application, submit_application_on,
};

struct FailingStore;

impl BlobStore for FailingStore {
    fn upload(&self, _filename: &str, _bytes: &[u8]) -> Result<String, StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }

    fn fetch(&self, content_id: &str) -> Result<Vec<u8>, StorageError> {
        Err(StorageError::NotFound(content_id.to_string()))
    }

    fn exists(&self, _content_id: &str) -> bool {
        false
    }
}

fn march_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

#[test]
fn stores_document_on_filesystem() -> TestResult {
    init_logger();
    let dir = tempfile::tempdir()?;
    let store = FilesystemStore::new(dir.path())?;
    let renderer = ApplicationDocumentRenderer::default();
    let mut record = sample_record();
    let signature = png_signature(300, 300);

    let outcome = submit_application(&mut record, Some(&signature), &renderer, &store);

    assert_eq!(
        outcome,
        SubmissionOutcome::DocumentStored {
            content_id: "membership-application-test-001.pdf".into()
        }
    );
    assert_eq!(
        record.document_id.as_deref(),
        Some("membership-application-test-001.pdf")
    );
    let written = std::fs::read(dir.path().join("membership-application-test-001.pdf"))?;
    let doc = lopdf::Document::load_mem(&written)?;
    assert_eq!(doc.get_pages().len(), 1);
    Ok(())
}

#[test]
fn failing_store_keeps_application_submitted() -> TestResult {
    init_logger();
    let renderer = ApplicationDocumentRenderer::default();
    let mut record = sample_record();

    let outcome = submit_application_on(&mut record, None, &renderer, &FailingStore, march_first());

    match outcome {
        SubmissionOutcome::DocumentSkipped { reason } => assert!(reason.contains("disk full")),
        other => panic!("expected a skipped document, got {:?}", other),
    }
    assert!(record.document_id.is_none());
    assert_eq!(record.identifier, ApplicationId::new("test-001"));
    Ok(())
}

#[test]
fn generated_identifier_names_the_document() -> TestResult {
    init_logger();
    let store = InMemoryStore::new();
    let renderer = ApplicationDocumentRenderer::default();
    let mut record = ApplicationRecord {
        identifier: ApplicationId::default(),
        submitted_on: None,
        ..sample_record()
    };

    let outcome = submit_application_on(&mut record, None, &renderer, &store, march_first());
    let content_id = outcome.content_id().ok_or("document not stored")?;

    let id = record.identifier.as_str();
    let (millis, suffix) = id.split_once('-').ok_or("identifier has no separator")?;
    assert_eq!(millis.len(), 13);
    assert!(millis.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(suffix.len(), 6);
    assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));

    assert_eq!(
        store.filename_of(content_id),
        Some(format!("membership-application-{}.pdf", id))
    );
    assert_eq!(record.submitted_on, Some(march_first()));

    let bytes = store.fetch(content_id)?;
    let doc = lopdf::Document::load_mem(&bytes)?;
    let text = common::pdf_assertions::extract_text(&doc);
    assert!(text.contains(&format!("Application ID: {}", id)));
    assert!(text.contains("Submitted: 01 March 2024"));
    Ok(())
}

#[test]
fn corrupted_signature_still_stores_document() -> TestResult {
    init_logger();
    let store = InMemoryStore::new();
    let renderer = ApplicationDocumentRenderer::default();
    let mut record = sample_record();

    let outcome = submit_application_on(
        &mut record,
        Some(&corrupted_png_signature()),
        &renderer,
        &store,
        march_first(),
    );
    assert!(outcome.is_stored());
    assert_eq!(store.len(), 1);
    Ok(())
}
