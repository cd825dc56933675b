//! Rendering many applications at once.

use crate::error::PipelineError;
use crate::executor::{Executor, ExecutorImpl};
use crate::renderer::{ApplicationDocumentRenderer, RenderedDocument};
use memberdoc_types::{ApplicationRecord, SignatureImage};

/// One application with its optional signature.
pub type BatchItem = (ApplicationRecord, Option<SignatureImage>);

/// Renders every item with the preferred executor. `result[i]` belongs to `items[i]`.
pub fn render_batch(
    renderer: &ApplicationDocumentRenderer,
    items: &[BatchItem],
) -> Vec<Result<RenderedDocument, PipelineError>> {
    render_batch_with(&ExecutorImpl::preferred(), renderer, items)
}

pub fn render_batch_with<E: Executor>(
    executor: &E,
    renderer: &ApplicationDocumentRenderer,
    items: &[BatchItem],
) -> Vec<Result<RenderedDocument, PipelineError>> {
    log::debug!(
        "Rendering {} applications with {} (parallelism {})",
        items.len(),
        executor.name(),
        executor.parallelism()
    );
    executor.execute_all(items, |(record, signature)| {
        renderer.render(record, signature.as_ref())
    })
}
