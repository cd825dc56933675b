use clap::{Parser, Subcommand};
use memberdoc::{
    ApplicationDocumentRenderer, ApplicationRecord, BatchItem, BlobStore, FilesystemStore, LayoutConfig,
    PipelineError, SignatureImage, SubmissionOutcome, assign_submission_metadata, render_batch,
    submit_application,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "memberdoc")]
#[command(about = "Render membership application summaries to PDF")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit one application and store its document
    Render {
        /// Application record (JSON)
        #[arg(long)]
        record: PathBuf,

        /// Signature image file
        #[arg(long)]
        signature: Option<PathBuf>,

        /// MIME type of the signature, inferred from the extension if omitted
        #[arg(long)]
        signature_mime: Option<String>,

        /// Layout configuration (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory the document is written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Render a JSON array of applications in parallel
    Batch {
        /// Application records (JSON array)
        #[arg(long)]
        records: PathBuf,

        /// Layout configuration (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory the documents are written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render {
            record,
            signature,
            signature_mime,
            config,
            out_dir,
        } => run_render(
            &record,
            signature.as_deref(),
            signature_mime,
            config.as_deref(),
            &out_dir,
        ),
        Commands::Batch {
            records,
            config,
            out_dir,
        } => run_batch(&records, config.as_deref(), &out_dir),
    }
}

fn load_renderer(config: Option<&Path>) -> Result<ApplicationDocumentRenderer, PipelineError> {
    let config = match config {
        Some(path) => {
            log::debug!("Loading layout configuration from {}", path.display());
            LayoutConfig::from_json(&fs::read_to_string(path)?)?
        }
        None => LayoutConfig::default(),
    };
    ApplicationDocumentRenderer::new(config)
}

fn infer_mime(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => "image/png",
        _ => "image/jpeg",
    }
}

fn run_render(
    record_path: &Path,
    signature_path: Option<&Path>,
    signature_mime: Option<String>,
    config: Option<&Path>,
    out_dir: &Path,
) -> Result<(), PipelineError> {
    let renderer = load_renderer(config)?;
    let store = FilesystemStore::new(out_dir)?;

    let mut record: ApplicationRecord = serde_json::from_str(&fs::read_to_string(record_path)?)?;
    let signature = match signature_path {
        Some(path) => {
            let mime = signature_mime.unwrap_or_else(|| infer_mime(path).to_string());
            Some(SignatureImage::new(fs::read(path)?, mime))
        }
        None => None,
    };

    match submit_application(&mut record, signature.as_ref(), &renderer, &store) {
        SubmissionOutcome::DocumentStored { content_id } => {
            println!(
                "Application {} stored as {}",
                record.identifier,
                store.base_path().join(content_id).display()
            );
        }
        SubmissionOutcome::DocumentSkipped { reason } => {
            println!(
                "Application {} submitted without a document: {}",
                record.identifier, reason
            );
        }
    }
    Ok(())
}

fn run_batch(records_path: &Path, config: Option<&Path>, out_dir: &Path) -> Result<(), PipelineError> {
    let renderer = load_renderer(config)?;
    let store = FilesystemStore::new(out_dir)?;

    let records: Vec<ApplicationRecord> =
        serde_json::from_str(&fs::read_to_string(records_path)?)?;
    let today = chrono::Local::now().date_naive();
    let items: Vec<BatchItem> = records
        .into_iter()
        .map(|mut record| {
            assign_submission_metadata(&mut record, today);
            (record, None)
        })
        .collect();

    let results = render_batch(&renderer, &items);
    let mut stored = 0;
    for ((record, _), result) in items.iter().zip(results) {
        let outcome = result.and_then(|doc| Ok(store.upload(doc.filename(), doc.bytes())?));
        match outcome {
            Ok(content_id) => {
                stored += 1;
                println!("{} -> {}", record.identifier, content_id);
            }
            Err(e) => {
                log::error!("Skipping document for application {}: {}", record.identifier, e);
            }
        }
    }
    println!("Stored {} of {} documents in {}", stored, items.len(), out_dir.display());
    Ok(())
}
