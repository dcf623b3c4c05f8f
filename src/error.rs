use thiserror::Error;

/// Errors raised by the document rebuild path.
///
/// Only the rebuild stage surfaces errors to the caller: it produces the
/// deliverable output file, so it fails closed. The dictionary loader and
/// the preview extractor instead absorb their failures, log them, and
/// return empty values so the rest of the pipeline degrades to a no-op.
#[derive(Error, Debug)]
pub enum RebuildError {
    #[error("Failed to open source document: {0}")]
    Open(#[source] lopdf::Error),

    #[error("PDF generation error: {0}")]
    PdfGeneration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
