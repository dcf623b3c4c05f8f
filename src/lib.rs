pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod render;
pub mod substitute;

pub use config::{AbbreviationTable, Settings};
pub use error::RebuildError;
pub use extract::extract_pages;
pub use render::{DocumentRebuilder, RebuildOptions};
pub use substitute::{substitute, substitute_all, Replacement, ReplacementRecord};

use std::path::{Path, PathBuf};

/// Everything a reporting consumer needs from one document run.
#[derive(Debug)]
pub struct ProcessReport {
    /// Preview text, one entry per source page (display/reporting only;
    /// the persisted output is rebuilt from an independent extraction)
    pub pages: Vec<String>,
    /// Aggregate per-term replacement statistics
    pub record: ReplacementRecord,
    /// Byte size of the source document
    pub original_size: u64,
    /// Byte size of the rebuilt document
    pub minimized_size: u64,
    /// Where the rebuilt document was written
    pub output_path: PathBuf,
}

/// High-level API: run the full pipeline on one document.
///
/// Loads nothing itself - the caller owns the abbreviation table, which is
/// immutable and safe to share across any number of runs. Each call owns
/// its own page text and record; no state is reused between runs.
///
/// The preview extraction is best-effort and may come back empty for
/// degraded input; a rebuild failure means no output file was produced.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use pdf_abbrev::{process_document, AbbreviationTable, RebuildOptions};
///
/// let table = AbbreviationTable::load(Path::new("config/abbreviations.json"));
/// let report = process_document(
///     Path::new("report.pdf"),
///     Path::new("report.min.pdf"),
///     &table,
///     &RebuildOptions { include_reference_pages: true },
/// ).unwrap();
///
/// for (term, replacement) in report.record.iter() {
///     println!("{} -> {} ({}x)", term, replacement.abbreviation, replacement.count);
/// }
/// ```
pub fn process_document(
    input: &Path,
    output: &Path,
    table: &AbbreviationTable,
    options: &RebuildOptions,
) -> Result<ProcessReport, RebuildError> {
    // Preview path: fail-open, for display and reporting only
    let raw_pages = extract_pages(input);
    let (pages, _) = substitute_all(&raw_pages, table);

    // Authoritative path: fail-closed, produces the deliverable file
    let rebuilder = DocumentRebuilder::new(Settings::default());
    let record = rebuilder.rebuild(input, output, table, options)?;

    let original_size = std::fs::metadata(input)?.len();
    let minimized_size = std::fs::metadata(output)?.len();

    Ok(ProcessReport {
        pages,
        record,
        original_size,
        minimized_size,
        output_path: output.to_path_buf(),
    })
}
