//! Preview text extraction.
//!
//! This path feeds display and reporting only; the rebuilder re-extracts
//! text with its own (lopdf-based) text model so the persisted output is
//! self-consistent. The two models may diverge slightly in fidelity, and
//! that divergence is accepted: changes to this preview path can never
//! silently affect the authoritative rebuild output.

use std::path::Path;

/// Extract plain text from every page of `path`, in physical page order.
///
/// Fail-open: a source that cannot be opened or parsed logs an error and
/// yields an empty sequence. A page with no extractable text (e.g. an
/// image-only scan) yields an empty string and logs a warning naming the
/// page, but never aborts the rest of the extraction.
pub fn extract_pages(path: &Path) -> Vec<String> {
    let pages = match pdf_extract::extract_text_by_pages(path) {
        Ok(pages) => pages,
        Err(e) => {
            log::error!("Failed to read PDF {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    for (index, page) in pages.iter().enumerate() {
        if page.trim().is_empty() {
            log::warn!("No text extracted from page {}", index + 1);
        }
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_yields_empty_sequence() {
        let pages = extract_pages(&PathBuf::from("no/such/document.pdf"));
        assert!(pages.is_empty());
    }

    #[test]
    fn test_garbage_file_yields_empty_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-pdf.pdf");
        std::fs::write(&path, b"this is not a pdf at all").unwrap();

        let pages = extract_pages(&path);
        assert!(pages.is_empty());
    }
}
