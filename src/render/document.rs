//! The authoritative document rebuild path.
//!
//! Re-extracts text per source page with lopdf's own text model, applies
//! the substitution engine, and lays the result out on fresh fixed-size
//! pages. Original formatting, images, and layout are discarded by design.

use std::fs;
use std::path::Path;

use printpdf::{BuiltinFont, Color, Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt, Rgb};

use crate::config::defaults::REFERENCE_HEADING;
use crate::config::{AbbreviationTable, Settings};
use crate::error::RebuildError;
use crate::substitute::{substitute_into, Replacement, ReplacementRecord};

use super::compress::compress_pdf;
use super::layer::LayerBuilder;
use super::layout::wrap_text;
use super::text_metrics::get_helvetica_measurer;

const BODY_FONT: BuiltinFont = BuiltinFont::Helvetica;

const BODY_TEXT_COLOR: Rgb = Rgb {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    icc_profile: None,
};

/// Options for a rebuild run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RebuildOptions {
    /// Append reference pages listing every replacement made
    pub include_reference_pages: bool,
}

/// Rebuilds a source PDF with abbreviations substituted.
pub struct DocumentRebuilder {
    settings: Settings,
}

impl DocumentRebuilder {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Rebuild `input` into `output`, substituting every table entry.
    ///
    /// Emits exactly one output page per source page. When
    /// `include_reference_pages` is set and at least one replacement
    /// occurred, a sorted reference listing follows on additional pages.
    /// Returns the aggregate replacement record either way, so callers can
    /// report statistics without the reference pages.
    ///
    /// Failure to open the source is fatal: this path produces the
    /// deliverable file, so no degraded output is acceptable. A single
    /// page whose text cannot be extracted degrades to an empty output
    /// page instead, keeping the page count invariant.
    pub fn rebuild(
        &self,
        input: &Path,
        output: &Path,
        table: &AbbreviationTable,
        options: &RebuildOptions,
    ) -> Result<ReplacementRecord, RebuildError> {
        let source = lopdf::Document::load(input).map_err(RebuildError::Open)?;

        let title = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Minimized Document");
        let mut doc = PdfDocument::new(title);

        let mut record = ReplacementRecord::default();
        let mut pages = Vec::new();

        for (page_num, _object_id) in source.get_pages() {
            let text = match source.extract_text(&[page_num]) {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                    String::new()
                }
            };
            if text.trim().is_empty() {
                log::warn!("No text extracted from page {}", page_num);
            }

            let (substituted, count) = substitute_into(&text, table, &mut record);
            log::debug!("Page {}: {} replacements", page_num, count);

            pages.push(self.render_body_page(&substituted, page_num));
        }

        log::info!(
            "Rebuilt {} pages with {} total replacements",
            pages.len(),
            record.total_replacements()
        );

        if options.include_reference_pages && !record.is_empty() {
            pages.extend(self.render_reference_pages(&record));
        }

        doc.with_pages(pages);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);

        // Compress PDF streams to reduce file size (best effort)
        let bytes = match compress_pdf(bytes.clone()) {
            Ok(compressed) => compressed,
            Err(e) => {
                log::warn!("Stream compression failed, writing uncompressed output: {}", e);
                bytes
            }
        };

        fs::write(output, &bytes)?;

        Ok(record)
    }

    fn new_page_layer(&self) -> LayerBuilder {
        let mut layer = LayerBuilder::new();
        layer.set_fill_color(Color::Rgb(BODY_TEXT_COLOR));
        layer
    }

    fn page_of(&self, layer: LayerBuilder) -> PdfPage {
        PdfPage::new(
            Mm::from(Pt(self.settings.page_width)),
            Mm::from(Pt(self.settings.page_height)),
            layer.into_ops(),
        )
    }

    /// Lay one page's substituted text into the fixed text box.
    ///
    /// Lines past the bottom of the box are dropped with a warning; the
    /// page count must stay one-per-source-page, so the text never spills
    /// onto a continuation page.
    fn render_body_page(&self, text: &str, page_num: u32) -> PdfPage {
        let s = &self.settings;
        let lines = wrap_text(text, s.box_width(), s.body_font_size, get_helvetica_measurer());

        let mut layer = self.new_page_layer();
        let mut baseline = s.box_top + s.body_font_size;
        let mut dropped = 0usize;

        for line in &lines {
            if baseline > s.box_bottom {
                dropped += 1;
                continue;
            }
            layer.use_text(
                line,
                s.body_font_size,
                Pt(s.box_left),
                Pt(s.y_from_top(baseline)),
                BODY_FONT,
            );
            baseline += s.line_height();
        }

        if dropped > 0 {
            log::warn!(
                "Page {}: {} wrapped lines did not fit the text box and were dropped",
                page_num,
                dropped
            );
        }

        self.page_of(layer)
    }

    /// Render the reference listing, one line per replaced term in
    /// lexicographic order, continuing onto new pages past the box bottom.
    fn render_reference_pages(&self, record: &ReplacementRecord) -> Vec<PdfPage> {
        let s = &self.settings;
        let mut pages = Vec::new();

        let mut layer = self.new_page_layer();
        let mut y = s.box_top;
        layer.use_text(
            REFERENCE_HEADING,
            s.heading_font_size,
            Pt(s.box_left),
            Pt(s.y_from_top(y)),
            BODY_FONT,
        );
        y += s.reference_heading_gap;

        for (term, replacement) in record.iter() {
            if y > s.box_bottom {
                pages.push(self.page_of(std::mem::take(&mut layer)));
                layer = self.new_page_layer();
                y = s.box_top;
            }
            layer.use_text(
                reference_line(term, replacement),
                s.body_font_size,
                Pt(s.box_left),
                Pt(s.y_from_top(y)),
                BODY_FONT,
            );
            y += s.reference_line_step;
        }

        pages.push(self.page_of(layer));
        pages
    }
}

/// One listing line on a reference page.
fn reference_line(term: &str, replacement: &Replacement) -> String {
    format!(
        "{} \u{279D} {} (Replaced {} times)",
        term, replacement.abbreviation, replacement.count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::substitute::substitute_all;

    #[test]
    fn test_reference_line_format() {
        let replacement = Replacement {
            abbreviation: "Fig.".to_string(),
            count: 3,
        };
        assert_eq!(
            reference_line("Figure", &replacement),
            "Figure \u{279D} Fig. (Replaced 3 times)"
        );
    }

    #[test]
    fn test_reference_listing_paginates() {
        let terms: Vec<(String, String)> = (0..60)
            .map(|i| (format!("term{:02}", i), format!("t{}", i)))
            .collect();
        let table = AbbreviationTable::from_entries(terms.clone());
        let text = terms
            .iter()
            .map(|(t, _)| t.clone())
            .collect::<Vec<_>>()
            .join(" ");

        let (_, record) = substitute_all(&[text], &table);
        assert_eq!(record.len(), 60);

        // 50pt start + 30pt gap, 20pt per line, overflow past 800pt:
        // 60 lines cannot fit on one page
        let rebuilder = DocumentRebuilder::new(Settings::default());
        let pages = rebuilder.render_reference_pages(&record);
        assert_eq!(pages.len(), 2);
    }
}
