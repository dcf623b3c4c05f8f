//! Text measurement for PDF builtin fonts.
//!
//! The rebuilder lays text out in the Standard 14 Helvetica, whose metrics
//! are fixed by Adobe's AFM files, so widths can be measured without
//! embedding any font. Character widths are in 1000 units per em.

use printpdf::BuiltinFont;

/// Text measurer for PDF builtin fonts, backed by hardcoded AFM metrics.
pub struct BuiltinFontMeasurer {
    font: BuiltinFont,
}

impl BuiltinFontMeasurer {
    pub fn new(font: BuiltinFont) -> Self {
        Self { font }
    }

    /// Get character width in 1000 units per em.
    fn char_width(&self, c: char) -> u16 {
        // ASCII printable range only - builtin fonts are Win-1252
        if !c.is_ascii() {
            return 500; // Default width for non-ASCII
        }

        let code = c as u8;
        match self.font {
            BuiltinFont::Helvetica | BuiltinFont::HelveticaOblique => {
                HELVETICA_WIDTHS.get(code as usize).copied().unwrap_or(278)
            }
            BuiltinFont::Courier
            | BuiltinFont::CourierBold
            | BuiltinFont::CourierOblique
            | BuiltinFont::CourierBoldOblique => 600, // Monospace
            // Other standard fonts are close enough to Helvetica for the
            // plain-text layout this crate does
            _ => HELVETICA_WIDTHS.get(code as usize).copied().unwrap_or(500),
        }
    }

    /// Measure text width in points.
    pub fn measure_width_pt(&self, text: &str, font_size: f32) -> f32 {
        let total_width: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        (total_width as f32 / 1000.0) * font_size
    }
}

/// Get a builtin font measurer for Helvetica.
pub fn get_helvetica_measurer() -> &'static BuiltinFontMeasurer {
    use std::sync::OnceLock;
    static MEASURER: OnceLock<BuiltinFontMeasurer> = OnceLock::new();
    MEASURER.get_or_init(|| BuiltinFontMeasurer::new(BuiltinFont::Helvetica))
}

// =============================================================================
// Adobe AFM Character Width Table (ASCII subset, in 1000 units per em)
// =============================================================================

static HELVETICA_WIDTHS: [u16; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
];
