//! Default page geometry and typography for rebuilt documents.
//!
//! All lengths are in PDF points (1/72 inch). The page is A4 portrait and
//! the text box matches the fixed geometry the output format was designed
//! around: content between x 40..555 and y 50..800 measured from the top
//! of the page.

/// Default page width in points (A4 portrait)
pub const DEFAULT_PAGE_WIDTH: f32 = 595.0;

/// Default page height in points (A4 portrait)
pub const DEFAULT_PAGE_HEIGHT: f32 = 842.0;

/// Left edge of the text box in points
pub const DEFAULT_BOX_LEFT: f32 = 40.0;

/// Top edge of the text box, in points from the top of the page
pub const DEFAULT_BOX_TOP: f32 = 50.0;

/// Right edge of the text box in points
pub const DEFAULT_BOX_RIGHT: f32 = 555.0;

/// Bottom edge of the text box, in points from the top of the page
pub const DEFAULT_BOX_BOTTOM: f32 = 800.0;

/// Default body font size in points
pub const DEFAULT_BODY_FONT_SIZE: f32 = 11.0;

/// Default reference-page heading font size in points
pub const DEFAULT_HEADING_FONT_SIZE: f32 = 14.0;

/// Body line height multiplier (line height = font size * multiplier)
pub const LINE_HEIGHT_MULTIPLIER: f32 = 1.2;

/// Vertical step between reference listing lines in points
pub const DEFAULT_REFERENCE_LINE_STEP: f32 = 20.0;

/// Gap between the reference heading and the first listing line in points
pub const DEFAULT_REFERENCE_HEADING_GAP: f32 = 30.0;

/// Heading text for the appended reference pages
pub const REFERENCE_HEADING: &str = "Abbreviation Reference Table";
