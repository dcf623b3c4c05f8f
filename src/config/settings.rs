use super::defaults::*;

/// Runtime settings for document rebuilding.
///
/// Page coordinates are stored in PDF points with the text box expressed
/// top-down (as authored), and converted to bottom-up coordinates only at
/// render time.
#[derive(Debug, Clone)]
pub struct Settings {
    // Page dimensions in points
    pub page_width: f32,
    pub page_height: f32,

    // Text box bounds in points; top/bottom are measured from the page top
    pub box_left: f32,
    pub box_top: f32,
    pub box_right: f32,
    pub box_bottom: f32,

    // Typography
    pub body_font_size: f32,
    pub heading_font_size: f32,

    // Reference page layout
    pub reference_line_step: f32,
    pub reference_heading_gap: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
            box_left: DEFAULT_BOX_LEFT,
            box_top: DEFAULT_BOX_TOP,
            box_right: DEFAULT_BOX_RIGHT,
            box_bottom: DEFAULT_BOX_BOTTOM,
            body_font_size: DEFAULT_BODY_FONT_SIZE,
            heading_font_size: DEFAULT_HEADING_FONT_SIZE,
            reference_line_step: DEFAULT_REFERENCE_LINE_STEP,
            reference_heading_gap: DEFAULT_REFERENCE_HEADING_GAP,
        }
    }
}

impl Settings {
    /// Usable width of the text box in points
    pub fn box_width(&self) -> f32 {
        self.box_right - self.box_left
    }

    /// Body line height in points
    pub fn line_height(&self) -> f32 {
        self.body_font_size * LINE_HEIGHT_MULTIPLIER
    }

    /// Convert a top-down y coordinate (points from the page top) to the
    /// bottom-up coordinate PDF text operations use.
    pub fn y_from_top(&self, y: f32) -> f32 {
        self.page_height - y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_box_width() {
        let settings = Settings::default();
        assert!((settings.box_width() - 515.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_y_from_top() {
        let settings = Settings::default();
        // Box top at 50pt from the top of an 842pt page
        assert!((settings.y_from_top(50.0) - 792.0).abs() < f32::EPSILON);
    }
}
