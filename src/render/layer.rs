//! Page operation builder for printpdf 0.8.
//!
//! Collects drawing operations into a `Vec<Op>` that becomes one
//! `PdfPage`. The rebuilder only draws plain text in builtin fonts, so
//! this is a deliberately small surface.

use printpdf::{BuiltinFont, Color, Op, Point, Pt, TextItem};

/// A builder that collects PDF operations for one page.
#[derive(Default)]
pub struct LayerBuilder {
    ops: Vec<Op>,
}

impl LayerBuilder {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Get the collected operations.
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Set the fill color for subsequent text.
    pub fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::SetFillColor { col: color });
    }

    /// Draw text at a position given in points from the bottom-left corner.
    pub fn use_text<S: Into<String>>(
        &mut self,
        text: S,
        font_size: f32,
        x: Pt,
        y: Pt,
        font: BuiltinFont,
    ) {
        let text_str = text.into();
        if text_str.is_empty() {
            return;
        }

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: Point { x, y },
        });
        self.ops.push(Op::SetFontSizeBuiltinFont {
            size: Pt(font_size),
            font,
        });
        self.ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text_str)],
            font,
        });
        self.ops.push(Op::EndTextSection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_emits_no_ops() {
        let mut layer = LayerBuilder::new();
        layer.use_text("", 11.0, Pt(40.0), Pt(792.0), BuiltinFont::Helvetica);
        assert!(layer.into_ops().is_empty());
    }

    #[test]
    fn test_text_emits_one_text_section() {
        let mut layer = LayerBuilder::new();
        layer.use_text("hello", 11.0, Pt(40.0), Pt(792.0), BuiltinFont::Helvetica);
        let ops = layer.into_ops();
        assert_eq!(ops.len(), 5);
        assert!(matches!(ops[0], Op::StartTextSection));
        assert!(matches!(ops[4], Op::EndTextSection));
    }
}
