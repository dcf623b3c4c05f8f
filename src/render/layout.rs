//! Word wrapping for the fixed-width text box.

use super::text_metrics::BuiltinFontMeasurer;

/// Wrap `text` into lines no wider than `max_width_pt` at `font_size`.
///
/// Paragraph breaks (`\n`) in the source text are preserved; an empty
/// source line stays an empty output line so vertical spacing survives.
/// A single word wider than the box is split at character granularity
/// rather than overflowing.
pub fn wrap_text(
    text: &str,
    max_width_pt: f32,
    font_size: f32,
    measurer: &BuiltinFontMeasurer,
) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        wrap_paragraph(paragraph, max_width_pt, font_size, measurer, &mut lines);
    }

    lines
}

fn wrap_paragraph(
    paragraph: &str,
    max_width_pt: f32,
    font_size: f32,
    measurer: &BuiltinFontMeasurer,
    lines: &mut Vec<String>,
) {
    let mut current = String::new();

    for word in paragraph.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if measurer.measure_width_pt(&candidate, font_size) <= max_width_pt {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if measurer.measure_width_pt(word, font_size) <= max_width_pt {
            current = word.to_string();
        } else {
            current = split_long_word(word, max_width_pt, font_size, measurer, lines);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
}

/// Break a word wider than the box into full lines, returning the
/// remainder that still fits.
fn split_long_word(
    word: &str,
    max_width_pt: f32,
    font_size: f32,
    measurer: &BuiltinFontMeasurer,
    lines: &mut Vec<String>,
) -> String {
    let mut piece = String::new();

    for c in word.chars() {
        if !piece.is_empty() {
            let mut candidate = piece.clone();
            candidate.push(c);
            if measurer.measure_width_pt(&candidate, font_size) > max_width_pt {
                lines.push(std::mem::take(&mut piece));
            }
        }
        piece.push(c);
    }

    piece
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::text_metrics::get_helvetica_measurer;

    #[test]
    fn test_short_text_is_one_line() {
        let lines = wrap_text("hello world", 515.0, 11.0, get_helvetica_measurer());
        assert_eq!(lines, vec!["hello world"]);
    }

    #[test]
    fn test_wraps_at_box_width() {
        let text = "alpha beta gamma delta epsilon zeta";
        let lines = wrap_text(text, 60.0, 11.0, get_helvetica_measurer());
        assert!(lines.len() > 1);
        // No line exceeds the box width
        let m = get_helvetica_measurer();
        for line in &lines {
            assert!(m.measure_width_pt(line, 11.0) <= 60.0, "line too wide: {line:?}");
        }
        // Re-joining restores the words
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_preserves_paragraph_breaks() {
        let lines = wrap_text("one\n\ntwo", 515.0, 11.0, get_helvetica_measurer());
        assert_eq!(lines, vec!["one", "", "two"]);
    }

    #[test]
    fn test_splits_overlong_word() {
        let word = "x".repeat(400);
        let lines = wrap_text(&word, 100.0, 11.0, get_helvetica_measurer());
        assert!(lines.len() > 1);
        let rejoined: String = lines.concat();
        assert_eq!(rejoined, word);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        let lines = wrap_text("", 515.0, 11.0, get_helvetica_measurer());
        assert!(lines.is_empty());
    }
}
