//! PDF stream compression.
//!
//! printpdf writes uncompressed content streams; this post-pass parses the
//! generated bytes with lopdf, compresses every stream, and re-saves. The
//! caller treats it as best effort and keeps the uncompressed bytes when
//! it fails.

use std::io::Cursor;

/// Compress PDF streams to reduce file size.
pub fn compress_pdf(uncompressed: Vec<u8>) -> Result<Vec<u8>, String> {
    let mut doc = lopdf::Document::load_mem(&uncompressed)
        .map_err(|e| format!("Failed to parse PDF for compression: {}", e))?;

    doc.compress();

    let mut output = Cursor::new(Vec::new());
    doc.save_to(&mut output)
        .map_err(|e| format!("Failed to save compressed PDF: {}", e))?;

    Ok(output.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_input_is_an_error() {
        assert!(compress_pdf(b"not a pdf".to_vec()).is_err());
    }
}
