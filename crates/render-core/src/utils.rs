use crate::encoding::win_ansi_byte;
use crate::error::RenderError;
use crate::types::FontWeight;
use image::DynamicImage;
use memberdoc_types::{ImageFormat, SignatureImage};

/// Base-14 PDF font name for a weight.
pub fn base_font_name(weight: FontWeight) -> &'static str {
    match weight {
        FontWeight::Regular => "Helvetica",
        FontWeight::Bold => "Helvetica-Bold",
    }
}

/// Encode text for a WinAnsi font; characters the encoding lacks become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| win_ansi_byte(c).unwrap_or(b'?'))
        .collect()
}

/// Decodes a signature upload in its declared format.
pub fn decode_signature(signature: &SignatureImage) -> Result<DynamicImage, RenderError> {
    let format = match signature.format() {
        ImageFormat::Png => image::ImageFormat::Png,
        ImageFormat::Jpeg => image::ImageFormat::Jpeg,
    };
    let decoded = image::load_from_memory_with_format(&signature.bytes, format)?;
    log::debug!(
        "Decoded {:?} signature: {}x{}",
        format,
        decoded.width(),
        decoded.height()
    );
    if decoded.width() == 0 || decoded.height() == 0 {
        return Err(RenderError::ImageDecode("image has no pixels".into()));
    }
    Ok(decoded)
}
