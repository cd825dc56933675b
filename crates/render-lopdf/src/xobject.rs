//! Conversion of decoded signature rasters into PDF image XObjects.

use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::DynamicImage;
use lopdf::{Stream, dictionary};
use memberdoc_render_core::RenderError;
use memberdoc_types::{ImageFormat, SignatureImage};
use std::io::Write;

/// An image XObject and its optional soft mask, not yet assigned object ids.
pub struct ImageXObject {
    pub image: Stream,
    pub soft_mask: Option<Stream>,
}

pub(crate) fn flate_compress(data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Number of color components declared in a JPEG's start-of-frame header.
///
/// Walks the marker segments up to the first SOFn; returns `None` for data
/// that is not a well-formed JPEG header.
pub fn jpeg_component_count(bytes: &[u8]) -> Option<u8> {
    if bytes.get(..2)? != [0xFF, 0xD8] {
        return None;
    }
    let mut pos = 2;
    while pos + 4 <= bytes.len() {
        if bytes[pos] != 0xFF {
            return None;
        }
        let marker = bytes[pos + 1];
        match marker {
            0xFF => {
                pos += 1;
                continue;
            }
            0x01 | 0xD0..=0xD8 => {
                pos += 2;
                continue;
            }
            0xD9 | 0xDA => return None,
            _ => {}
        }
        // SOF0..SOF15, excluding DHT (C4), JPG (C8) and DAC (CC).
        if (0xC0..=0xCF).contains(&marker) && !matches!(marker, 0xC4 | 0xC8 | 0xCC) {
            return bytes.get(pos + 9).copied();
        }
        let length = u16::from_be_bytes([bytes[pos + 2], bytes[pos + 3]]) as usize;
        pos += 2 + length;
    }
    None
}

/// Builds the XObject for an already-decoded signature.
///
/// Grayscale and RGB JPEG uploads are passed through untouched with
/// `DCTDecode`. Everything else, CMYK JPEGs included, is re-encoded from the
/// decoded pixels as Flate-compressed RGB, with an alpha soft mask when at
/// least one pixel is not fully opaque.
pub fn build_image_xobject(
    source: &SignatureImage,
    decoded: &DynamicImage,
) -> Result<ImageXObject, RenderError> {
    let (width, height) = (decoded.width(), decoded.height());

    if source.format() == ImageFormat::Jpeg {
        match jpeg_component_count(&source.bytes) {
            Some(components @ (1 | 3)) => {
                let color_space = if components == 1 {
                    "DeviceGray"
                } else {
                    "DeviceRGB"
                };
                let image = Stream::new(
                    dictionary! {
                        "Type" => "XObject",
                        "Subtype" => "Image",
                        "Width" => i64::from(width),
                        "Height" => i64::from(height),
                        "ColorSpace" => color_space,
                        "BitsPerComponent" => 8,
                        "Filter" => "DCTDecode",
                    },
                    source.bytes.clone(),
                );
                return Ok(ImageXObject {
                    image,
                    soft_mask: None,
                });
            }
            other => {
                log::debug!(
                    "Re-encoding JPEG signature with {:?} components as RGB",
                    other
                );
            }
        }
    }

    let rgba = decoded.to_rgba8();
    let pixel_count = (width as usize) * (height as usize);
    let mut rgb = Vec::with_capacity(pixel_count * 3);
    let mut alpha = Vec::with_capacity(pixel_count);
    let mut has_alpha = false;
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        if a != 255 {
            has_alpha = true;
        }
        rgb.extend_from_slice(&[r, g, b]);
        alpha.push(a);
    }

    let soft_mask = if has_alpha {
        Some(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(width),
                "Height" => i64::from(height),
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8,
                "Filter" => "FlateDecode",
            },
            flate_compress(&alpha)?,
        ))
    } else {
        None
    };

    let image = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(width),
            "Height" => i64::from(height),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "FlateDecode",
        },
        flate_compress(&rgb)?,
    );

    Ok(ImageXObject { image, soft_mask })
}
