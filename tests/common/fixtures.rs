use chrono::NaiveDate;
use image::{ImageBuffer, Rgb, Rgba};
use memberdoc::{ApplicationId, ApplicationRecord, MembershipCategory, SignatureImage};
use std::io::Cursor;

/// Exactly 60 characters.
pub const SIXTY_CHAR_ADDRESS: &str = "House 221, Lotus Residency, Boring Road, Near Patna Junction";

pub fn sample_record() -> ApplicationRecord {
    ApplicationRecord {
        full_name: "Dr. Priya Sharma".into(),
        date_of_birth: "1985-04-12".into(),
        qualification: "MBBS".into(),
        membership_type: MembershipCategory::Life,
        email: "p@example.com".into(),
        mobile: "9876543210".into(),
        address: SIXTY_CHAR_ADDRESS.into(),
        district: "Patna".into(),
        state: "Bihar".into(),
        pin_code: "800001".into(),
        payment_transaction_id: Some("UTR123456".into()),
        identifier: ApplicationId::new("test-001"),
        submitted_on: NaiveDate::from_ymd_opt(2024, 3, 1),
        document_id: None,
    }
}

/// Opaque RGB PNG of the given size.
pub fn png_signature(width: u32, height: u32) -> SignatureImage {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        if (x + y) % 7 == 0 { Rgb([0u8, 0, 0]) } else { Rgb([255u8, 255, 255]) }
    });
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    SignatureImage::new(bytes, "image/png")
}

/// PNG with a transparent background, as signature pads produce.
pub fn transparent_png_signature(width: u32, height: u32) -> SignatureImage {
    let img = ImageBuffer::from_fn(width, height, |x, _| {
        if x % 3 == 0 { Rgba([0u8, 0, 0, 255]) } else { Rgba([0u8, 0, 0, 0]) }
    });
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    SignatureImage::new(bytes, "image/png")
}

pub fn jpeg_signature(width: u32, height: u32) -> SignatureImage {
    let img = ImageBuffer::from_pixel(width, height, Rgb([40u8, 40, 90]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Jpeg)
        .unwrap();
    SignatureImage::new(bytes, "image/jpeg")
}

/// PNG magic followed by garbage.
pub fn corrupted_png_signature() -> SignatureImage {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.extend_from_slice(b"this is definitely not an IHDR chunk");
    SignatureImage::new(bytes, "image/png")
}
