//! Drawing helpers for each block of the application document.
//!
//! Every helper draws at the cursor and then advances it. Helpers for blocks
//! that may land near the bottom of the page call [`ensure_room`] first, which
//! moves the cursor to the top of a new page when the block would reach into
//! the footer reserve.

use crate::config::LayoutConfig;
use crate::cursor::LayoutCursor;
use crate::wrap::wrap_fixed;
use memberdoc_render_core::{Canvas, ImageHandle, RenderError, TextStyle};
use memberdoc_types::{Point, Rect, Size};

/// Approximate cap height of Helvetica as a fraction of the font size.
const CAP_HEIGHT: f32 = 0.7;

/// Baseline that vertically centers capital letters of `size` in a band
/// whose top edge is `top`.
fn centered_baseline(top: f32, height: f32, size: f32) -> f32 {
    top - height + (height - size * CAP_HEIGHT) / 2.0
}

/// Where a label/value row landed and how many lines its value took.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    pub lines: usize,
    /// Page holding the row's last line.
    pub page: usize,
    /// The band the row occupies on that page, down to the cursor after it.
    pub region: Rect,
}

/// Geometry of a drawn signature block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignatureLayout {
    pub box_rect: Rect,
    pub image_rect: Rect,
}

/// Starts a new page when a block `needed` points tall would reach below
/// [`LayoutConfig::content_floor`]. Returns whether a page was started.
///
/// A cursor already at the top of a page never breaks, so a block taller
/// than the page is drawn where it is instead of looping.
pub fn ensure_room<C: Canvas>(
    canvas: &mut C,
    config: &LayoutConfig,
    cursor: &mut LayoutCursor,
    needed: f32,
) -> Result<bool, RenderError> {
    let at_page_top = cursor.y() >= config.cursor_start();
    if at_page_top || cursor.y() - needed >= config.content_floor() {
        return Ok(false);
    }
    canvas.new_page()?;
    log::debug!(
        "Breaking to page {} with {:.2}pt left above the footer, {:.2}pt needed",
        cursor.page() + 1,
        cursor.y() - config.content_floor(),
        needed
    );
    cursor.next_page(config.cursor_start());
    Ok(true)
}

/// Colored banner with the document title.
pub fn draw_banner<C: Canvas>(
    canvas: &mut C,
    config: &LayoutConfig,
    cursor: &mut LayoutCursor,
) -> Result<Rect, RenderError> {
    let rect = Rect::new(
        config.content_left(),
        cursor.y() - config.banner_height,
        config.content_width(),
        config.banner_height,
    );
    canvas.fill_rect(rect, config.banner_color)?;
    canvas.draw_text(
        &config.title,
        Point::new(
            rect.x + config.banner_title_inset,
            centered_baseline(cursor.y(), config.banner_height, config.title_size),
        ),
        TextStyle::bold(config.title_size).with_color(config.banner_text_color),
    )?;
    cursor.advance(config.banner_height + config.banner_gap);
    Ok(rect)
}

/// Short lines right-aligned against the content's right edge.
pub fn draw_metadata<C: Canvas>(
    canvas: &mut C,
    config: &LayoutConfig,
    cursor: &mut LayoutCursor,
    lines: &[String],
) -> Result<(), RenderError> {
    let style = TextStyle::regular(config.metadata_size).with_color(config.label_color);
    let mut baseline = cursor.y() - config.metadata_size;
    for line in lines {
        let width = canvas.text_width(line, style);
        canvas.draw_text(line, Point::new(config.content_right() - width, baseline), style)?;
        baseline -= config.metadata_line_spacing;
    }
    cursor.advance(config.metadata_drop);
    Ok(())
}

/// Shaded band with a bold title. Identical for every section.
///
/// The header moves to a new page unless `keep_with_next` points of the
/// block that follows it fit below it.
pub fn draw_section_header<C: Canvas>(
    canvas: &mut C,
    config: &LayoutConfig,
    cursor: &mut LayoutCursor,
    title: &str,
    keep_with_next: f32,
) -> Result<Rect, RenderError> {
    ensure_room(
        canvas,
        config,
        cursor,
        config.section_header_height + config.section_header_spacing + keep_with_next,
    )?;
    let rect = Rect::new(
        config.content_left(),
        cursor.y() - config.section_header_height,
        config.content_width(),
        config.section_header_height,
    );
    canvas.fill_rect(rect, config.section_fill)?;
    canvas.draw_text(
        title,
        Point::new(
            rect.x + config.section_title_inset,
            centered_baseline(
                cursor.y(),
                config.section_header_height,
                config.section_title_size,
            ),
        ),
        TextStyle::bold(config.section_title_size).with_color(config.section_title_color),
    )?;
    cursor.advance(config.section_header_height + config.section_header_spacing);
    Ok(rect)
}

/// Bold label and regular value on a shared baseline; long values wrap onto
/// extra lines in the value column and push the cursor down by one row height
/// per extra line. A wrapped value continues on a new page when its next line
/// would reach into the footer reserve.
pub fn draw_row<C: Canvas>(
    canvas: &mut C,
    config: &LayoutConfig,
    cursor: &mut LayoutCursor,
    label: &str,
    value: &str,
) -> Result<RowLayout, RenderError> {
    ensure_room(canvas, config, cursor, config.row_height)?;
    let label_style = TextStyle::bold(config.row_font_size).with_color(config.label_color);
    let value_style = TextStyle::regular(config.row_font_size).with_color(config.value_color);
    let mut top = cursor.y();

    canvas.draw_text(
        label,
        Point::new(
            config.content_left() + config.label_indent,
            centered_baseline(top, config.row_height, config.row_font_size),
        ),
        label_style,
    )?;

    let lines = wrap_fixed(value, config.wrap_width);
    let value_x = config.content_left() + config.value_offset;
    for (i, line) in lines.iter().enumerate() {
        if i > 0 && ensure_room(canvas, config, cursor, config.row_height)? {
            top = cursor.y();
        }
        canvas.draw_text(
            line,
            Point::new(
                value_x,
                centered_baseline(cursor.y(), config.row_height, config.row_font_size),
            ),
            value_style,
        )?;
        cursor.advance(config.row_height);
    }

    Ok(RowLayout {
        lines: lines.len(),
        page: cursor.page(),
        region: Rect::new(
            config.content_left(),
            cursor.y(),
            config.content_width(),
            top - cursor.y(),
        ),
    })
}

/// Display size for an image scaled to fit inside `bounds`, preserving its
/// aspect ratio. Wide images fill the bounds' width, tall ones its height.
pub fn scaled_to_fit(bounds: Size, source_width: u32, source_height: u32) -> Size {
    let (width, height) = (source_width as f32, source_height as f32);
    let scale = (bounds.width / width).min(bounds.height / height);
    Size::new(width * scale, height * scale)
}

/// Bordered box holding an already-embedded signature image and a
/// "Signed by:" caption. The image is scaled into
/// [`LayoutConfig::signature_image_bounds`] and never leaves the box.
pub fn draw_signature_block<C: Canvas>(
    canvas: &mut C,
    config: &LayoutConfig,
    cursor: &mut LayoutCursor,
    image: &ImageHandle,
    signer: &str,
) -> Result<SignatureLayout, RenderError> {
    ensure_room(canvas, config, cursor, config.signature_box_height)?;
    let box_rect = Rect::new(
        config.content_left(),
        cursor.y() - config.signature_box_height,
        config.content_width(),
        config.signature_box_height,
    );
    canvas.fill_rect(box_rect, config.signature_fill)?;
    canvas.stroke_rect(box_rect, config.signature_border, 1.0)?;

    let size = scaled_to_fit(config.signature_image_bounds(), image.width, image.height);
    let image_rect = Rect::new(
        box_rect.right() - config.signature_padding - size.width,
        box_rect.y + (box_rect.height - size.height) / 2.0,
        size.width,
        size.height,
    );
    canvas.draw_image(image, image_rect)?;

    let caption = if signer.trim().is_empty() {
        "Signed by:".to_string()
    } else {
        format!("Signed by: {}", signer)
    };
    canvas.draw_text(
        &caption,
        Point::new(
            box_rect.x + config.signature_padding,
            box_rect.y + config.signature_label_offset,
        ),
        TextStyle::regular(config.signature_label_size).with_color(config.label_color),
    )?;

    cursor.advance(config.signature_box_height + config.signature_gap);
    Ok(SignatureLayout {
        box_rect,
        image_rect,
    })
}

/// Rule plus disclaimer and organization name on the current page, placed
/// `footer_gap` below the cursor but never below [`LayoutConfig::footer_floor`],
/// which keeps the footer text above the bottom margin. Returns the rule's y
/// position.
pub fn draw_footer<C: Canvas>(
    canvas: &mut C,
    config: &LayoutConfig,
    cursor: &LayoutCursor,
) -> Result<f32, RenderError> {
    let rule_y = cursor.clamped_below(config.footer_gap, config.footer_floor());
    canvas.draw_line(
        Point::new(config.content_left(), rule_y),
        Point::new(config.content_right(), rule_y),
        config.rule_color,
        config.footer_rule_width,
    )?;

    let text_y = rule_y - config.footer_text_drop;
    let disclaimer_style =
        TextStyle::regular(config.footer_font_size).with_color(config.footer_text_color);
    canvas.draw_text(
        &config.disclaimer,
        Point::new(config.content_left(), text_y),
        disclaimer_style,
    )?;

    let org_style = TextStyle::bold(config.footer_font_size).with_color(config.footer_text_color);
    let org_width = canvas.text_width(&config.organization_name, org_style);
    canvas.draw_text(
        &config.organization_name,
        Point::new(config.content_right() - org_width, text_y),
        org_style,
    )?;
    Ok(rule_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use memberdoc_render_core::{DrawCommand, RecordingCanvas};

    fn setup() -> (RecordingCanvas, LayoutConfig, LayoutCursor) {
        let config = LayoutConfig::default();
        let canvas = RecordingCanvas::new(config.page_size());
        let cursor = LayoutCursor::new(config.cursor_start());
        (canvas, config, cursor)
    }

    #[test]
    fn banner_spans_content_width() {
        let (mut canvas, config, mut cursor) = setup();
        let start = cursor.y();
        let rect = draw_banner(&mut canvas, &config, &mut cursor).unwrap();
        assert_eq!(rect.width, config.content_width());
        assert_eq!(rect.top(), start);
        assert_eq!(cursor.y(), start - 100.0);
        assert!(canvas.find_text("Membership Application Form").is_some());
    }

    #[test]
    fn metadata_is_right_aligned() {
        let (mut canvas, config, mut cursor) = setup();
        let lines = vec!["Application ID: test-001".to_string(), "Submitted: 1 May 2024".to_string()];
        draw_metadata(&mut canvas, &config, &mut cursor, &lines).unwrap();
        for (text, origin) in canvas.texts() {
            let width = canvas.text_width(text, TextStyle::regular(config.metadata_size));
            assert!((origin.x + width - config.content_right()).abs() < 1e-3);
        }
    }

    #[test]
    fn single_line_row_advances_one_row_height() {
        let (mut canvas, config, mut cursor) = setup();
        let start = cursor.y();
        let row = draw_row(&mut canvas, &config, &mut cursor, "District", "Patna").unwrap();
        assert_eq!(row.lines, 1);
        assert_eq!(cursor.y(), start - config.row_height);
        let label = canvas.find_text("District").unwrap();
        let value = canvas.find_text("Patna").unwrap();
        assert_eq!(label.y, value.y);
        assert_eq!(value.x - label.x, config.value_offset - config.label_indent);
    }

    #[test]
    fn wrapped_row_reserves_every_line() {
        let (mut canvas, config, mut cursor) = setup();
        let start = cursor.y();
        let address = "x".repeat(200);
        let row = draw_row(&mut canvas, &config, &mut cursor, "Address", &address).unwrap();
        assert_eq!(row.lines, 4);
        assert_eq!(cursor.y(), start - 4.0 * config.row_height);

        let next = draw_row(&mut canvas, &config, &mut cursor, "District", "Patna").unwrap();
        assert!(!row.region.overlaps_vertically(&next.region));

        let lowest_value_line = canvas
            .texts()
            .filter(|(t, _)| t.starts_with('x'))
            .map(|(_, p)| p.y)
            .fold(f32::INFINITY, f32::min);
        let district = canvas.find_text("District").unwrap();
        assert!(district.y < lowest_value_line);
    }

    #[test]
    fn section_headers_share_one_style() {
        let (mut canvas, config, mut cursor) = setup();
        let a = draw_section_header(&mut canvas, &config, &mut cursor, "Personal Information", 0.0)
            .unwrap();
        let b = draw_section_header(&mut canvas, &config, &mut cursor, "Contact Information", 0.0)
            .unwrap();
        assert_eq!(a.height, b.height);
        assert_eq!(a.width, b.width);
        let fills: Vec<_> = canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(fills, vec![config.section_fill, config.section_fill]);
    }

    #[test]
    fn scaling_preserves_aspect_ratio() {
        let bounds = Size::new(150.0, 60.0);
        let wide = scaled_to_fit(bounds, 400, 100);
        assert_eq!(wide.width, 150.0);
        assert_eq!(wide.height, 150.0 * (100.0 / 400.0));

        let square = scaled_to_fit(bounds, 300, 300);
        assert!((square.width - 60.0).abs() < 1e-3);
        assert!((square.height - 60.0).abs() < 1e-3);
    }

    fn embed_fixture(canvas: &mut RecordingCanvas, width: u32, height: u32) -> ImageHandle {
        let mut png = std::io::Cursor::new(Vec::new());
        image_fixture(width, height)
            .write_to(&mut png, image::ImageFormat::Png)
            .unwrap();
        canvas
            .embed_image(&memberdoc_types::SignatureImage::new(png.into_inner(), "image/png"))
            .unwrap()
    }

    #[test]
    fn square_signature_stays_inside_its_box() {
        let (mut canvas, config, mut cursor) = setup();
        let header =
            draw_section_header(&mut canvas, &config, &mut cursor, "Signature", 0.0).unwrap();
        let handle = embed_fixture(&mut canvas, 300, 300);
        let layout =
            draw_signature_block(&mut canvas, &config, &mut cursor, &handle, "Asha").unwrap();

        let (image, frame) = (layout.image_rect, layout.box_rect);
        assert!(image.y >= frame.y);
        assert!(image.top() <= frame.top());
        assert!(image.x >= frame.x);
        assert!(image.right() <= frame.right());
        assert!(image.top() < header.y);
        assert!((image.width - image.height).abs() < 1e-3);
    }

    #[test]
    fn signature_image_hugs_right_edge_and_is_centered() {
        let (mut canvas, config, mut cursor) = setup();
        let handle = ImageHandle {
            name: "Im1".into(),
            width: 400,
            height: 100,
        };
        // The recording canvas only draws images it embedded itself.
        let embedded = embed_fixture(&mut canvas, 400, 100);
        assert_eq!(embedded, handle);

        let start = cursor.y();
        let layout =
            draw_signature_block(&mut canvas, &config, &mut cursor, &embedded, "Dr. Priya Sharma")
                .unwrap();
        assert_eq!(layout.image_rect.width, config.signature_target_width);
        assert_eq!(layout.image_rect.height, 37.5);
        assert_eq!(
            layout.image_rect.right(),
            layout.box_rect.right() - config.signature_padding
        );
        let box_mid = layout.box_rect.y + layout.box_rect.height / 2.0;
        let image_mid = layout.image_rect.y + layout.image_rect.height / 2.0;
        assert!((box_mid - image_mid).abs() < 1e-3);
        assert!(canvas.find_text("Signed by: Dr. Priya Sharma").is_some());
        assert_eq!(
            cursor.y(),
            start - config.signature_box_height - config.signature_gap
        );
    }

    #[test]
    fn footer_stays_above_the_margin() {
        let (mut canvas, config, _) = setup();
        let low = LayoutCursor::new(55.0);
        let rule_y = draw_footer(&mut canvas, &config, &low).unwrap();
        assert_eq!(rule_y, config.footer_floor());
        let disclaimer = canvas.find_text(&config.disclaimer).unwrap();
        assert!(disclaimer.y >= config.margin);

        let high = LayoutCursor::new(300.0);
        let rule_y = draw_footer(&mut canvas, &config, &high).unwrap();
        assert_eq!(rule_y, 280.0);
        let org = canvas
            .texts()
            .filter(|(t, _)| *t == config.organization_name)
            .last()
            .unwrap()
            .1;
        assert_eq!(org.y, 280.0 - config.footer_text_drop);
    }

    #[test]
    fn ensure_room_breaks_only_when_the_floor_is_crossed() {
        let (mut canvas, config, _) = setup();
        let mut cursor = LayoutCursor::new(config.content_floor() + 20.0);
        assert!(!ensure_room(&mut canvas, &config, &mut cursor, 20.0).unwrap());
        assert_eq!(canvas.page_count(), 1);

        assert!(ensure_room(&mut canvas, &config, &mut cursor, 21.0).unwrap());
        assert_eq!(canvas.page_count(), 2);
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.y(), config.cursor_start());

        // Already at the top of a page: a block taller than the page stays put.
        assert!(!ensure_room(&mut canvas, &config, &mut cursor, 10_000.0).unwrap());
        assert_eq!(canvas.page_count(), 2);
    }

    #[test]
    fn header_moves_to_the_next_page_with_its_first_row() {
        let (mut canvas, config, _) = setup();
        // Room for the header band but not for the row under it.
        let mut cursor = LayoutCursor::new(config.content_floor() + 40.0);
        let header = draw_section_header(
            &mut canvas,
            &config,
            &mut cursor,
            "Payment Information",
            config.row_height,
        )
        .unwrap();
        assert_eq!(cursor.page(), 1);
        assert!((header.top() - config.cursor_start()).abs() < 1e-3);
        let pages = canvas.pages();
        assert!(pages[0].is_empty());
        assert_eq!(pages[1].len(), 2);
    }

    #[test]
    fn long_value_continues_on_the_next_page() {
        let (mut canvas, config, _) = setup();
        let mut cursor = LayoutCursor::new(config.content_floor() + 3.0 * config.row_height);
        let address = "y".repeat(50 * 5);
        let row = draw_row(&mut canvas, &config, &mut cursor, "Address", &address).unwrap();
        assert_eq!(row.lines, 5);
        assert_eq!(row.page, 1);
        assert_eq!(canvas.page_count(), 2);
        // Three lines fit above the footer reserve, two move over.
        assert!((cursor.y() - (config.cursor_start() - 2.0 * config.row_height)).abs() < 1e-3);
        assert!((row.region.top() - config.cursor_start()).abs() < 1e-3);

        let pages = canvas.pages();
        for cmd in pages[0] {
            assert!(cmd.lowest_y().unwrap() >= config.content_floor());
        }
        let continued = pages[1]
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Text { .. }))
            .count();
        assert_eq!(continued, 2);
    }

    #[test]
    fn signature_block_never_reaches_the_footer_reserve() {
        let (mut canvas, config, _) = setup();
        let handle = embed_fixture(&mut canvas, 400, 100);
        let mut cursor = LayoutCursor::new(config.content_floor() + 50.0);
        let layout =
            draw_signature_block(&mut canvas, &config, &mut cursor, &handle, "Asha").unwrap();
        assert_eq!(canvas.page_count(), 2);
        assert!((layout.box_rect.top() - config.cursor_start()).abs() < 1e-3);
        assert!(layout.box_rect.y >= config.content_floor());
    }

    fn image_fixture(width: u32, height: u32) -> image::DynamicImage {
        image::DynamicImage::ImageRgb8(image::ImageBuffer::from_pixel(
            width,
            height,
            image::Rgb([20, 20, 20]),
        ))
    }
}
