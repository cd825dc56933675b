use crate::error::RenderError;
use crate::types::{ImageHandle, TextStyle};
use memberdoc_types::{Color, Point, Rect, SignatureImage, Size};

/// A trait for paged drawing surfaces, abstracting the PDF-writing primitives.
///
/// All coordinates are PDF points with the origin at the bottom-left corner of
/// the page. Text origins are baselines. Drawing always targets the last page;
/// a fresh canvas starts with one.
pub trait Canvas {
    fn page_size(&self) -> Size;

    /// Closes the current page and starts an empty one of the same size.
    fn new_page(&mut self) -> Result<(), RenderError>;

    fn page_count(&self) -> usize;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError>;

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32)
    -> Result<(), RenderError>;

    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        line_width: f32,
    ) -> Result<(), RenderError>;

    fn draw_text(&mut self, text: &str, origin: Point, style: TextStyle)
    -> Result<(), RenderError>;

    /// Advance width of `text` in points when set in `style`.
    fn text_width(&self, text: &str, style: TextStyle) -> f32;

    /// Decodes and registers an image so it can be drawn.
    ///
    /// Fails with [`RenderError::ImageDecode`] when the bytes are not a valid
    /// image of the declared format; the surface is left unchanged in that case.
    fn embed_image(&mut self, image: &SignatureImage) -> Result<ImageHandle, RenderError>;

    fn draw_image(&mut self, handle: &ImageHandle, rect: Rect) -> Result<(), RenderError>;

    /// Serializes everything drawn so far.
    fn finish(self) -> Result<Vec<u8>, RenderError>
    where
        Self: Sized;
}
