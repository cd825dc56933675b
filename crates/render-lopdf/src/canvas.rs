use crate::writer::StreamingPdfWriter;
use crate::xobject::{self, ImageXObject};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Object, StringFormat, Stream, dictionary};
use memberdoc_render_core::utils::{base_font_name, decode_signature, to_win_ansi};
use memberdoc_render_core::{Canvas, FontWeight, ImageHandle, RenderError, TextStyle, metrics};
use memberdoc_types::{Color, Point, Rect, SignatureImage, Size};
use std::io::Cursor;

const PDF_VERSION: &str = "1.7";

/// Document-level metadata written to the PDF `Info` dictionary.
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    pub title: String,
    pub producer: String,
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(FontWeight, f32)>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

/// A PDF canvas backed by `lopdf`.
///
/// Drawing operations accumulate in the current page's content stream. Pages
/// closed by [`Canvas::new_page`] are kept in order; fonts and images are
/// registered in one resources dictionary shared by every page and everything
/// is serialized in [`Canvas::finish`].
pub struct LopdfCanvas {
    page_size: Size,
    info: DocumentInfo,
    finished_pages: Vec<Content>,
    content: Content,
    state: PageRenderState,
    images: Vec<(ImageHandle, ImageXObject)>,
}

impl LopdfCanvas {
    pub fn new(page_size: Size, info: DocumentInfo) -> Result<Self, RenderError> {
        if !(page_size.width > 0.0 && page_size.height > 0.0) {
            return Err(RenderError::InvalidGeometry(format!(
                "page size must be positive, got {}x{}",
                page_size.width, page_size.height
            )));
        }
        Ok(Self {
            page_size,
            info,
            finished_pages: Vec::new(),
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
            images: Vec::new(),
        })
    }

    fn font_resource_name(weight: FontWeight) -> &'static str {
        match weight {
            FontWeight::Regular => "F1",
            FontWeight::Bold => "F2",
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.components();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Color, line_width: f32) {
        if self.state.stroke_color != Some(color) {
            let [r, g, b] = color.components();
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke_color = Some(color);
        }
        if self.state.line_width != Some(line_width) {
            self.push("w", vec![line_width.into()]);
            self.state.line_width = Some(line_width);
        }
    }

    fn set_font(&mut self, weight: FontWeight, size: f32) {
        if self.state.font != Some((weight, size)) {
            self.push(
                "Tf",
                vec![Self::font_resource_name(weight).into(), size.into()],
            );
            self.state.font = Some((weight, size));
        }
    }

    fn font_dictionary() -> Dictionary {
        let mut fonts = Dictionary::new();
        for weight in [FontWeight::Regular, FontWeight::Bold] {
            fonts.set(
                Self::font_resource_name(weight),
                dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => base_font_name(weight),
                    "Encoding" => "WinAnsiEncoding",
                },
            );
        }
        fonts
    }
}

impl Canvas for LopdfCanvas {
    fn page_size(&self) -> Size {
        self.page_size
    }

    fn new_page(&mut self) -> Result<(), RenderError> {
        let closed = std::mem::replace(&mut self.content, Content { operations: vec![] });
        self.finished_pages.push(closed);
        // Graphics state does not carry over between content streams.
        self.state = PageRenderState::default();
        log::debug!("Started page {}", self.page_count());
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.finished_pages.len() + 1
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.set_fill_color(color);
        self.push(
            "re",
            vec![rect.x.into(), rect.y.into(), rect.width.into(), rect.height.into()],
        );
        self.push("f", vec![]);
        Ok(())
    }

    fn stroke_rect(
        &mut self,
        rect: Rect,
        color: Color,
        line_width: f32,
    ) -> Result<(), RenderError> {
        self.set_stroke(color, line_width);
        self.push(
            "re",
            vec![rect.x.into(), rect.y.into(), rect.width.into(), rect.height.into()],
        );
        self.push("S", vec![]);
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        line_width: f32,
    ) -> Result<(), RenderError> {
        self.set_stroke(color, line_width);
        self.push("m", vec![from.x.into(), from.y.into()]);
        self.push("l", vec![to.x.into(), to.y.into()]);
        self.push("S", vec![]);
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        style: TextStyle,
    ) -> Result<(), RenderError> {
        if text.trim().is_empty() {
            return Ok(());
        }
        self.push("BT", vec![]);
        self.set_font(style.weight, style.size);
        self.set_fill_color(style.color);
        self.push("Td", vec![origin.x.into(), origin.y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
        Ok(())
    }

    fn text_width(&self, text: &str, style: TextStyle) -> f32 {
        metrics::text_width(text, style.weight, style.size)
    }

    fn embed_image(&mut self, image: &SignatureImage) -> Result<ImageHandle, RenderError> {
        let decoded = decode_signature(image)?;
        let xobject = xobject::build_image_xobject(image, &decoded)?;
        let handle = ImageHandle {
            name: format!("Im{}", self.images.len() + 1),
            width: decoded.width(),
            height: decoded.height(),
        };
        log::debug!(
            "Embedded {}x{} signature image as {}",
            handle.width,
            handle.height,
            handle.name
        );
        self.images.push((handle.clone(), xobject));
        Ok(handle)
    }

    fn draw_image(&mut self, handle: &ImageHandle, rect: Rect) -> Result<(), RenderError> {
        if !self.images.iter().any(|(h, _)| h == handle) {
            return Err(RenderError::Other(format!(
                "image {} was not embedded on this canvas",
                handle.name
            )));
        }
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                rect.width.into(),
                0.into(),
                0.into(),
                rect.height.into(),
                rect.x.into(),
                rect.y.into(),
            ],
        );
        self.push("Do", vec![Object::Name(handle.name.as_bytes().to_vec())]);
        self.push("Q", vec![]);
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, RenderError> {
        let mut writer = StreamingPdfWriter::new(Cursor::new(Vec::new()), PDF_VERSION)?;

        let mut xobjects = Dictionary::new();
        for (handle, xobject) in self.images {
            let mut image = xobject.image;
            if let Some(mask) = xobject.soft_mask {
                let mask_id = writer.buffer_object(Object::Stream(mask));
                image.dict.set("SMask", mask_id);
            }
            let image_id = writer.buffer_object(Object::Stream(image));
            xobjects.set(handle.name.as_bytes().to_vec(), image_id);
        }

        let mut resources = dictionary! {
            "Font" => Self::font_dictionary(),
            "ProcSet" => vec!["PDF".into(), "Text".into(), "ImageB".into(), "ImageC".into()],
        };
        if !xobjects.is_empty() {
            resources.set("XObject", xobjects);
        }
        writer.set_resources(resources);

        let media_box: Vec<Object> = vec![
            0.into(),
            0.into(),
            self.page_size.width.into(),
            self.page_size.height.into(),
        ];
        let mut pages = self.finished_pages;
        pages.push(self.content);
        for content in &pages {
            let encoded = content.encode()?;
            let content_stream = Stream::new(
                dictionary! { "Filter" => "FlateDecode" },
                xobject::flate_compress(&encoded)?,
            );
            let content_id = writer.buffer_object(Object::Stream(content_stream));

            let page_dict = dictionary! {
                "Type" => "Page",
                "Parent" => writer.pages_id,
                "MediaBox" => media_box.clone(),
                "Contents" => content_id,
                "Resources" => writer.resources_id,
            };
            let page_id = writer.buffer_object(page_dict.into());
            writer.push_page_id(page_id);
        }

        writer.set_info(dictionary! {
            "Title" => Object::String(to_win_ansi(&self.info.title), StringFormat::Literal),
            "Producer" => Object::String(to_win_ansi(&self.info.producer), StringFormat::Literal),
        });

        let cursor = writer.finish()?;
        Ok(cursor.into_inner())
    }
}
