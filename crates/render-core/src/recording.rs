//! An in-memory canvas that records draw calls instead of producing a PDF.
//!
//! Layout code is exercised against this surface in tests; it measures text with
//! the same font metrics and decodes images the same way the PDF backend does.

use crate::error::RenderError;
use crate::metrics;
use crate::traits::Canvas;
use crate::types::{ImageHandle, TextStyle};
use crate::utils::decode_signature;
use memberdoc_types::{Color, Point, Rect, SignatureImage, Size};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color, line_width: f32 },
    Line { from: Point, to: Point, color: Color, line_width: f32 },
    Text { text: String, origin: Point, style: TextStyle },
    Image { name: String, rect: Rect },
    NewPage,
}

impl DrawCommand {
    /// Lowest y this command paints at, if it paints anything.
    pub fn lowest_y(&self) -> Option<f32> {
        match self {
            DrawCommand::FillRect { rect, .. }
            | DrawCommand::StrokeRect { rect, .. }
            | DrawCommand::Image { rect, .. } => Some(rect.y),
            DrawCommand::Line { from, to, .. } => Some(from.y.min(to.y)),
            DrawCommand::Text { origin, .. } => Some(origin.y),
            DrawCommand::NewPage => None,
        }
    }
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::FillRect { rect, .. } => write!(
                f,
                "fill {:.2} {:.2} {:.2} {:.2}",
                rect.x, rect.y, rect.width, rect.height
            ),
            DrawCommand::StrokeRect { rect, .. } => write!(
                f,
                "stroke {:.2} {:.2} {:.2} {:.2}",
                rect.x, rect.y, rect.width, rect.height
            ),
            DrawCommand::Line { from, to, .. } => {
                write!(f, "line {:.2} {:.2} {:.2} {:.2}", from.x, from.y, to.x, to.y)
            }
            DrawCommand::Text { text, origin, .. } => {
                write!(f, "text {:.2} {:.2} {}", origin.x, origin.y, text)
            }
            DrawCommand::Image { name, rect } => write!(
                f,
                "image {} {:.2} {:.2} {:.2} {:.2}",
                name, rect.x, rect.y, rect.width, rect.height
            ),
            DrawCommand::NewPage => write!(f, "page"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    page_size: Size,
    commands: Vec<DrawCommand>,
    images: Vec<ImageHandle>,
}

impl RecordingCanvas {
    pub fn new(page_size: Size) -> Self {
        Self {
            page_size,
            commands: Vec::new(),
            images: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn images(&self) -> &[ImageHandle] {
        &self.images
    }

    /// Commands split at page breaks; page `i` of the result is page `i` of the canvas.
    pub fn pages(&self) -> Vec<&[DrawCommand]> {
        self.commands
            .split(|cmd| matches!(cmd, DrawCommand::NewPage))
            .collect()
    }

    /// Every text run with its baseline origin, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, origin, .. } => Some((text.as_str(), *origin)),
            _ => None,
        })
    }

    pub fn find_text(&self, needle: &str) -> Option<Point> {
        self.texts()
            .find(|(text, _)| *text == needle)
            .map(|(_, origin)| origin)
    }

    pub fn image_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Image { rect, .. } => Some(*rect),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn page_size(&self) -> Size {
        self.page_size
    }

    fn new_page(&mut self) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::NewPage);
        Ok(())
    }

    fn page_count(&self) -> usize {
        1 + self
            .commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::NewPage))
            .count()
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::FillRect { rect, color });
        Ok(())
    }

    fn stroke_rect(
        &mut self,
        rect: Rect,
        color: Color,
        line_width: f32,
    ) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color,
            line_width,
        });
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        color: Color,
        line_width: f32,
    ) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            line_width,
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        style: TextStyle,
    ) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            style,
        });
        Ok(())
    }

    fn text_width(&self, text: &str, style: TextStyle) -> f32 {
        metrics::text_width(text, style.weight, style.size)
    }

    fn embed_image(&mut self, image: &SignatureImage) -> Result<ImageHandle, RenderError> {
        let decoded = decode_signature(image)?;
        let handle = ImageHandle {
            name: format!("Im{}", self.images.len() + 1),
            width: decoded.width(),
            height: decoded.height(),
        };
        self.images.push(handle.clone());
        Ok(handle)
    }

    fn draw_image(&mut self, handle: &ImageHandle, rect: Rect) -> Result<(), RenderError> {
        if !self.images.contains(handle) {
            return Err(RenderError::Other(format!(
                "image {} was not embedded on this canvas",
                handle.name
            )));
        }
        self.commands.push(DrawCommand::Image {
            name: handle.name.clone(),
            rect,
        });
        Ok(())
    }

    /// Produces the command log, one command per line.
    fn finish(self) -> Result<Vec<u8>, RenderError> {
        let mut out = String::new();
        for cmd in &self.commands {
            out.push_str(&cmd.to_string());
            out.push('\n');
        }
        Ok(out.into_bytes())
    }
}
