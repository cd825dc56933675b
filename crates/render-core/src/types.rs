use memberdoc_types::Color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Font, size and fill color for a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub weight: FontWeight,
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub fn regular(size: f32) -> Self {
        Self {
            weight: FontWeight::Regular,
            size,
            color: Color::BLACK,
        }
    }

    pub fn bold(size: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            size,
            color: Color::BLACK,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// A reference to an image registered on a canvas, with its pixel dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    /// Resource name the image is drawn by, e.g. `Im1`.
    pub name: String,
    pub width: u32,
    pub height: u32,
}
