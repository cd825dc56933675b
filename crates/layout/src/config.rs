use crate::error::LayoutError;
use memberdoc_types::{Color, Size};
use serde::Deserialize;

/// Geometry, typography and wording of the application document.
///
/// Every field has a default; a JSON override only needs the keys it changes.
/// Lengths are PDF points.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub page_width: f32,
    pub page_height: f32,
    /// Applied on all four sides.
    pub margin: f32,

    pub banner_height: f32,
    pub banner_gap: f32,
    pub banner_title_inset: f32,
    pub title_size: f32,

    pub metadata_size: f32,
    pub metadata_line_spacing: f32,
    /// Cursor drop after the two metadata lines.
    pub metadata_drop: f32,

    pub section_header_height: f32,
    pub section_header_spacing: f32,
    pub section_title_size: f32,
    pub section_title_inset: f32,
    pub section_gap: f32,

    pub row_height: f32,
    pub row_font_size: f32,
    pub label_indent: f32,
    /// Offset of the value column from the left margin.
    pub value_offset: f32,
    /// Values longer than this many characters are wrapped.
    pub wrap_width: usize,

    pub signature_box_height: f32,
    pub signature_target_width: f32,
    pub signature_padding: f32,
    pub signature_label_size: f32,
    pub signature_label_offset: f32,
    pub signature_gap: f32,

    pub footer_gap: f32,
    pub footer_text_drop: f32,
    pub footer_font_size: f32,
    pub footer_rule_width: f32,

    pub title: String,
    pub disclaimer: String,
    pub organization_name: String,

    pub banner_color: Color,
    pub banner_text_color: Color,
    pub section_fill: Color,
    pub section_title_color: Color,
    pub label_color: Color,
    pub value_color: Color,
    pub signature_fill: Color,
    pub signature_border: Color,
    pub rule_color: Color,
    pub footer_text_color: Color,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let a4 = Size::a4();
        Self {
            page_width: a4.width,
            page_height: a4.height,
            margin: 50.0,

            banner_height: 80.0,
            banner_gap: 20.0,
            banner_title_inset: 20.0,
            title_size: 20.0,

            metadata_size: 10.0,
            metadata_line_spacing: 14.0,
            metadata_drop: 40.0,

            section_header_height: 25.0,
            section_header_spacing: 10.0,
            section_title_size: 12.0,
            section_title_inset: 10.0,
            section_gap: 10.0,

            row_height: 20.0,
            row_font_size: 10.0,
            label_indent: 10.0,
            value_offset: 180.0,
            wrap_width: 50,

            signature_box_height: 80.0,
            signature_target_width: 150.0,
            signature_padding: 10.0,
            signature_label_size: 9.0,
            signature_label_offset: 12.0,
            signature_gap: 20.0,

            footer_gap: 20.0,
            footer_text_drop: 15.0,
            footer_font_size: 8.0,
            footer_rule_width: 0.5,

            title: "Membership Application Form".to_string(),
            disclaimer: "This document was generated automatically from the submitted application."
                .to_string(),
            organization_name: "The Membership Society".to_string(),

            banner_color: Color::rgb(30, 58, 138),
            banner_text_color: Color::WHITE,
            section_fill: Color::rgb(241, 245, 249),
            section_title_color: Color::rgb(30, 41, 59),
            label_color: Color::rgb(51, 65, 85),
            value_color: Color::BLACK,
            signature_fill: Color::rgb(248, 250, 252),
            signature_border: Color::rgb(203, 213, 225),
            rule_color: Color::rgb(148, 163, 184),
            footer_text_color: Color::rgb(100, 116, 139),
        }
    }
}

impl LayoutConfig {
    /// Parses a JSON override and validates the result.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn page_size(&self) -> Size {
        Size::new(self.page_width, self.page_height)
    }

    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    pub fn content_left(&self) -> f32 {
        self.margin
    }

    pub fn content_right(&self) -> f32 {
        self.page_width - self.margin
    }

    /// Where the cursor starts: the top margin.
    pub fn cursor_start(&self) -> f32 {
        self.page_height - self.margin
    }

    /// Vertical space kept free above the bottom margin for the footer.
    pub fn footer_reserve(&self) -> f32 {
        self.footer_gap + self.footer_text_drop + self.footer_font_size
    }

    /// Lowest y that page content may reach; below it a new page is started.
    pub fn content_floor(&self) -> f32 {
        self.margin + self.footer_reserve()
    }

    /// Lowest position of the footer rule; keeps the footer text inside the margin.
    pub fn footer_floor(&self) -> f32 {
        self.content_floor() - self.footer_gap
    }

    /// Largest image that fits inside the signature box's padding.
    pub fn signature_image_bounds(&self) -> Size {
        Size::new(
            self.signature_target_width,
            self.signature_box_height - 2.0 * self.signature_padding,
        )
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let positive = [
            ("pageWidth", self.page_width),
            ("pageHeight", self.page_height),
            ("rowHeight", self.row_height),
            ("sectionHeaderHeight", self.section_header_height),
            ("bannerHeight", self.banner_height),
            ("signatureBoxHeight", self.signature_box_height),
            ("signatureTargetWidth", self.signature_target_width),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(LayoutError::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "margin must not be negative, got {}",
                self.margin
            )));
        }
        if self.content_width() <= self.value_offset {
            return Err(LayoutError::InvalidConfig(format!(
                "margins leave {:.2}pt of content width, less than the value column offset {:.2}pt",
                self.content_width(),
                self.value_offset
            )));
        }
        if 2.0 * self.margin >= self.page_height {
            return Err(LayoutError::InvalidConfig(
                "margins leave no vertical space on the page".to_string(),
            ));
        }
        if self.signature_image_bounds().height <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "signatureBoxHeight {:.2}pt leaves no room inside {:.2}pt padding",
                self.signature_box_height, self.signature_padding
            )));
        }
        let tallest_block =
            self.section_header_height + self.section_header_spacing + self.signature_box_height;
        if self.cursor_start() - self.content_floor() < tallest_block {
            return Err(LayoutError::InvalidConfig(format!(
                "page leaves {:.2}pt between the margins and footer, less than the {:.2}pt signature block",
                self.cursor_start() - self.content_floor(),
                tallest_block
            )));
        }
        if self.wrap_width == 0 {
            return Err(LayoutError::InvalidConfig(
                "wrapWidth must be at least one character".to_string(),
            ));
        }
        Ok(())
    }
}
