use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Image could not be decoded: {0}")]
    ImageDecode(String),
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("Other rendering error: {0}")]
    Other(String),
}

impl RenderError {
    /// True for failures confined to the signature raster.
    pub fn is_image_decode(&self) -> bool {
        matches!(self, RenderError::ImageDecode(_))
    }
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::ImageDecode(err.to_string())
    }
}
