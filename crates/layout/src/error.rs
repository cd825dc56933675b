use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
    #[error("Layout configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
