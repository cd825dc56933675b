//! Core rendering abstractions for membership application documents.
//!
//! This crate provides the fundamental traits and types used by drawing backends:
//! - `Canvas` trait for abstracting PDF drawing primitives
//! - Error types for rendering operations
//! - Font metrics and text encoding helpers for the standard Helvetica fonts
//! - `RecordingCanvas`, an in-memory backend that captures draw calls

mod encoding;
mod error;
pub mod metrics;
pub mod recording;
mod traits;
mod types;
pub mod utils;

pub use encoding::win_ansi_byte;
pub use error::RenderError;
pub use recording::{DrawCommand, RecordingCanvas};
pub use traits::Canvas;
pub use types::{FontWeight, ImageHandle, TextStyle};
