//! PDF canvas backend using lopdf.
//!
//! This crate provides a `Canvas` implementation that accumulates drawing
//! operations into a single content stream and serializes the page with a
//! deterministic, in-memory PDF writer.

mod canvas;
mod writer;
mod xobject;

pub use canvas::{DocumentInfo, LopdfCanvas};
pub use writer::StreamingPdfWriter;
pub use xobject::{ImageXObject, build_image_xobject};
