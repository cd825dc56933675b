//! Layout helpers for the membership application document.
//!
//! The document is laid out top to bottom with a single [`LayoutCursor`]; each
//! helper in [`blocks`] draws one kind of block through a
//! [`memberdoc_render_core::Canvas`] and moves the cursor down past it,
//! starting a new page when the block would reach into the footer reserve.

pub mod blocks;
pub mod config;
pub mod cursor;
mod error;
pub mod wrap;

pub use blocks::{
    RowLayout, SignatureLayout, draw_banner, draw_footer, draw_metadata, draw_row,
    draw_section_header, draw_signature_block, ensure_room, scaled_to_fit,
};
pub use config::LayoutConfig;
pub use cursor::LayoutCursor;
pub use error::LayoutError;
pub use wrap::wrap_fixed;
