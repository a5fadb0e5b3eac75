//! Text rendering utilities.
//!
//! - [`wrap_text`] - Wrap message text, keeping explicit line breaks
//! - [`visual_width`], [`truncate_to_width`], [`pad_to_width`] - Cell-width helpers

mod width;
mod wrap;

pub use width::{pad_to_width, truncate_to_width, visual_width};
pub use wrap::wrap_text;
