//! Reusable widgets for the wachat TUI.
//!
//! - [`Header`] - Assistant name and presence line
//! - [`InputBar`] - Draft editor with send glyph
//! - [`StatusBar`] - Bottom key hints
//! - [`TextInputState`] - Draft editing state behind the input bar

pub mod header;
pub mod input_bar;
pub mod status_bar;
pub mod text_input;

pub use header::{Header, HEADER_HEIGHT};
pub use input_bar::{InputBar, INPUT_HEIGHT, PLACEHOLDER};
pub use status_bar::{KeyHint, StatusBar};
pub use text_input::TextInputState;
