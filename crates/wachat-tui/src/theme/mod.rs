//! Theme components for the TUI.
//!
//! [`Theme`] holds the light and dark WhatsApp palettes.

mod colors;

pub use colors::Theme;
