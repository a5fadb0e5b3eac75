//! WhatsApp-style color palettes for the TUI.

use ratatui::style::Color;
use wachat_engine::ThemeName;

/// Theme color palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Header
    pub header_bg: Color,
    pub header_text: Color,
    pub header_subtext: Color,
    pub avatar: Color,

    // Chat area
    pub wallpaper: Color,
    pub muted: Color,

    // Bubbles
    pub user_bubble: Color,
    pub user_text: Color,
    pub bubble: Color,
    pub bubble_text: Color,
    pub error_bubble: Color,
    pub error_text: Color,
    pub typing_dot: Color,

    // Input
    pub input_bg: Color,
    pub input_text: Color,
    pub placeholder: Color,
    pub send: Color,
    pub send_disabled: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,

    // Status bar
    pub status_bg: Color,
    pub status_text: Color,
    pub key_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Theme for a configured name.
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => Self::light(),
            ThemeName::Dark => Self::dark(),
        }
    }

    /// Classic WhatsApp Web look (default).
    pub fn light() -> Self {
        Self {
            // Header
            header_bg: Color::Rgb(18, 140, 126),       // #128c7e
            header_text: Color::Rgb(255, 255, 255),    // #ffffff
            header_subtext: Color::Rgb(229, 231, 235), // #e5e7eb
            avatar: Color::Rgb(37, 211, 102),          // #25d366

            // Chat area
            wallpaper: Color::Rgb(229, 221, 213), // #e5ddd5
            muted: Color::Rgb(107, 114, 128),     // #6b7280

            // Bubbles
            user_bubble: Color::Rgb(37, 211, 102),   // #25d366
            user_text: Color::Rgb(255, 255, 255),    // #ffffff
            bubble: Color::Rgb(255, 255, 255),       // #ffffff
            bubble_text: Color::Rgb(31, 41, 55),     // #1f2937
            error_bubble: Color::Rgb(254, 226, 226), // #fee2e2
            error_text: Color::Rgb(153, 27, 27),     // #991b1b
            typing_dot: Color::Rgb(156, 163, 175),   // #9ca3af

            // Input
            input_bg: Color::Rgb(243, 244, 246),      // #f3f4f6
            input_text: Color::Rgb(55, 65, 81),       // #374151
            placeholder: Color::Rgb(107, 114, 128),   // #6b7280
            send: Color::Rgb(37, 211, 102),           // #25d366
            send_disabled: Color::Rgb(187, 247, 208), // #bbf7d0

            // Borders
            border: Color::Rgb(229, 231, 235),        // #e5e7eb
            border_focused: Color::Rgb(18, 140, 126), // #128c7e

            // Status bar
            status_bg: Color::Rgb(7, 94, 84),     // #075e54
            status_text: Color::Rgb(255, 255, 255), // #ffffff
            key_bg: Color::Rgb(18, 140, 126),     // #128c7e
        }
    }

    /// WhatsApp dark mode.
    pub fn dark() -> Self {
        Self {
            // Header
            header_bg: Color::Rgb(32, 44, 51),         // #202c33
            header_text: Color::Rgb(233, 237, 239),    // #e9edef
            header_subtext: Color::Rgb(134, 150, 160), // #8696a0
            avatar: Color::Rgb(0, 168, 132),           // #00a884

            // Chat area
            wallpaper: Color::Rgb(11, 20, 26),     // #0b141a
            muted: Color::Rgb(134, 150, 160),      // #8696a0

            // Bubbles
            user_bubble: Color::Rgb(0, 92, 75),    // #005c4b
            user_text: Color::Rgb(233, 237, 239),  // #e9edef
            bubble: Color::Rgb(32, 44, 51),        // #202c33
            bubble_text: Color::Rgb(233, 237, 239), // #e9edef
            error_bubble: Color::Rgb(74, 28, 28),  // #4a1c1c
            error_text: Color::Rgb(248, 180, 180), // #f8b4b4
            typing_dot: Color::Rgb(134, 150, 160), // #8696a0

            // Input
            input_bg: Color::Rgb(42, 57, 66),     // #2a3942
            input_text: Color::Rgb(209, 215, 219), // #d1d7db
            placeholder: Color::Rgb(134, 150, 160), // #8696a0
            send: Color::Rgb(0, 168, 132),        // #00a884
            send_disabled: Color::Rgb(55, 75, 85), // #374b55

            // Borders
            border: Color::Rgb(42, 57, 66),          // #2a3942
            border_focused: Color::Rgb(0, 168, 132), // #00a884

            // Status bar
            status_bg: Color::Rgb(17, 27, 33),      // #111b21
            status_text: Color::Rgb(209, 215, 219), // #d1d7db
            key_bg: Color::Rgb(0, 92, 75),          // #005c4b
        }
    }
}
