//! Screen layout for the chat view.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Header (2)                   │
//! ├──────────────────────────────┤
//! │ Messages (fills)             │
//! ├──────────────────────────────┤
//! │ Input (3)                    │
//! │ Status bar (1)               │
//! └──────────────────────────────┘
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::widgets::{HEADER_HEIGHT, INPUT_HEIGHT};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 30;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 10;

/// Regions of the chat screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLayout {
    pub header: Rect,
    pub messages: Rect,
    pub input: Rect,
    pub status: Rect,
}

impl ChatLayout {
    /// Split `area` into the chat regions.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            messages: chunks[1],
            input: chunks[2],
            status: chunks[3],
        }
    }
}

/// Whether `area` is large enough for the chat screen.
pub fn fits(area: Rect) -> bool {
    area.width >= MIN_WIDTH && area.height >= MIN_HEIGHT
}

/// Create a centered rect with fixed dimensions.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
