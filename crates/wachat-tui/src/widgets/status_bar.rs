//! Status bar widget.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A key hint for the status bar.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Status bar displayed at the bottom of the screen.
#[derive(Debug, Clone)]
pub struct StatusBar<'a> {
    hints: Vec<KeyHint>,
    right_text: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar.
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            hints: Vec::new(),
            right_text: None,
            theme,
        }
    }

    /// Add key hints.
    #[must_use]
    pub fn hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }

    /// Set right-aligned text.
    #[must_use]
    pub fn right(mut self, text: &'a str) -> Self {
        self.right_text = Some(text);
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let bar = Style::default()
            .fg(self.theme.status_text)
            .bg(self.theme.status_bg);
        buf.set_style(Rect::new(area.x, area.y, area.width, 1), bar);
        for x in area.x..area.x.saturating_add(area.width) {
            buf[(x, area.y)].set_char(' ');
        }

        let key = bar.bg(self.theme.key_bg).add_modifier(Modifier::BOLD);
        let mut spans = Vec::new();
        for hint in &self.hints {
            spans.push(Span::styled(format!(" {} ", hint.key), key));
            spans.push(Span::styled(format!(" {} ", hint.label), bar));
        }
        let line = Line::from(spans);
        let hints_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
        buf.set_line(area.x, area.y, &line, area.width);

        if let Some(text) = self.right_text {
            let text_len = u16::try_from(crate::text::visual_width(text)).unwrap_or(u16::MAX);
            // Dropped rather than drawn over the hints.
            if hints_width.saturating_add(text_len) < area.width {
                let x = area.x + area.width - text_len - 1;
                buf.set_string(x, area.y, text, bar);
            }
        }
    }
}
