//! Full-width input bar widget.
//!
//! Always visible below the chat. Supports multi-line drafts (Ctrl+J inserts a
//! newline) and shows a send glyph that greys out while sending is disabled.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::text::visual_width;
use crate::theme::Theme;
use crate::widgets::TextInputState;

/// Fixed height of the input bar including borders.
pub const INPUT_HEIGHT: u16 = 3;

/// Placeholder shown for an empty draft.
pub const PLACEHOLDER: &str = "Type a message...";

const SEND_GLYPH: &str = " ➤ ";
const SEND_WIDTH: u16 = 3;
const PREFIX_WIDTH: usize = 2;

/// Input bar for composing the draft.
pub struct InputBar<'a> {
    input: &'a TextInputState,
    theme: &'a Theme,
    disabled: bool,
    send_enabled: bool,
}

impl<'a> InputBar<'a> {
    /// Create a new input bar widget.
    pub fn new(input: &'a TextInputState, theme: &'a Theme) -> Self {
        Self {
            input,
            theme,
            disabled: false,
            send_enabled: false,
        }
    }

    /// Render the input as disabled (a request is pending).
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether pressing Enter would send.
    #[must_use]
    pub fn send_enabled(mut self, enabled: bool) -> Self {
        self.send_enabled = enabled;
        self
    }

    /// Build the display lines plus the cursor's line index and display column.
    fn build_input_lines(&self) -> (Vec<Line<'static>>, usize, usize) {
        let text_style = if self.disabled {
            Style::default().fg(self.theme.placeholder)
        } else {
            Style::default().fg(self.theme.input_text)
        };

        if self.input.is_empty() {
            let mut spans = vec![Span::styled("> ", text_style)];
            if !self.disabled {
                spans.push(Span::styled("█", text_style));
            }
            spans.push(Span::styled(
                PLACEHOLDER,
                Style::default().fg(self.theme.placeholder),
            ));
            return (vec![Line::from(spans)], 0, PREFIX_WIDTH);
        }

        let content = self.input.content();
        let text_lines: Vec<&str> = content.split('\n').collect();

        // Locate the cursor as (line, column) in characters.
        let mut remaining = self.input.cursor();
        let mut cursor_line = text_lines.len() - 1;
        let mut cursor_col = text_lines.last().map_or(0, |l| l.chars().count());
        for (idx, line) in text_lines.iter().enumerate() {
            let len = line.chars().count();
            if remaining <= len {
                cursor_line = idx;
                cursor_col = remaining;
                break;
            }
            remaining -= len + 1;
        }

        let before_cursor: String = text_lines[cursor_line].chars().take(cursor_col).collect();
        let cursor_x = PREFIX_WIDTH + visual_width(&before_cursor);

        let mut lines = Vec::with_capacity(text_lines.len());
        for (idx, line_text) in text_lines.iter().enumerate() {
            let prefix = if idx == 0 { "> " } else { "  " };
            let mut spans = vec![Span::styled(prefix, text_style)];

            if !self.disabled && idx == cursor_line {
                let chars: Vec<char> = line_text.chars().collect();
                let before: String = chars[..cursor_col].iter().collect();
                let after: String = chars[cursor_col..].iter().collect();
                spans.push(Span::styled(before, text_style));
                spans.push(Span::styled("█", text_style));
                spans.push(Span::styled(after, text_style));
            } else {
                spans.push(Span::styled((*line_text).to_string(), text_style));
            }
            lines.push(Line::from(spans));
        }

        (lines, cursor_line, cursor_x)
    }
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.disabled {
            Style::default().fg(self.theme.border)
        } else {
            Style::default().fg(self.theme.border_focused)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(self.theme.input_bg));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let text_width = inner.width.saturating_sub(SEND_WIDTH);
        let text_area = Rect::new(inner.x, inner.y, text_width, inner.height);

        let (lines, cursor_line, cursor_x) = self.build_input_lines();
        let visible = usize::from(inner.height);
        let rows = cursor_line.saturating_sub(visible.saturating_sub(1));
        // Keep the cursor cell inside the text area on long lines.
        let cols = (cursor_x + 1).saturating_sub(usize::from(text_width));

        Paragraph::new(lines)
            .scroll((
                u16::try_from(rows).unwrap_or(u16::MAX),
                u16::try_from(cols).unwrap_or(u16::MAX),
            ))
            .render(text_area, buf);

        if inner.width > SEND_WIDTH {
            let send_style = if self.send_enabled {
                Style::default()
                    .fg(self.theme.send)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.send_disabled)
            };
            let x = inner.x + inner.width - SEND_WIDTH;
            let y = inner.y + inner.height - 1;
            buf.set_string(x, y, SEND_GLYPH, send_style);
        }
    }
}
