//! Chat transcript widget.
//!
//! Draws every message as a bubble on the wallpaper, with a one-row gap
//! between bubbles, and the typing indicator while a reply is pending. Rows
//! are anchored to the bottom once the transcript outgrows the area.

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use wachat_engine::Conversation;

use super::bubble::{message_rows, typing_rows, BubbleRow};
use crate::theme::Theme;

const EMPTY_HINT: &str = "Say hello to start the conversation";

/// Transcript view over a [`Conversation`].
pub struct ChatView<'a> {
    conversation: &'a Conversation,
    theme: &'a Theme,
    tick: u64,
    scroll: usize,
}

impl<'a> ChatView<'a> {
    pub fn new(conversation: &'a Conversation, theme: &'a Theme) -> Self {
        Self {
            conversation,
            theme,
            tick: 0,
            scroll: 0,
        }
    }

    /// Animation frame for the typing indicator.
    #[must_use]
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    /// Rows scrolled back from the bottom.
    #[must_use]
    pub fn scroll(mut self, rows: usize) -> Self {
        self.scroll = rows;
        self
    }

    /// Total transcript height in rows for an area `width` cells wide.
    pub fn content_height(&self, width: u16) -> usize {
        self.rows(inner_width(width)).len()
    }

    /// Largest useful scroll offset for `area`.
    pub fn max_scroll(&self, area: Rect) -> usize {
        self.content_height(area.width)
            .saturating_sub(usize::from(area.height))
    }

    /// Lay out the transcript; `None` marks a spacer row.
    fn rows(&self, width: u16) -> Vec<Option<BubbleRow>> {
        let mut bubbles: Vec<Vec<BubbleRow>> = self
            .conversation
            .messages()
            .iter()
            .map(|message| message_rows(message, width, self.theme))
            .collect();
        if self.conversation.is_pending() {
            bubbles.push(typing_rows(self.tick, self.theme));
        }

        let mut rows = Vec::new();
        for bubble in bubbles {
            if !rows.is_empty() {
                rows.push(None);
            }
            rows.extend(bubble.into_iter().map(Some));
        }
        rows
    }
}

fn inner_width(width: u16) -> u16 {
    width.saturating_sub(2)
}

impl Widget for ChatView<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.wallpaper));
        let inner = area.inner(Margin {
            horizontal: 1,
            vertical: 0,
        });
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.conversation.messages().is_empty() && !self.conversation.is_pending() {
            let hint = Line::from(Span::styled(
                EMPTY_HINT,
                Style::default().fg(self.theme.muted),
            ))
            .centered();
            Paragraph::new(hint).render(
                Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1),
                buf,
            );
            return;
        }

        let rows = self.rows(inner.width);
        let visible = usize::from(inner.height);
        let max_scroll = rows.len().saturating_sub(visible);
        let scroll = self.scroll.min(max_scroll);
        let start = rows.len().saturating_sub(visible + scroll);

        for (i, row) in rows[start..].iter().take(visible).enumerate() {
            let Some(row) = row else { continue };
            let x = inner.x + row.offset.min(inner.width);
            let y = inner.y + i as u16;
            let room = inner.width.saturating_sub(row.offset);
            buf.set_line(x, y, &row.line, room);
        }
    }
}
