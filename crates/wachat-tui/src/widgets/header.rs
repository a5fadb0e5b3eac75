//! Conversation header: avatar, assistant name and presence line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::text::truncate_to_width;
use crate::theme::Theme;

/// Height of the header in rows.
pub const HEADER_HEIGHT: u16 = 2;

const AVATAR: &str = " 🤖 ";

/// Header bar shown above the chat.
///
/// ```text
///  🤖 AI Chat Assistant
///     Online
/// ```
pub struct Header<'a> {
    name: &'a str,
    typing: bool,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(name: &'a str, theme: &'a Theme) -> Self {
        Self {
            name,
            typing: false,
            theme,
        }
    }

    /// Show `typing...` instead of `Online`.
    #[must_use]
    pub fn typing(mut self, typing: bool) -> Self {
        self.typing = typing;
        self
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = Style::default().bg(self.theme.header_bg);
        let avatar_width = 4;
        let name = truncate_to_width(
            self.name,
            usize::from(area.width).saturating_sub(avatar_width + 1),
        );
        let presence = if self.typing { "typing..." } else { "Online" };

        let lines = vec![
            Line::from(vec![
                Span::styled(AVATAR, base.fg(self.theme.avatar)),
                Span::styled(
                    name,
                    base.fg(self.theme.header_text).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled(" ".repeat(avatar_width), base),
                Span::styled(presence, base.fg(self.theme.header_subtext)),
            ]),
        ];

        Paragraph::new(lines).style(base).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    fn render(typing: bool, width: u16) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, width, HEADER_HEIGHT);
        let mut buf = Buffer::empty(area);
        Header::new("AI Chat Assistant", &theme)
            .typing(typing)
            .render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_header_online() {
        let text = render(false, 40);
        assert!(text.contains("AI Chat Assistant"));
        assert!(text.lines().nth(1).unwrap().trim() == "Online");
    }

    #[test]
    fn test_header_typing() {
        let text = render(true, 40);
        assert!(text.contains("typing..."));
        assert!(!text.contains("Online"));
    }

    #[test]
    fn test_header_truncates_long_name() {
        let text = render(false, 12);
        assert!(text.lines().next().unwrap().ends_with("..."));
    }
}
