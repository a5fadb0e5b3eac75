//! Frame rendering for the chat screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
    Frame,
};

use crate::app::App;
use crate::conversation::ChatView;
use crate::layout::{centered_fixed, fits, ChatLayout, MIN_HEIGHT, MIN_WIDTH};
use crate::theme::Theme;
use crate::widgets::{Header, InputBar, KeyHint, StatusBar};

const HINTS: [KeyHint; 4] = [
    KeyHint::new("Enter", "Send"),
    KeyHint::new("PgUp/PgDn", "Scroll"),
    KeyHint::new("?", "Help"),
    KeyHint::new("Esc", "Quit"),
];

const HELP: &[(&str, &str)] = &[
    ("Enter", "Send message"),
    ("Ctrl+J", "New line"),
    ("Up/Down", "Previous messages (empty draft)"),
    ("PgUp/PgDn", "Scroll conversation"),
    ("Ctrl+End", "Jump to latest"),
    ("? / F1", "Toggle this help"),
    ("Esc", "Close help / quit"),
    ("Ctrl+C", "Quit"),
];

/// Draw the app into a terminal frame.
pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    app.sync_viewport(area);
    render(app, area, frame.buffer_mut());
}

/// Render the chat screen into a buffer.
pub fn render(app: &App, area: Rect, buf: &mut Buffer) {
    if !fits(area) {
        render_too_small(area, buf, &app.theme);
        return;
    }

    let layout = ChatLayout::new(area);
    let pending = app.conversation.is_pending();

    Header::new(&app.assistant_name, &app.theme)
        .typing(pending)
        .render(layout.header, buf);

    ChatView::new(&app.conversation, &app.theme)
        .tick(app.tick)
        .scroll(app.scroll.offset())
        .render(layout.messages, buf);

    InputBar::new(&app.input, &app.theme)
        .disabled(pending)
        .send_enabled(app.can_submit())
        .render(layout.input, buf);

    StatusBar::new(&app.theme)
        .hints(HINTS.to_vec())
        .right(&app.server)
        .render(layout.status, buf);

    if app.show_help {
        render_help_overlay(area, buf, &app.theme);
    }
}

fn render_too_small(area: Rect, buf: &mut Buffer, theme: &Theme) {
    let msg = format!("Terminal too small (min {MIN_WIDTH}x{MIN_HEIGHT})");
    Paragraph::new(msg)
        .style(Style::default().fg(theme.muted))
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

/// Render the key help overlay centered in `area`.
#[allow(clippy::cast_possible_truncation)]
fn render_help_overlay(area: Rect, buf: &mut Buffer, theme: &Theme) {
    let key_style = Style::default()
        .fg(theme.header_bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(theme.bubble_text);

    let mut lines: Vec<Line<'_>> = HELP
        .iter()
        .map(|(key, label)| {
            Line::from(vec![
                Span::styled(format!("  {key:<11}"), key_style),
                Span::styled(*label, text_style),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::styled(
        "  [Press any key to close]",
        Style::default().fg(theme.muted),
    ));

    let width = 50.min(area.width.saturating_sub(4));
    let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(key_style)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bubble));

    Paragraph::new(lines).block(block).render(overlay_area, buf);
}
