//! Message bubble layout.
//!
//! A bubble is laid out as a list of rows, each a styled line plus the column
//! it starts at. User bubbles hug the right edge, everything else the left.
//!
//! ```text
//! ┆ Hello there        ┆
//! ┆              10:42 ┆
//! ```

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use wachat_engine::{Message, Role};

use crate::text::{pad_to_width, visual_width, wrap_text};
use crate::theme::Theme;

/// Smallest bubble width worth wrapping into, in cells.
const MIN_BUBBLE_WIDTH: usize = 12;

/// Horizontal padding on each side of the bubble text.
const PADDING: usize = 1;

/// One rendered row of a bubble.
#[derive(Debug, Clone)]
pub struct BubbleRow {
    /// Column offset from the left edge of the chat area.
    pub offset: u16,
    pub line: Line<'static>,
}

/// Widest a bubble may grow in a chat area of `width` cells (70%).
pub fn max_bubble_width(width: u16) -> usize {
    let width = usize::from(width);
    (width * 7 / 10).max(MIN_BUBBLE_WIDTH).min(width)
}

/// Lay out a message as a bubble.
pub fn message_rows(message: &Message, width: u16, theme: &Theme) -> Vec<BubbleRow> {
    let (bg, fg) = if message.is_error() {
        (theme.error_bubble, theme.error_text)
    } else if message.role() == Role::User {
        (theme.user_bubble, theme.user_text)
    } else {
        (theme.bubble, theme.bubble_text)
    };
    let style = Style::default().bg(bg).fg(fg);

    let text_width = max_bubble_width(width).saturating_sub(PADDING * 2);
    let lines = wrap_text(message.content(), text_width);
    let time = message.time_label();
    let inner = lines
        .iter()
        .map(|l| visual_width(l))
        .chain(std::iter::once(visual_width(&time)))
        .max()
        .unwrap_or(0);

    let pad = " ".repeat(PADDING);
    let mut rows: Vec<Line<'static>> = lines
        .iter()
        .map(|l| {
            Line::from(vec![
                Span::styled(pad.clone(), style),
                Span::styled(pad_to_width(l, inner), style),
                Span::styled(pad.clone(), style),
            ])
        })
        .collect();

    let time_style = style.add_modifier(Modifier::DIM);
    rows.push(Line::from(vec![
        Span::styled(pad.clone(), style),
        Span::styled(format!("{time:>inner$}"), time_style),
        Span::styled(pad, style),
    ]));

    let bubble_width = inner + PADDING * 2;
    let offset = match message.role() {
        Role::User => u16::try_from(usize::from(width).saturating_sub(bubble_width)).unwrap_or(0),
        Role::Assistant => 0,
    };

    rows.into_iter()
        .map(|line| BubbleRow { offset, line })
        .collect()
}

/// Lay out the transient typing indicator, animated by `tick`.
pub fn typing_rows(tick: u64, theme: &Theme) -> Vec<BubbleRow> {
    let style = Style::default().bg(theme.bubble).fg(theme.typing_dot);
    let lit = usize::try_from(tick % 3).unwrap_or(0);
    let dots: Vec<&str> = (0..3).map(|i| if i == lit { "●" } else { "·" }).collect();

    let pad = " ".repeat(PADDING);
    vec![BubbleRow {
        offset: 0,
        line: Line::from(vec![
            Span::styled(pad.clone(), style),
            Span::styled(dots.join(" "), style),
            Span::styled(pad, style),
        ]),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn row_text(row: &BubbleRow) -> String {
        row.line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn at_ten_past_nine(message: Message) -> Message {
        let ts = Local
            .with_ymd_and_hms(2024, 5, 1, 9, 10, 0)
            .single()
            .unwrap();
        message.at(ts)
    }

    #[test]
    fn test_max_bubble_width() {
        assert_eq!(max_bubble_width(100), 70);
        assert_eq!(max_bubble_width(14), 12);
        assert_eq!(max_bubble_width(8), 8);
    }

    #[test]
    fn test_user_bubble_hugs_right_edge() {
        let theme = Theme::default();
        let msg = at_ten_past_nine(Message::user("Hello"));
        let rows = message_rows(&msg, 40, &theme);

        assert_eq!(rows.len(), 2);
        assert_eq!(row_text(&rows[0]), " Hello ");
        assert_eq!(row_text(&rows[1]), " 09:10 ");
        // 7 cells wide against a 40 cell area.
        assert!(rows.iter().all(|r| r.offset == 33));
    }

    #[test]
    fn test_assistant_bubble_starts_left() {
        let theme = Theme::default();
        let msg = at_ten_past_nine(Message::assistant("Hi! How can I help?"));
        let rows = message_rows(&msg, 40, &theme);
        assert!(rows.iter().all(|r| r.offset == 0));
        assert_eq!(row_text(&rows[1]), format!(" {:>19} ", "09:10"));
    }

    #[test]
    fn test_long_message_wraps_within_limit() {
        let theme = Theme::default();
        let msg = Message::assistant("word ".repeat(40));
        let rows = message_rows(&msg, 40, &theme);

        assert!(rows.len() > 2);
        for row in &rows {
            assert!(visual_width(&row_text(row)) <= max_bubble_width(40));
        }
    }

    #[test]
    fn test_newlines_preserved() {
        let theme = Theme::default();
        let msg = Message::user("one\ntwo");
        let rows = message_rows(&msg, 40, &theme);
        assert_eq!(rows.len(), 3);
        assert_eq!(row_text(&rows[0]).trim(), "one");
        assert_eq!(row_text(&rows[1]).trim(), "two");
    }

    #[test]
    fn test_error_style_is_content_based() {
        let theme = Theme::default();
        let msg = Message::error("rate limited");
        let rows = message_rows(&msg, 40, &theme);
        assert_eq!(rows[0].line.spans[1].style.bg, Some(theme.error_bubble));
        assert_eq!(rows[0].line.spans[1].style.fg, Some(theme.error_text));

        let user = Message::user("Error: pasted log line");
        let rows = message_rows(&user, 40, &theme);
        assert_eq!(rows[0].line.spans[1].style.bg, Some(theme.error_bubble));
        assert!(rows[0].offset > 0);
    }

    #[test]
    fn test_typing_indicator_animates() {
        let theme = Theme::default();
        let frames: Vec<String> = (0..4)
            .map(|t| row_text(&typing_rows(t, &theme)[0]).trim().to_string())
            .collect();
        insta::assert_snapshot!(frames.join("\n"), @r"
        ● · ·
        · ● ·
        · · ●
        ● · ·
        ");
    }
}
