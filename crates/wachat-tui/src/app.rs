//! Application state and update logic for the wachat TUI.

use ratatui::layout::Rect;
use tracing::debug;
use wachat_engine::{ChatError, Config, Conversation, Submission};

use crate::conversation::{ChatView, ScrollState, SCROLL_SPEED};
use crate::event::Action;
use crate::layout::ChatLayout;
use crate::theme::Theme;
use crate::widgets::TextInputState;

/// Main application state.
pub struct App {
    /// Messages, draft and request state.
    pub conversation: Conversation,
    /// Draft editor behind the input bar.
    pub input: TextInputState,
    pub theme: Theme,
    /// Title shown in the header.
    pub assistant_name: String,
    /// Service base URL shown in the status bar.
    pub server: String,
    /// Transcript scroll position.
    pub scroll: ScrollState,
    pub show_help: bool,
    pub should_quit: bool,
    /// Tick counter for animations.
    pub tick: u64,
    /// Message count when the transcript last followed new messages.
    seen_messages: usize,
    /// Transcript rows visible at the last draw, used for paging.
    page_rows: usize,
}

impl App {
    /// Create the application state from resolved configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            conversation: Conversation::new(),
            input: TextInputState::new(),
            theme: Theme::from_name(config.theme),
            assistant_name: config.assistant_name.clone(),
            server: config.api_url.trim_end_matches('/').to_string(),
            scroll: ScrollState::new(),
            show_help: false,
            should_quit: false,
            tick: 0,
            seen_messages: 0,
            page_rows: 1,
        }
    }

    /// Whether pressing Enter would send the draft.
    pub fn can_submit(&self) -> bool {
        self.conversation.can_submit()
    }

    /// Handle an action.
    ///
    /// Returns the request to issue when the action started a submission.
    pub fn handle_action(&mut self, action: Action) -> Option<Submission> {
        if self.show_help {
            // Any key closes help; Ctrl+C still quits.
            match action {
                Action::None => {}
                Action::Quit => self.should_quit = true,
                _ => self.show_help = false,
            }
            return None;
        }

        match action {
            Action::Quit | Action::Back => self.should_quit = true,
            Action::Help => self.show_help = true,
            Action::Submit => return self.submit(),
            Action::Insert(c) => self.input.insert(c),
            Action::Newline => self.input.insert('\n'),
            Action::Backspace => self.input.backspace(),
            Action::Delete => self.input.delete(),
            Action::Left => self.input.move_left(),
            Action::Right => self.input.move_right(),
            Action::Home => self.input.move_home(),
            Action::End => self.input.move_end(),
            Action::HistoryPrev => {
                if self.input.is_empty() || self.input.is_browsing_history() {
                    self.input.history_prev();
                } else {
                    self.scroll.scroll_up(1);
                }
            }
            Action::HistoryNext => {
                if self.input.is_empty() || self.input.is_browsing_history() {
                    self.input.history_next();
                } else {
                    self.scroll.scroll_down(1);
                }
            }
            Action::ScrollUp => self.scroll.scroll_up(SCROLL_SPEED),
            Action::ScrollDown => self.scroll.scroll_down(SCROLL_SPEED),
            Action::PageUp => self.scroll.page_up(self.page_rows),
            Action::PageDown => self.scroll.page_down(self.page_rows),
            Action::ScrollBottom => self.scroll.jump_to_end(),
            Action::None => {}
        }

        self.conversation.set_draft(self.input.content());
        None
    }

    /// Start a submission from the current draft.
    fn submit(&mut self) -> Option<Submission> {
        self.conversation.set_draft(self.input.content());
        let submission = self.conversation.begin_submit()?;
        self.input.submit();
        self.follow_messages();
        debug!(id = %submission.message_id, "submitted draft");
        Some(submission)
    }

    /// Apply the outcome of the in-flight request.
    pub fn apply_result(&mut self, result: Result<String, ChatError>) {
        self.conversation.settle(result);
        self.follow_messages();
    }

    /// Pin the transcript to the bottom when messages were added.
    fn follow_messages(&mut self) {
        let count = self.conversation.messages().len();
        if count != self.seen_messages {
            self.seen_messages = count;
            self.scroll.jump_to_end();
        }
    }

    /// Update tick counter (called on each tick event).
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Record the terminal size before a draw: clamp scrolling and remember
    /// the page size.
    pub fn sync_viewport(&mut self, area: Rect) {
        let messages = ChatLayout::new(area).messages;
        let max_scroll = ChatView::new(&self.conversation, &self.theme).max_scroll(messages);
        self.scroll.clamp(max_scroll);
        self.page_rows = usize::from(messages.height).max(1);
    }

    /// Tear down: results that arrive later are discarded.
    pub fn shutdown(&mut self) {
        self.conversation.close();
    }
}
