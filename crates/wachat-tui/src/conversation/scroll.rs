//! Transcript scroll state.
//!
//! The offset counts rows back from the bottom of the transcript. Offset `0`
//! shows the newest message and counts as following.

/// Rows scrolled per mouse wheel tick.
pub const SCROLL_SPEED: usize = 3;

/// Scroll position of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    /// Rows scrolled back from the bottom.
    offset: usize,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    /// Create a scroll state pinned to the bottom.
    pub fn new() -> Self {
        Self { offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Pinned to the newest message.
    pub fn is_following(&self) -> bool {
        self.offset == 0
    }

    /// Scroll towards older messages.
    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_add(amount);
    }

    /// Scroll towards newer messages.
    pub fn scroll_down(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
    }

    /// Move a page up.
    pub fn page_up(&mut self, visible_rows: usize) {
        self.scroll_up(visible_rows.saturating_sub(1).max(1));
    }

    /// Move a page down.
    pub fn page_down(&mut self, visible_rows: usize) {
        self.scroll_down(visible_rows.saturating_sub(1).max(1));
    }

    /// Jump to the newest message.
    pub fn jump_to_end(&mut self) {
        self.offset = 0;
    }

    /// Clamp the offset to the scrollable range.
    pub fn clamp(&mut self, max_offset: usize) {
        self.offset = self.offset.min(max_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_following() {
        let state = ScrollState::new();
        assert_eq!(state.offset(), 0);
        assert!(state.is_following());
    }

    #[test]
    fn test_scroll_up_disables_follow() {
        let mut state = ScrollState::new();
        state.scroll_up(SCROLL_SPEED);
        assert_eq!(state.offset(), 3);
        assert!(!state.is_following());

        state.scroll_down(1);
        assert_eq!(state.offset(), 2);
        assert!(!state.is_following());

        state.scroll_down(10);
        assert_eq!(state.offset(), 0);
        assert!(state.is_following());
    }

    #[test]
    fn test_follow_is_bottom_offset() {
        let mut state = ScrollState::new();
        state.scroll_up(0);
        assert!(state.is_following());

        state.scroll_up(5);
        state.clamp(2);
        assert!(!state.is_following());
        state.page_down(3);
        assert_eq!(state.offset(), 0);
        assert!(state.is_following());
    }

    #[test]
    fn test_paging() {
        let mut state = ScrollState::new();
        state.page_up(10);
        assert_eq!(state.offset(), 9);
        state.page_down(4);
        assert_eq!(state.offset(), 6);
        state.page_up(0);
        assert_eq!(state.offset(), 7);
    }

    #[test]
    fn test_jump_to_end() {
        let mut state = ScrollState::new();
        state.scroll_up(20);
        state.jump_to_end();
        assert_eq!(state, ScrollState::new());
    }

    #[test]
    fn test_clamp() {
        let mut state = ScrollState::new();
        state.scroll_up(50);
        state.clamp(12);
        assert_eq!(state.offset(), 12);
        assert!(!state.is_following());

        // Content fits on screen: nothing to scroll.
        state.clamp(0);
        assert_eq!(state.offset(), 0);
        assert!(state.is_following());
    }
}
