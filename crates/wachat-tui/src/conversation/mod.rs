//! Chat transcript module.
//!
//! - [`ChatView`] - Bubbles on the wallpaper, bottom anchored
//! - [`ScrollState`] - Scroll-back offset
//! - [`message_rows`] / [`typing_rows`] - Bubble layout

mod bubble;
mod scroll;
mod widget;

pub use bubble::{max_bubble_width, message_rows, typing_rows, BubbleRow};
pub use scroll::{ScrollState, SCROLL_SPEED};
pub use widget::ChatView;
