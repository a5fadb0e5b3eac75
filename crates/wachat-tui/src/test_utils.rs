//! Test utilities for wachat-tui rendering tests.
//!
//! Helpers for creating test terminals, drawing the app, and converting
//! buffers to strings for assertions and inline snapshots.

use crate::app::App;
use crate::view;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use wachat_engine::Config;

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test terminal with custom dimensions.
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Create a test app with default configuration.
pub fn create_test_app() -> App {
    App::new(&Config::default())
}

/// Draw the app at the default size and return the screen as a string.
pub fn render_app_to_string(app: &mut App) -> String {
    render_app_to_string_sized(app, TEST_WIDTH, TEST_HEIGHT)
}

/// Draw the app at a custom size and return the screen as a string.
pub fn render_app_to_string_sized(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal
        .draw(|frame| view::draw(frame, app))
        .expect("Failed to draw");
    buffer_to_string(terminal.backend().buffer())
}

/// Convert a buffer to a string representation for snapshot testing.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    // Remove trailing newline
    if result.ends_with('\n') {
        result.pop();
    }

    result
}
