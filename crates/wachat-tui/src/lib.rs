//! wachat-tui: Terminal conversation view for wachat
//!
//! This crate provides the TUI layer for wachat, including:
//! - The chat screen (header, message bubbles, input bar, status bar)
//! - Key and mouse handling
//! - The event loop that runs chat requests without blocking input

mod app;
pub mod conversation;
mod event;
pub mod layout;
pub mod text;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
mod view;
pub mod widgets;

pub use app::App;
pub use event::{key_to_action, mouse_to_action, Action, Event, EventHandler};
pub use wachat_engine;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::stdout;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info};
use wachat_engine::{ChatClient, ChatError, Config, HttpChatClient};

/// Outcome of one chat request.
type Reply = Result<String, ChatError>;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let client = HttpChatClient::from_config(config)?;
    info!(endpoint = client.endpoint(), "starting chat view");
    let client: Arc<dyn ChatClient> = Arc::new(client);

    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    // 4 Hz tick drives the typing indicator
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events, client).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut EventHandler,
    client: Arc<dyn ChatClient>,
) -> Result<(), Box<dyn std::error::Error>> {
    // At most one request is in flight; the conversation refuses to start another.
    let mut in_flight: Option<JoinHandle<Reply>> = None;

    loop {
        terminal.draw(|frame| view::draw(frame, app))?;

        tokio::select! {
            biased;

            joined = settled(&mut in_flight) => {
                in_flight = None;
                let result = joined.unwrap_or_else(|e| Err(ChatError::Other(e.to_string())));
                app.apply_result(result);
            }

            event = events.next() => {
                let Some(event) = event else { break };
                let submission = match event {
                    Event::Key(key) => {
                        app.handle_action(key_to_action(key, app.input.is_empty()))
                    }
                    Event::Mouse(mouse) => app.handle_action(mouse_to_action(mouse)),
                    Event::Tick => {
                        app.on_tick();
                        None
                    }
                    // Terminal will handle resize automatically
                    Event::Resize(_, _) => None,
                };

                if let Some(submission) = submission {
                    let client = Arc::clone(&client);
                    in_flight = Some(tokio::spawn(async move {
                        client.complete(&submission.content).await
                    }));
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    app.shutdown();
    if let Some(handle) = in_flight.take() {
        debug!("abandoning in-flight request");
        handle.abort();
    }

    Ok(())
}

/// Wait for the in-flight request, or forever if there is none.
async fn settled<T>(handle: &mut Option<JoinHandle<T>>) -> Result<T, JoinError> {
    match handle {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    }
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
