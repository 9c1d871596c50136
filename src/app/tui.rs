//! Terminal management system
//!
//! Handles crossterm backend initialization and screen management, and
//! pumps keyboard events from a blocking reader into the async main loop.

use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::Duration,
};
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, warn};

/// How long the reader waits for input before checking the channel again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Input forwarded to the main loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Key(KeyEvent),
    Resize,
}

/// Terminal wrapper that manages crossterm backend and screen state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl Tui {
    /// Create a new TUI instance with crossterm backend
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            active: false,
        })
    }

    /// Enter raw mode and the alternate screen
    pub fn init(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.active = true;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Check if terminal meets minimum size requirements (60x20)
    pub fn is_size_adequate(&self) -> io::Result<bool> {
        let size = self.terminal.size()?;
        Ok(size.width >= 60 && size.height >= 20)
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}

/// Read terminal input on a blocking thread and forward it to `tx`.
///
/// The reader stops once the receiving side is dropped or reading fails.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<TuiEvent>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            let ready = match event::poll(POLL_INTERVAL) {
                Ok(ready) => ready,
                Err(e) => {
                    warn!(error = %e, "polling terminal events failed");
                    break;
                }
            };
            if !ready {
                continue;
            }

            let forwarded = match event::read() {
                // Windows reports releases too
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Some(TuiEvent::Key(key)),
                Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
                Ok(_) => None,
                Err(e) => {
                    warn!(error = %e, "reading terminal event failed");
                    break;
                }
            };

            if let Some(event) = forwarded {
                if tx.send(event).is_err() {
                    break;
                }
            }
        }
        debug!("event reader stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_reader_stops_when_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = spawn_event_reader(tx);
        drop(rx);
        let joined = tokio::time::timeout(Duration::from_secs(5), handle).await;
        assert!(joined.is_ok());
    }
}
