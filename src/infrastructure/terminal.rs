use crate::domain::event_source::EventSource;
use crossterm::event::{self, Event};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

// How long the reader waits for input before checking whether its listener
// is still attached.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Reads crossterm events from the real terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalEventSource;

impl EventSource for TerminalEventSource {
    fn subscribe(&self) -> mpsc::Receiver<std::io::Result<Event>> {
        let (event_tx, event_rx) = mpsc::channel(100);
        tokio::task::spawn_blocking(move || {
            debug!("terminal listener attached");
            loop {
                if event_tx.is_closed() {
                    break;
                }
                match event::poll(POLL_INTERVAL) {
                    Ok(false) => continue,
                    Ok(true) => {}
                    Err(e) => {
                        let _ = event_tx.blocking_send(Err(e));
                        break;
                    }
                }
                match event::read() {
                    Ok(evt) => {
                        if event_tx.blocking_send(Ok(evt)).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        let _ = event_tx.blocking_send(Err(e));
                        break;
                    }
                }
            }
            debug!("terminal listener detached");
        });
        event_rx
    }
}
