use crossterm::event::Event;
use tokio::sync::mpsc;

/// Document-wide input stream the palette listens to while attached.
///
/// Each call to `subscribe` registers a new listener. Dropping the returned
/// receiver unregisters it.
#[cfg_attr(test, mockall::automock)]
pub trait EventSource: Send + Sync {
    fn subscribe(&self) -> mpsc::Receiver<std::io::Result<Event>>;
}
