use crate::app::action::Action;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// The one pending "focus the query field" callback scheduled on open.
///
/// Scheduling replaces any pending callback. Closing the palette or dropping
/// the timer cancels it so it never lands on a detached surface.
#[derive(Debug, Default)]
pub struct FocusTimer {
    handle: Option<AbortHandle>,
}

impl FocusTimer {
    pub fn schedule(&mut self, delay: Duration, tx: mpsc::Sender<Action>) {
        self.cancel();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Action::FocusQuery).await;
        });
        self.handle = Some(task.abort_handle());
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for FocusTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
