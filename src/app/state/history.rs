use crate::domain::models::HistoryEntry;
use ratatui::widgets::ListState;

/// Oldest entries are dropped past this many.
pub const MAX_HISTORY: usize = 200;

/// Commands the host has run, newest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryState {
    pub entries: Vec<HistoryEntry>,
    pub list_state: ListState,
}

impl HistoryState {
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY);
        self.list_state.select(Some(0));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.list_state.select(None);
    }

    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.entries.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn select_prev(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let prev = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(prev));
    }
}
