use crate::domain::cursor::SelectionCursor;
use crate::domain::filter::{empty_state_message, filter};
use crate::domain::grouping::{group, DisplayRow, GroupedCommands};
use crate::domain::models::CommandItem;

pub const DEFAULT_PLACEHOLDER: &str = "Type a command or search...";

/// State of one palette instance. `filtered` is derived from `items` and
/// `query` and is only ever rebuilt through `refilter`.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandPaletteState {
    pub is_open: bool,
    pub query: String,
    pub placeholder: String,
    pub query_focused: bool,
    pub cursor: SelectionCursor,
    // First visible display row. Only moves when the selection leaves the window.
    scroll: usize,
    items: Vec<CommandItem>,
    filtered: Vec<CommandItem>,
}

impl Default for CommandPaletteState {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_PLACEHOLDER)
    }
}

impl CommandPaletteState {
    #[must_use]
    pub fn new(items: Vec<CommandItem>, placeholder: impl Into<String>) -> Self {
        let filtered = items.clone();
        Self {
            is_open: false,
            query: String::new(),
            placeholder: placeholder.into(),
            query_focused: false,
            cursor: SelectionCursor::default(),
            scroll: 0,
            items,
            filtered,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[CommandItem] {
        &self.items
    }

    #[must_use]
    pub fn filtered(&self) -> &[CommandItem] {
        &self.filtered
    }

    #[must_use]
    pub fn grouped(&self) -> GroupedCommands<'_> {
        group(&self.filtered)
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.cursor.index()
    }

    #[must_use]
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Scrolls just enough to keep the selected row inside a window of
    /// `height` rows, showing its group header when scrolling up onto it.
    pub fn sync_scroll(&mut self, height: usize) {
        let scroll = {
            let grouped = self.grouped();
            let rows = grouped.rows();
            match grouped.row_of(self.selected_index()) {
                Some(row) => {
                    let top = match row.checked_sub(1).map(|r| &rows[r]) {
                        Some(DisplayRow::Header(_)) => row - 1,
                        _ => row,
                    };
                    keep_visible(self.scroll, top, row, height)
                }
                None => 0,
            }
        };
        self.scroll = scroll;
    }

    /// Replaces the query; the cursor goes back to the top.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_query(&mut self) {
        self.query.pop();
        self.refilter();
    }

    /// Swaps in a new item list. The old cursor position refers to a list
    /// that no longer exists, so it is reset like on a query change.
    pub fn replace_items(&mut self, items: Vec<CommandItem>) {
        self.items = items;
        self.refilter();
    }

    /// The command under the cursor, in display order.
    #[must_use]
    pub fn resolve(&self) -> Option<CommandItem> {
        let grouped = self.grouped();
        let order = grouped.flattened();
        self.cursor.resolve(&order).map(|item| (*item).clone())
    }

    #[must_use]
    pub fn empty_message(&self) -> Option<String> {
        self.filtered
            .is_empty()
            .then(|| empty_state_message(&self.query))
    }

    fn refilter(&mut self) {
        self.filtered = filter(&self.items, &self.query);
        self.cursor.reset();
        self.scroll = 0;
    }
}

/// New window offset so rows `top..=row` are visible, moving as little as
/// possible from `offset`.
#[must_use]
pub fn keep_visible(offset: usize, top: usize, row: usize, height: usize) -> usize {
    if height == 0 || top < offset {
        top
    } else if row >= offset + height {
        (row + 1).saturating_sub(height)
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<CommandItem> {
        vec![
            CommandItem::new("1", "Apple"),
            CommandItem::new("2", "Banana"),
            CommandItem::new("3", "apricot"),
            CommandItem::new("4", "Cherry"),
        ]
    }

    #[test]
    fn test_query_change_resets_cursor() {
        let mut state = CommandPaletteState::new(items(), "");
        state.cursor.set_from_hover(1);
        state.push_query('a');
        assert_eq!(state.selected_index(), 0);

        state.cursor.set_from_hover(2);
        state.pop_query();
        assert_eq!(state.selected_index(), 0);
        assert_eq!(state.filtered().len(), 4);
    }

    #[test]
    fn test_reset_even_when_index_still_valid() {
        let mut state = CommandPaletteState::new(items(), "");
        state.cursor.set_from_hover(1);
        // "a" still matches three items so index 1 would be valid.
        state.set_query("a");
        assert_eq!(state.filtered().len(), 3);
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn test_replace_items_refilters_against_current_query() {
        let mut state = CommandPaletteState::new(items(), "");
        state.set_query("ap");
        state.cursor.set_from_hover(1);

        state.replace_items(vec![
            CommandItem::new("9", "Grape"),
            CommandItem::new("10", "Melon"),
        ]);
        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.filtered()[0].label, "Grape");
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn test_resolve_on_empty_is_none() {
        let mut state = CommandPaletteState::new(items(), "");
        state.set_query("zzz_no_match");
        assert_eq!(state.resolve(), None);
        assert_eq!(
            state.empty_message().as_deref(),
            Some("No results found for \"zzz_no_match\"")
        );
    }

    #[test]
    fn test_keep_visible_only_moves_when_needed() {
        assert_eq!(keep_visible(0, 3, 3, 5), 0);
        assert_eq!(keep_visible(0, 5, 5, 5), 1);
        assert_eq!(keep_visible(10, 12, 12, 5), 10);
        assert_eq!(keep_visible(10, 8, 9, 5), 8);
        assert_eq!(keep_visible(10, 4, 4, 0), 4);
    }

    #[test]
    fn test_sync_scroll_is_sticky() {
        let many: Vec<CommandItem> = (0..30)
            .map(|i| CommandItem::new(i.to_string(), format!("Item {i}")))
            .collect();
        let mut state = CommandPaletteState::new(many, "");
        // Rows: header, then items 0..30 at rows 1..=30.
        state.cursor.set_from_hover(29);
        state.sync_scroll(10);
        assert_eq!(state.scroll(), 21);

        // Moving up inside the window leaves it alone.
        state.cursor.set_from_hover(25);
        state.sync_scroll(10);
        assert_eq!(state.scroll(), 21);

        // Back to the first item reveals its header again.
        state.cursor.reset();
        state.sync_scroll(10);
        assert_eq!(state.scroll(), 0);
    }

    #[test]
    fn test_query_change_resets_scroll() {
        let many: Vec<CommandItem> = (0..30)
            .map(|i| CommandItem::new(i.to_string(), format!("Item {i}")))
            .collect();
        let mut state = CommandPaletteState::new(many, "");
        state.cursor.set_from_hover(29);
        state.sync_scroll(10);
        state.push_query('1');
        assert_eq!(state.scroll(), 0);
    }

    #[test]
    fn test_resolve_uses_display_order() {
        let mut state = CommandPaletteState::new(
            vec![
                CommandItem::new("1", "one").with_group("B"),
                CommandItem::new("2", "two").with_group("A"),
                CommandItem::new("3", "three").with_group("B"),
            ],
            "",
        );
        state.cursor.move_down(3);
        assert_eq!(state.resolve().unwrap().id.0, "3");
    }
}
