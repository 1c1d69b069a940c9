use crate::app::state::CommandPaletteState;
use crate::domain::grouping::DisplayRow;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{centered_rect, dim_area, draw_drop_shadow};

/// Where the palette's parts land for a given terminal area. Rendering and
/// pointer hit testing both go through this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    pub surface: Rect,
    pub query: Rect,
    pub results: Rect,
}

#[must_use]
pub fn palette_layout(area: Rect) -> PaletteLayout {
    let surface = centered_rect(60, 60, area);
    let inner = palette_block().inner(surface);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Query input
            Constraint::Length(1), // Separator
            Constraint::Min(0),    // Results
        ])
        .split(inner);

    PaletteLayout {
        surface,
        query: chunks[0],
        results: chunks[2],
    }
}

/// Global index of the entry under a pointer position, if any.
#[must_use]
pub fn entry_at(state: &CommandPaletteState, area: Rect, pos: Position) -> Option<usize> {
    let layout = palette_layout(area);
    if !layout.results.contains(pos) {
        return None;
    }

    let row = state.scroll() + usize::from(pos.y - layout.results.y);
    match state.grouped().rows().get(row) {
        Some(DisplayRow::Entry { global_index, .. }) => Some(*global_index),
        _ => None,
    }
}

/// Terminal cursor position at the end of the query text.
#[must_use]
pub fn query_cursor(state: &CommandPaletteState, area: Rect) -> Position {
    let query = palette_layout(area).query;
    let width = u16::try_from(PROMPT.len() + Line::from(state.query.as_str()).width())
        .unwrap_or(u16::MAX);
    Position::new(
        query
            .x
            .saturating_add(width)
            .min(query.right().saturating_sub(1)),
        query.y,
    )
}

const PROMPT: &str = " > ";

fn palette_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a CommandPaletteState,
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = palette_layout(area);
        if layout.surface.width == 0 || layout.surface.height == 0 {
            return;
        }

        dim_area(buf, area);
        draw_drop_shadow(buf, layout.surface, area);
        Clear.render(layout.surface, buf);

        let block = palette_block()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" COMMAND PALETTE ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("↑↓", self.theme.footer_segment_key),
                Span::raw(" navigate "),
                Span::styled("⏎", self.theme.footer_segment_key),
                Span::raw(" select "),
                Span::styled("esc", self.theme.footer_segment_key),
                Span::raw(" close "),
            ]))
            .border_style(self.theme.border_focus);
        block.render(layout.surface, buf);

        // Render Query
        let query_line = if self.state.query.is_empty() {
            Line::from(vec![
                Span::styled(PROMPT, self.theme.footer_segment_key),
                Span::styled(&self.state.placeholder, self.theme.query_placeholder),
            ])
        } else {
            Line::from(vec![
                Span::styled(PROMPT, self.theme.footer_segment_key),
                Span::styled(&self.state.query, self.theme.query),
            ])
        };
        buf.set_line(layout.query.x, layout.query.y, &query_line, layout.query.width);

        // Render Separator
        let separator_y = layout.query.y + 1;
        if separator_y < layout.results.y {
            let separator = "─".repeat(layout.query.width as usize);
            buf.set_string(layout.query.x, separator_y, separator, self.theme.border_focus);
        }

        // Render Results
        if let Some(message) = self.state.empty_message() {
            let no_results = Line::from(Span::styled(
                format!("  {message}"),
                self.theme.list_item.add_modifier(Modifier::DIM),
            ));
            buf.set_line(
                layout.results.x,
                layout.results.y,
                &no_results,
                layout.results.width,
            );
            return;
        }

        let grouped = self.state.grouped();
        let rows = grouped.rows();
        let selected = self.state.selected_index();
        let height = layout.results.height as usize;

        for (i, row) in rows.iter().skip(self.state.scroll()).take(height).enumerate() {
            let y = layout.results.y + i as u16;
            let line = match row {
                DisplayRow::Header(name) => {
                    Line::from(Span::styled(format!(" {name}"), self.theme.group_header))
                }
                DisplayRow::Entry { global_index, item } => {
                    let is_selected = *global_index == selected;
                    let style = if is_selected {
                        self.theme.list_selected
                    } else {
                        self.theme.list_item
                    };
                    let prefix = if is_selected { " > " } else { "   " };
                    let icon = item.icon.as_deref().unwrap_or(" ");

                    let mut spans = vec![
                        Span::styled(prefix, style),
                        Span::styled(format!("{icon} "), self.theme.icon),
                        Span::styled(item.label.as_str(), style),
                    ];
                    if let Some(shortcut) = &item.shortcut {
                        let used: usize = spans.iter().map(Span::width).sum();
                        let hint = Span::styled(format!(" {shortcut} "), self.theme.shortcut_hint);
                        let pad = (layout.results.width as usize)
                            .saturating_sub(used + hint.width() + 1);
                        spans.push(Span::styled(" ".repeat(pad), style));
                        spans.push(hint);
                    }
                    Line::from(spans)
                }
            };
            buf.set_line(layout.results.x, y, &line, layout.results.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::CommandItem;

    fn render(state: &CommandPaletteState) -> String {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();
        CommandPaletteModal {
            theme: &theme,
            state,
        }
        .render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    fn grouped_state() -> CommandPaletteState {
        CommandPaletteState::new(
            vec![
                CommandItem::new("1", "Open File").with_group("File"),
                CommandItem::new("2", "Toggle Theme").with_group("View"),
                CommandItem::new("3", "Save File")
                    .with_group("File")
                    .with_shortcut("ctrl+s"),
            ],
            "Search commands",
        )
    }

    #[test]
    fn test_empty_state_echoes_query() {
        let mut state = grouped_state();
        state.set_query("zzz_no_match");
        let screen = render(&state);
        assert!(screen.contains("No results found for \"zzz_no_match\""));
        assert!(!screen.contains("Open File"));
    }

    #[test]
    fn test_placeholder_shown_for_empty_query() {
        let screen = render(&grouped_state());
        assert!(screen.contains("Search commands"));
        assert!(screen.contains("ctrl+s"));
    }

    #[test]
    fn test_groups_render_in_first_seen_order() {
        let screen = render(&grouped_state());
        let file = screen.find(" File").unwrap();
        let view = screen.find(" View").unwrap();
        let save = screen.find("Save File").unwrap();
        assert!(file < save && save < view);
    }

    #[test]
    fn test_entry_at_maps_rows_to_global_index() {
        let state = grouped_state();
        let area = Rect::new(0, 0, 80, 24);
        let results = palette_layout(area).results;
        let x = results.x + 2;

        // Row 0 is the "File" header.
        assert_eq!(entry_at(&state, area, Position::new(x, results.y)), None);
        assert_eq!(entry_at(&state, area, Position::new(x, results.y + 1)), Some(0));
        assert_eq!(entry_at(&state, area, Position::new(x, results.y + 2)), Some(1));
        assert_eq!(entry_at(&state, area, Position::new(x, results.y + 3)), None);
        assert_eq!(entry_at(&state, area, Position::new(x, results.y + 4)), Some(2));
        assert_eq!(entry_at(&state, area, Position::new(0, 0)), None);
    }

    #[test]
    fn test_hover_under_still_pointer_is_stable() {
        let area = Rect::new(0, 0, 80, 24);
        let results = palette_layout(area).results;
        let mut state = CommandPaletteState::new(
            (0..30)
                .map(|i| CommandItem::new(i.to_string(), format!("Item {i}")))
                .collect(),
            "",
        );
        state.cursor.set_from_hover(29);
        state.sync_scroll(results.height as usize);

        let top = Position::new(results.x + 2, results.y);
        let first = entry_at(&state, area, top);
        assert!(first.is_some());
        for _ in 0..5 {
            let idx = entry_at(&state, area, top).unwrap();
            state.cursor.set_from_hover(idx);
            state.sync_scroll(results.height as usize);
            assert_eq!(entry_at(&state, area, top), first);
        }
    }

    #[test]
    fn test_scrolled_list_renders_selection() {
        let area = Rect::new(0, 0, 80, 24);
        let results = palette_layout(area).results;
        let mut state = CommandPaletteState::new(
            (0..30)
                .map(|i| CommandItem::new(i.to_string(), format!("Item {i:02}")))
                .collect(),
            "",
        );
        state.cursor.set_from_hover(29);
        state.sync_scroll(results.height as usize);

        let screen = render(&state);
        assert!(screen.contains("Item 29"));
        assert!(!screen.contains("Item 00"));
    }

    #[test]
    fn test_wide_shortcut_hint_is_right_aligned() {
        let area = Rect::new(0, 0, 80, 24);
        let results = palette_layout(area).results;
        let state = CommandPaletteState::new(
            vec![
                CommandItem::new("1", "Palette").with_shortcut("⌘K"),
                CommandItem::new("2", "Save").with_shortcut("ctrl+s"),
            ],
            "",
        );
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();
        CommandPaletteModal {
            theme: &theme,
            state: &state,
        }
        .render(area, &mut buf);

        // Row 0 is the group header; each hint ends one cell before the edge.
        let last = results.x + results.width - 3;
        assert_eq!(buf[(last, results.y + 1)].symbol(), "K");
        assert_eq!(buf[(last, results.y + 2)].symbol(), "s");
    }

    #[test]
    fn test_query_cursor_stays_inside_query_row() {
        let area = Rect::new(0, 0, 80, 24);
        let query = palette_layout(area).query;
        let mut state = CommandPaletteState::new(Vec::new(), "");
        assert_eq!(
            query_cursor(&state, area),
            Position::new(query.x + PROMPT.len() as u16, query.y)
        );

        state.set_query("x".repeat(500));
        assert_eq!(
            query_cursor(&state, area),
            Position::new(query.right() - 1, query.y)
        );
    }
}
