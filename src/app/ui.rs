use crate::app::state::AppState;
use crate::components::history::HistoryView;
use crate::components::modals::{palette_layout, query_cursor, CommandPaletteModal};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let theme = app_state.theme.clone();
    let layout = get_layout(f.area());

    // --- Header ---
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" CMDK ", theme.header_logo),
        Span::styled(" Ctrl+K ", theme.footer_segment_key),
        Span::styled(" command palette ", theme.header_item),
    ]))
    .style(theme.header);
    f.render_widget(header, layout.header);

    // --- History ---
    let history_block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled("HISTORY", theme.header_active),
            Span::raw(" "),
        ]))
        .title_bottom(Line::from(vec![
            Span::raw(" "),
            Span::styled("j/k", theme.footer_segment_key),
            Span::raw(": scroll "),
            Span::styled("r", theme.footer_segment_key),
            Span::raw(": reload "),
            Span::styled("q", theme.footer_segment_key),
            Span::raw(": quit "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if app_state.command_palette.is_open {
            theme.border
        } else {
            theme.border_focus
        });
    if layout.body.width > 0 && layout.body.height > 0 {
        let history = HistoryView {
            entries: &app_state.history.entries,
            theme: &theme,
        };
        f.render_stateful_widget(
            history,
            history_block.inner(layout.body),
            &mut app_state.history.list_state,
        );
        f.render_widget(history_block, layout.body);
    }

    // --- Footer ---
    let footer = match (&app_state.last_error, &app_state.status_message) {
        (Some(err), _) => Line::from(Span::styled(format!(" {err} "), theme.status_error)),
        (None, Some(msg)) => Line::from(vec![
            Span::styled(" INFO ", theme.status_info),
            Span::styled(format!(" {msg}"), theme.footer),
        ]),
        (None, None) => Line::from(Span::styled(
            format!(" {} commands", app_state.command_palette.items().len()),
            theme.footer,
        )),
    };
    f.render_widget(Paragraph::new(footer).style(theme.footer), layout.footer);

    // --- Command Palette ---
    if app_state.command_palette.is_open {
        let height = palette_layout(f.area()).results.height;
        app_state.command_palette.sync_scroll(usize::from(height));
    }
    let cp = &app_state.command_palette;
    if cp.is_open {
        let modal = CommandPaletteModal {
            theme: &theme,
            state: cp,
        };
        f.render_widget(modal, f.area());
        if cp.query_focused {
            f.set_cursor_position(query_cursor(cp, f.area()));
        }
    }
}
