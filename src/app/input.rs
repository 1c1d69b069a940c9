use crate::app::{
    action::{Action, CloseReason},
    state::AppState,
};
use crate::components::modals::{entry_at, palette_layout};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::{Position, Rect, Size};

/// Routes one terminal event. The toggle shortcut always goes to the palette;
/// while the palette is open it swallows every other event, and while closed
/// everything else belongs to the host.
pub fn map_event_to_action(
    event: Event,
    app_state: &AppState,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == crossterm::event::KeyEventKind::Release {
            return None;
        }
    }

    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    match event {
        Event::Key(key) if app_state.keymap.is_toggle(&key) => Some(Action::TogglePalette),
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ if app_state.command_palette.is_open => map_palette_event(event, app_state, area),
        Event::Key(key) => app_state.keymap.host_action(&key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::HistoryPrev),
            MouseEventKind::ScrollDown => Some(Action::HistoryNext),
            _ => None,
        },
        _ => None,
    }
}

fn map_palette_event(event: Event, app_state: &AppState, area: Rect) -> Option<Action> {
    let cp = &app_state.command_palette;
    match event {
        Event::Key(key) => app_state
            .keymap
            .palette_action(&key)
            .or_else(|| query_char(&key).map(Action::QueryInput)),
        Event::Mouse(mouse) => {
            let pos = Position::new(mouse.column, mouse.row);
            match mouse.kind {
                MouseEventKind::Moved => entry_at(cp, area, pos).map(Action::HoverEntry),
                MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(idx) = entry_at(cp, area, pos) {
                        Some(Action::ClickEntry(idx))
                    } else if !palette_layout(area).surface.contains(pos) {
                        Some(Action::ClosePalette(CloseReason::OutsideClick))
                    } else {
                        None
                    }
                }
                MouseEventKind::ScrollDown => Some(Action::CursorDown),
                MouseEventKind::ScrollUp => Some(Action::CursorUp),
                _ => None,
            }
        }
        _ => None,
    }
}

fn query_char(key: &KeyEvent) -> Option<char> {
    let chorded =
        KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META;
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(chorded) => Some(c),
        _ => None,
    }
}
