use crate::app::{
    action::{Action, CloseReason, UpdateResult},
    command::Command,
    state::AppState,
};
use crate::domain::models::PaletteEvent;
use tracing::debug;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    let is_open = state.command_palette.is_open;
    match action {
        Action::TogglePalette => {
            if is_open {
                UpdateResult::Handled(close(state, CloseReason::Toggle))
            } else {
                UpdateResult::Handled(open(state))
            }
        }
        Action::OpenPalette | Action::SetOpen(true) => {
            if is_open {
                UpdateResult::Handled(Vec::new())
            } else {
                UpdateResult::Handled(open(state))
            }
        }
        Action::SetOpen(false) => UpdateResult::Handled(close(state, CloseReason::External)),
        Action::ClosePalette(reason) => UpdateResult::Handled(close(state, *reason)),
        Action::FocusQuery => {
            // A focus that fires after the palette closed again is stale.
            if is_open {
                state.command_palette.query_focused = true;
            }
            UpdateResult::Handled(Vec::new())
        }
        Action::ReplaceItems(items) => {
            state.command_palette.replace_items(items.clone());
            debug!(count = items.len(), "palette items replaced");
            UpdateResult::Handled(Vec::new())
        }
        Action::SetPlaceholder(placeholder) => {
            state.command_palette.placeholder.clone_from(placeholder);
            UpdateResult::Handled(Vec::new())
        }
        Action::QueryInput(_)
        | Action::QueryBackspace
        | Action::QueryClear
        | Action::CursorDown
        | Action::CursorUp
        | Action::HoverEntry(_)
        | Action::ClickEntry(_)
        | Action::Submit => {
            if is_open {
                UpdateResult::Handled(handle_open_input(state, action))
            } else {
                UpdateResult::Handled(Vec::new())
            }
        }
        _ => UpdateResult::NotHandled,
    }
}

fn handle_open_input(state: &mut AppState, action: &Action) -> Vec<Command> {
    let cp = &mut state.command_palette;
    match action {
        Action::QueryInput(c) => cp.push_query(*c),
        Action::QueryBackspace => cp.pop_query(),
        Action::QueryClear => cp.set_query(""),
        Action::CursorDown => {
            let len = cp.filtered().len();
            cp.cursor.move_down(len);
        }
        Action::CursorUp => cp.cursor.move_up(),
        Action::HoverEntry(idx) => cp.cursor.set_from_hover(*idx),
        Action::ClickEntry(idx) => {
            cp.cursor.set_from_hover(*idx);
            return submit(state);
        }
        Action::Submit => return submit(state),
        _ => {}
    }
    Vec::new()
}

/// Resolves the highlighted command. With nothing to resolve the palette
/// stays open and nothing is emitted.
fn submit(state: &mut AppState) -> Vec<Command> {
    let Some(item) = state.command_palette.resolve() else {
        debug!(query = %state.command_palette.query, "submit with no visible command");
        return Vec::new();
    };
    debug!(id = %item.id, "command selected");

    let mut commands = vec![Command::Emit(PaletteEvent::Selected(item))];
    commands.extend(close(state, CloseReason::Selected));
    commands
}

fn open(state: &mut AppState) -> Vec<Command> {
    let cp = &mut state.command_palette;
    cp.is_open = true;
    cp.query_focused = false;
    cp.set_query("");
    debug!(items = cp.items().len(), "palette opened");

    vec![
        Command::ScheduleFocus(state.focus_delay),
        Command::Emit(PaletteEvent::OpenChanged(true)),
    ]
}

fn close(state: &mut AppState, reason: CloseReason) -> Vec<Command> {
    let cp = &mut state.command_palette;
    if !cp.is_open {
        return Vec::new();
    }
    cp.is_open = false;
    cp.query_focused = false;
    debug!(?reason, "palette closed");

    vec![
        Command::CancelFocus,
        Command::Emit(PaletteEvent::OpenChanged(false)),
    ]
}
