use crate::app::{
    action::{Action, UpdateResult},
    catalog,
    command::Command,
    state::AppState,
};
use crate::domain::models::{CommandItem, HistoryEntry};
use crate::theme::{PaletteType, Theme};
use tracing::{info, warn};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(Vec::new())
        }
        Action::HistoryNext => {
            state.history.select_next();
            UpdateResult::Handled(Vec::new())
        }
        Action::HistoryPrev => {
            state.history.select_prev();
            UpdateResult::Handled(Vec::new())
        }
        Action::Dispatch(item) => UpdateResult::Handled(dispatch(state, item)),
        Action::ReloadCatalog => UpdateResult::Handled(reload(state)),
        Action::CatalogLoaded(Ok(items)) => {
            let items = catalog::assemble(items.clone());
            state.status_message = Some(format!("Loaded {} commands", items.len()));
            state.last_error = None;
            // Same path a host takes to swap the palette's items.
            super::palette::update(state, &Action::ReplaceItems(items))
        }
        Action::CatalogLoaded(Err(e)) => {
            warn!("catalog reload failed: {e}");
            state.last_error = Some(format!("Catalog reload failed: {e}"));
            UpdateResult::Handled(Vec::new())
        }
        Action::SwitchTheme(palette) => {
            state.palette_type = *palette;
            state.theme = Theme::from_palette_type(*palette);
            state.status_message = Some(format!("Theme: {}", palette.label()));
            UpdateResult::Handled(Vec::new())
        }
        Action::ClearHistory => {
            state.history.clear();
            state.status_message = Some("History cleared".to_string());
            UpdateResult::Handled(Vec::new())
        }
        _ => UpdateResult::NotHandled,
    }
}

fn dispatch(state: &mut AppState, item: &CommandItem) -> Vec<Command> {
    info!(id = %item.id, label = %item.label, "dispatching command");

    if let Some(action) = builtin_action(&item.id.0) {
        return match update(state, &action) {
            UpdateResult::Handled(commands) => commands,
            UpdateResult::NotHandled => Vec::new(),
        };
    }

    state.history.push(HistoryEntry {
        item: item.clone(),
        timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
    });
    state.status_message = Some(format!("Ran {}", item.label));
    Vec::new()
}

fn builtin_action(id: &str) -> Option<Action> {
    if let Some(key) = id.strip_prefix(catalog::THEME_PREFIX) {
        return PaletteType::from_key(key).map(Action::SwitchTheme);
    }
    match id {
        catalog::QUIT => Some(Action::Quit),
        catalog::RELOAD => Some(Action::ReloadCatalog),
        catalog::CLEAR_HISTORY => Some(Action::ClearHistory),
        _ => None,
    }
}

fn reload(state: &mut AppState) -> Vec<Command> {
    match &state.catalog_path {
        Some(path) => vec![Command::LoadCatalog(path.clone())],
        None => {
            state.status_message = Some("No commands file configured".to_string());
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn run(state: &mut AppState, action: Action) -> Vec<Command> {
        match update(state, &action) {
            UpdateResult::Handled(commands) => commands,
            UpdateResult::NotHandled => panic!("{action:?} was not handled"),
        }
    }

    #[test]
    fn test_dispatch_user_command_records_history() {
        let mut state = AppState::default();
        run(
            &mut state,
            Action::Dispatch(CommandItem::new("deploy", "Deploy")),
        );
        assert_eq!(state.history.entries.len(), 1);
        assert_eq!(state.history.entries[0].item.id.0, "deploy");
        assert_eq!(state.status_message.as_deref(), Some("Ran Deploy"));
    }

    #[test]
    fn test_dispatch_builtins() {
        let mut state = AppState::default();
        run(
            &mut state,
            Action::Dispatch(CommandItem::new("theme.nord", "Theme: Nord")),
        );
        assert_eq!(state.palette_type, PaletteType::Nord);
        assert!(state.history.entries.is_empty());

        run(&mut state, Action::Dispatch(CommandItem::new(catalog::QUIT, "Quit")));
        assert!(state.should_quit);
    }

    #[test]
    fn test_unknown_theme_is_a_plain_command() {
        let mut state = AppState::default();
        run(
            &mut state,
            Action::Dispatch(CommandItem::new("theme.solarized", "Solarized")),
        );
        assert_eq!(state.history.entries.len(), 1);
    }

    #[test]
    fn test_reload_needs_a_catalog_path() {
        let mut state = AppState::default();
        assert!(run(&mut state, Action::ReloadCatalog).is_empty());
        assert!(state.status_message.is_some());

        state.catalog_path = Some(PathBuf::from("/tmp/commands.toml"));
        assert_eq!(
            run(&mut state, Action::ReloadCatalog),
            vec![Command::LoadCatalog(PathBuf::from("/tmp/commands.toml"))]
        );
    }

    #[test]
    fn test_catalog_loaded_replaces_palette_items() {
        let mut state = AppState::default();
        run(
            &mut state,
            Action::CatalogLoaded(Ok(vec![CommandItem::new("deploy", "Deploy")])),
        );
        let items = state.command_palette.items();
        assert_eq!(items[0].id.0, "deploy");
        assert_eq!(items.len(), 1 + catalog::builtin_commands().len());
    }

    #[test]
    fn test_catalog_reload_while_open_resets_cursor() {
        let mut state = AppState::default();
        state.command_palette.replace_items(catalog::builtin_commands());
        state.command_palette.is_open = true;
        state.command_palette.set_query("theme");
        state.command_palette.cursor.set_from_hover(1);

        run(
            &mut state,
            Action::CatalogLoaded(Ok(vec![CommandItem::new("t", "Theme Tweaks")])),
        );
        let cp = &state.command_palette;
        assert!(cp.is_open);
        assert_eq!(cp.selected_index(), 0);
        assert_eq!(cp.query, "theme");
        assert_eq!(cp.filtered()[0].id.0, "t");
    }

    #[test]
    fn test_catalog_failure_keeps_items() {
        let mut state = AppState::default();
        state
            .command_palette
            .replace_items(vec![CommandItem::new("a", "A")]);
        run(&mut state, Action::CatalogLoaded(Err("boom".to_string())));
        assert_eq!(state.command_palette.items().len(), 1);
        assert!(state.last_error.as_deref().unwrap().contains("boom"));
    }
}
