use super::keymap::{KeyConfig, KeyMap};
use crate::config::Config;
use crate::domain::models::CommandItem;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub mod command_palette;
pub mod history;

// Re-exports
pub use command_palette::{CommandPaletteState, DEFAULT_PLACEHOLDER};
pub use history::HistoryState;

pub const DEFAULT_FOCUS_DELAY: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    // --- Status ---
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub last_error: Option<String>,

    // --- Command Palette ---
    pub command_palette: CommandPaletteState,
    pub focus_delay: Duration,

    // --- Host ---
    pub history: HistoryState,
    pub catalog_path: Option<PathBuf>,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: crate::theme::PaletteType,
    pub theme: crate::theme::Theme,
}

impl AppState {
    #[must_use]
    pub fn new(config: &Config, items: Vec<CommandItem>) -> Self {
        Self {
            command_palette: CommandPaletteState::new(items, config.placeholder.clone()),
            focus_delay: Duration::from_millis(config.focus_delay_ms),
            catalog_path: config.commands_file.clone(),
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            palette_type: config.theme,
            theme: crate::theme::Theme::from_palette_type(config.theme),
            ..Default::default()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            status_message: None,
            last_error: None,
            command_palette: CommandPaletteState::default(),
            focus_delay: DEFAULT_FOCUS_DELAY,
            history: HistoryState::default(),
            catalog_path: None,
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            palette_type: crate::theme::PaletteType::CatppuccinMocha,
            theme: crate::theme::Theme::default(),
        }
    }
}
