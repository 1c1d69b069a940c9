use super::action::{Action, CloseReason};
use crate::error::{CmdkError, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    /// Chords that toggle the palette in addition to Ctrl+K / Super+K.
    pub extra_toggle: Vec<String>,
}

// Modifiers that take part in matching; Shift is folded into the char.
const CHORD_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::ALT)
    .union(KeyModifiers::SUPER)
    .union(KeyModifiers::META);

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub toggle: Vec<KeyEvent>,
    pub palette: HashMap<KeyEvent, Action>,
    pub host: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        // Ctrl, Super and Meta are all treated as the platform "meta" key.
        let mut toggle = vec![
            chord(KeyModifiers::CONTROL, 'k'),
            chord(KeyModifiers::SUPER, 'k'),
            chord(KeyModifiers::META, 'k'),
        ];
        for spec in &config.extra_toggle {
            match parse_chord(spec) {
                Ok(k) => toggle.push(k),
                Err(e) => warn!(chord = %spec, "ignoring toggle chord: {e}"),
            }
        }

        let mut palette = HashMap::new();
        palette.insert(key(KeyCode::Esc), Action::ClosePalette(CloseReason::Escape));
        palette.insert(key(KeyCode::Enter), Action::Submit);
        palette.insert(key(KeyCode::Down), Action::CursorDown);
        palette.insert(key(KeyCode::Up), Action::CursorUp);
        palette.insert(key(KeyCode::Backspace), Action::QueryBackspace);
        palette.insert(chord(KeyModifiers::CONTROL, 'u'), Action::QueryClear);

        let mut host = HashMap::new();
        host.insert(key(KeyCode::Char('q')), Action::Quit);
        host.insert(chord(KeyModifiers::CONTROL, 'c'), Action::Quit);
        host.insert(key(KeyCode::Char('j')), Action::HistoryNext);
        host.insert(key(KeyCode::Down), Action::HistoryNext);
        host.insert(key(KeyCode::Char('k')), Action::HistoryPrev);
        host.insert(key(KeyCode::Up), Action::HistoryPrev);
        host.insert(key(KeyCode::Char('r')), Action::ReloadCatalog);

        Self {
            toggle,
            palette,
            host,
        }
    }

    #[must_use]
    pub fn is_toggle(&self, event: &KeyEvent) -> bool {
        let event = normalize(*event);
        self.toggle.iter().any(|k| *k == event)
    }

    #[must_use]
    pub fn palette_action(&self, event: &KeyEvent) -> Option<Action> {
        self.palette.get(&normalize(*event)).cloned()
    }

    #[must_use]
    pub fn host_action(&self, event: &KeyEvent) -> Option<Action> {
        self.host.get(&normalize(*event)).cloned()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&KeyConfig::default())
    }
}

/// Parses chords such as `ctrl+k`, `super+p` or `alt+enter`.
pub fn parse_chord(spec: &str) -> Result<KeyEvent> {
    let unknown = || CmdkError::UnknownShortcut(spec.to_string());
    let mut modifiers = KeyModifiers::empty();
    let mut code = None;

    for part in spec.split('+').map(str::trim) {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "super" | "cmd" | "win" => modifiers |= KeyModifiers::SUPER,
            "meta" => modifiers |= KeyModifiers::META,
            "enter" => code = Some(KeyCode::Enter),
            "space" => code = Some(KeyCode::Char(' ')),
            "tab" => code = Some(KeyCode::Tab),
            p if p.chars().count() == 1 => code = p.chars().next().map(KeyCode::Char),
            _ => return Err(unknown()),
        }
    }

    code.map(|c| KeyEvent::new(c, modifiers)).ok_or_else(unknown)
}

fn normalize(event: KeyEvent) -> KeyEvent {
    let code = match event.code {
        KeyCode::Char(c) if event.modifiers.intersects(CHORD_MODIFIERS) => {
            KeyCode::Char(c.to_ascii_lowercase())
        }
        other => other,
    };
    KeyEvent::new(code, event.modifiers & CHORD_MODIFIERS)
}

fn chord(modifiers: KeyModifiers, c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), modifiers)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}
