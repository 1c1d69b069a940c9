use serde::Deserialize;
use std::fmt;

/// Group label used for commands that don't name one.
pub const DEFAULT_GROUP: &str = "Commands";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(transparent)]
pub struct CommandId(pub String);

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CommandId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One selectable entry in the palette. Owned by the host; the palette only
/// ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CommandItem {
    pub id: CommandId,
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
    // Display hint only, never used for activation.
    #[serde(default)]
    pub shortcut: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
}

impl CommandItem {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: CommandId(id.into()),
            label: label.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    #[must_use]
    pub fn group_name(&self) -> &str {
        self.group.as_deref().unwrap_or(DEFAULT_GROUP)
    }
}

/// Notifications the palette emits towards its host.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteEvent {
    Selected(CommandItem),
    OpenChanged(bool),
}

/// A command the host has run, shown in the history pane.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub item: CommandItem,
    pub timestamp: String,
}
