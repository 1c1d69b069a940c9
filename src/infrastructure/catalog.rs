use crate::domain::models::CommandItem;
use crate::error::{CmdkError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    commands: Vec<CommandItem>,
}

/// Loads `[[commands]]` tables from a TOML file.
pub fn load_catalog(path: &Path) -> Result<Vec<CommandItem>> {
    let content = std::fs::read_to_string(path).map_err(|source| CmdkError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: CatalogFile = toml::from_str(&content).map_err(|source| CmdkError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = file.commands.len(), "loaded command catalog");
    Ok(dedupe(file.commands))
}

/// Drops every item whose id was already seen, keeping the first.
#[must_use]
pub fn dedupe(items: Vec<CommandItem>) -> Vec<CommandItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| {
            let fresh = seen.insert(item.id.clone());
            if !fresh {
                warn!(id = %item.id, label = %item.label, "duplicate command id, ignoring");
            }
            fresh
        })
        .collect()
}
