use crate::app::keymap::KeyConfig;
use crate::app::state::DEFAULT_PLACEHOLDER;
use crate::error::{CmdkError, Result};
use crate::theme::PaletteType;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub placeholder: String,
    pub theme: PaletteType,
    pub commands_file: Option<PathBuf>,
    pub focus_delay_ms: u64,
    pub log_file: Option<PathBuf>,
    pub keys: KeyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            theme: PaletteType::default(),
            commands_file: None,
            focus_delay_ms: 10,
            log_file: None,
            keys: KeyConfig::default(),
        }
    }
}

impl Config {
    /// Loads `path`, or `~/.config/cmdk/config.toml` when no path is given.
    /// A missing default file yields the defaults; a missing explicit file is
    /// an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match config_dir() {
                Some(dir) => (dir.join("config.toml"), false),
                None => return Ok(Self::default()),
            },
        };

        if !explicit && !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| CmdkError::Io {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| CmdkError::Toml { path, source })
    }

    #[must_use]
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| config_dir().map(|dir| dir.join("cmdk.log")))
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("cmdk");
        path
    })
}
