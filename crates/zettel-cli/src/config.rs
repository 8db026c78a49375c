//! CLI configuration: a small TOML file at the vault root plus flag
//! overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use zettel_core::{FsVault, NOTE_GLOB};

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "zettel.toml";

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Vault root directory
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob note files must match
    #[serde(default = "default_note_glob")]
    pub note_glob: String,

    /// Debounce window for filesystem events in watch mode, milliseconds
    #[serde(default = "default_watch_debounce_ms")]
    pub watch_debounce_ms: u64,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_note_glob() -> String {
    NOTE_GLOB.to_string()
}

fn default_watch_debounce_ms() -> u64 {
    250
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            note_glob: default_note_glob(),
            watch_debounce_ms: default_watch_debounce_ms(),
        }
    }
}

impl CliConfig {
    /// Load configuration, applying CLI overrides.
    ///
    /// An explicitly passed config path must exist and parse. The default
    /// `./zettel.toml` is optional; when it is absent the built-in defaults
    /// apply.
    pub fn load(path: Option<PathBuf>, root_override: Option<PathBuf>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config at {}", path.display()))?;
                toml::from_str(&text)
                    .with_context(|| format!("invalid config at {}", path.display()))?
            }
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if default.exists() {
                    let text = std::fs::read_to_string(&default)
                        .with_context(|| format!("failed to read {}", CONFIG_FILE))?;
                    toml::from_str(&text)
                        .with_context(|| format!("invalid config in {}", CONFIG_FILE))?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(root) = root_override {
            config.root = root;
        }
        Ok(config)
    }

    /// Open the configured vault.
    pub fn vault(&self) -> zettel_core::Result<FsVault> {
        FsVault::with_glob(&self.root, &self.note_glob)
    }
}
