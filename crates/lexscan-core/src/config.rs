use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::dictionary::{DEFAULT_DICTIONARY_FILE, DEFAULT_SUGGESTION_CUTOFF};

/// Dictionary settings (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Where the dictionary JSON lives. Relative paths resolve against the working directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Minimum similarity (0.0..=1.0) for a "did you mean" suggestion.
    #[serde(default = "default_cutoff")]
    pub suggestion_cutoff: f64,
}

fn default_cutoff() -> f64 {
    DEFAULT_SUGGESTION_CUTOFF
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: None,
            suggestion_cutoff: DEFAULT_SUGGESTION_CUTOFF,
        }
    }
}

impl DictionaryConfig {
    /// Configured path, or `dictionary.json` in the working directory.
    pub fn resolved_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DICTIONARY_FILE))
    }
}

/// Global configuration loaded from `~/.config/lexscan/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexscanConfig {
    #[serde(default)]
    pub dictionary: DictionaryConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("lexscan")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LexscanConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LexscanConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: LexscanConfig = toml::from_str(&data)?;
    Ok(cfg)
}
