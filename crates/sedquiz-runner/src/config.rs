//! sedquiz configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level sedquiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SedquizConfig {
    /// Shell used to interpret command lines (invoked as `<shell> -c`).
    #[serde(default = "default_shell")]
    pub shell: String,
    /// Per-command timeout in seconds; 0 disables it.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Catalog file to play instead of the built-in one.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

fn default_shell() -> String {
    "sh".to_string()
}
fn default_timeout() -> u64 {
    30
}

impl Default for SedquizConfig {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            timeout_secs: default_timeout(),
            catalog: None,
        }
    }
}

impl SedquizConfig {
    /// The command timeout, or `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `sedquiz.toml` in the current directory
/// 2. `~/.config/sedquiz/config.toml`
///
/// Environment variable override: `SEDQUIZ_SHELL`.
pub fn load_config_from(path: Option<&Path>) -> Result<SedquizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("sedquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<SedquizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => SedquizConfig::default(),
    };

    if let Ok(shell) = std::env::var("SEDQUIZ_SHELL") {
        if !shell.trim().is_empty() {
            config.shell = shell;
        }
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("sedquiz"))
}
