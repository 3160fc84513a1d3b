pub mod schema;
pub mod watcher;

pub use schema::{AppConfig, GlobalConfig, ThemeConfig};
pub use watcher::ConfigWatcher;

use rollavg_core::{AppError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  A missing file is not an error —
/// the applet runs fine on `AppConfig::default()`.
pub fn load(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!("No config at '{}'; using defaults.", path.display());
        return Ok(AppConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| AppError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("rollavg").join("rollavg.toml")
}
