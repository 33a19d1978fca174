mod config;
pub mod history_db;

pub use config::{Config, HistoryConfig, LibraryConfig};
pub use history_db::HistoryDb;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the sketchdeck data directory, creating it if needed.
///
/// `SKETCHDECK_DATA_DIR` overrides the location entirely. Otherwise it is
/// `~/.config/sketchdeck`, or `~/.config/sketchdeck-dev` when
/// `SKETCHDECK_ENV=dev`.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("SKETCHDECK_DATA_DIR") {
        Some(custom) => PathBuf::from(custom),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("SKETCHDECK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("sketchdeck-dev")
            } else {
                base_dir.join("sketchdeck")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
