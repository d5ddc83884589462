mod config;

pub use config::{Config, DayEntry, HoursTable, PresenterConfig, StoreConfig};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/openhours[-dev]/` based on OPENHOURS_ENV.
///
/// Set OPENHOURS_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("OPENHOURS_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("openhours-dev")
    } else {
        base_dir.join("openhours")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
