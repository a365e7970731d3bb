mod config;
mod persistence;

pub use config::{Config, DisplayConfig, LoggingConfig, StorageConfig};
pub use persistence::{
    decode_board, encode_board, JsonFileStore, MemoryStore, Persistence, STORAGE_KEY,
};

use std::path::PathBuf;

use crate::error::PersistenceError;

/// Environment variable that pins the data directory.
pub const DATA_DIR_ENV: &str = "NINEPLATES_DATA_DIR";

/// Returns the data directory, creating it if needed.
///
/// `NINEPLATES_DATA_DIR` wins when set. Otherwise `~/.config/nineplates`,
/// or `~/.config/nineplates-dev` when `NINEPLATES_ENV=dev`.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the directory fails.
pub fn data_dir() -> Result<PathBuf, PersistenceError> {
    let dir = match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .ok_or(PersistenceError::NoDataDir)?
                .join(".config");
            let env = std::env::var("NINEPLATES_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("nineplates-dev")
            } else {
                base_dir.join("nineplates")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| PersistenceError::WriteFailed {
        location: dir.display().to_string(),
        source,
    })?;
    Ok(dir)
}
