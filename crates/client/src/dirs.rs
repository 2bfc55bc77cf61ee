//! Platform-specific directory utilities
//!
//! Provides consistent directory paths across different operating systems,
//! following platform conventions for cache and data directories.

use std::path::PathBuf;

const APP_NAME: &str = "animal-handbook";

/// Get the platform-specific log directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/animal-handbook/logs`
/// - Linux: `~/.cache/animal-handbook/logs` (or `$XDG_CACHE_HOME/animal-handbook/logs`)
/// - Windows: `%LOCALAPPDATA%\animal-handbook\logs`
/// - Fallback: `/tmp/animal-handbook/logs`
pub fn log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp").join(APP_NAME));

    base_dir.join("logs")
}

/// Get the platform-specific save directory for user state
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/animal-handbook`
/// - Linux: `~/.local/share/animal-handbook` (or `$XDG_DATA_HOME/animal-handbook`)
/// - Windows: `%APPDATA%\animal-handbook`
/// - Fallback: `./save_data`
pub fn save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Content shipped with the workspace, used when no data directory is configured.
pub fn bundled_content_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../handbook/content/data")
}
