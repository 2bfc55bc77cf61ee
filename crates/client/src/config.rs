//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use handbook_runtime::RuntimeConfig;

use crate::dirs;

/// Configuration required to bootstrap the client runtime.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `animals.json` / `pelts.json`
    pub data_dir: PathBuf,
    /// Directory for the checklist and widget stores
    pub save_dir: PathBuf,
    pub runtime: RuntimeConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::bundled_content_dir(),
            save_dir: dirs::save_dir(),
            runtime: RuntimeConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HANDBOOK_DATA_DIR` - Content directory (default: bundled sample data)
    /// - `HANDBOOK_SAVE_DIR` - Directory for user state (default: platform-specific)
    /// - `HANDBOOK_PREMIUM` - Premium flag shown on the widget (default: false)
    /// - `HANDBOOK_COMMAND_BUFFER` - Command queue size (default: 32)
    /// - `HANDBOOK_EVENT_BUFFER` - Event buffer per topic (default: 100)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("HANDBOOK_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Ok(dir) = env::var("HANDBOOK_SAVE_DIR") {
            config.save_dir = PathBuf::from(dir);
        }

        if let Some(enable) = read_env::<bool>("HANDBOOK_PREMIUM") {
            config.runtime.has_premium = enable;
        } else if env::var("HANDBOOK_PREMIUM").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.runtime.has_premium = true;
        }

        if let Some(capacity) = read_env::<usize>("HANDBOOK_COMMAND_BUFFER") {
            config.runtime.command_buffer_size = capacity.max(1);
        }

        if let Some(capacity) = read_env::<usize>("HANDBOOK_EVENT_BUFFER") {
            config.runtime.event_buffer_size = capacity.max(1);
        }

        config
    }

    pub fn checklist_dir(&self) -> PathBuf {
        self.save_dir.join("checklist")
    }

    pub fn widget_dir(&self) -> PathBuf {
        self.save_dir.join("widget")
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
