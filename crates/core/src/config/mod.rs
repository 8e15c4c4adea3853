//! Configuration for structguard
//!
//! Only presentation and logging are configurable; the restricted structure
//! table is fixed in code. The config is an optional TOML file next to the
//! plugin; a missing file or missing keys fall back to these defaults:
//!
//! ```toml
//! version = 1
//! debug = false
//!
//! [notification]
//! color = [1.0, 0.0, 0.0, 1.0]
//! text_size = 1.4
//! display_time = 30.0
//! ```

mod loader;

use std::path::Path;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use structguard_sdk::FLinearColor;

pub use loader::{config_path, config_path_in, plugin_dir, CONFIG_FILE_NAME};

/// Configuration system errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse TOML content
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The loader did not report a plugin directory
    #[error("Config directory not available - loader supplied no plugin directory")]
    NoConfigDirectory,
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// How restriction notifications look on the player's screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationStyle {
    /// RGBA, each component in 0..=1
    pub color: [f32; 4],

    /// Text scale
    pub text_size: f32,

    /// Seconds on screen
    pub display_time: f32,
}

impl NotificationStyle {
    pub const fn new() -> Self {
        Self {
            color: [1.0, 0.0, 0.0, 1.0],
            text_size: 1.4,
            display_time: 30.0,
        }
    }

    pub fn linear_color(&self) -> FLinearColor {
        let [r, g, b, a] = self.color;
        FLinearColor { r, g, b, a }
    }
}

impl Default for NotificationStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// Plugin configuration.
///
/// Loaded from `{plugin_dir}/structguard.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Config version for future migration support
    pub version: u32,

    /// Enable debug logging
    pub debug: bool,

    /// Notification appearance
    pub notification: NotificationStyle,
}

impl GuardConfig {
    pub const fn new() -> Self {
        Self {
            version: 1,
            debug: false,
            notification: NotificationStyle::new(),
        }
    }

    /// Load config from a file, defaults if missing.
    ///
    /// Never writes to disk.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let mut config = Self::default();
        config.reload_from(path)?;
        Ok(config)
    }

    /// Reload config from a file, resetting to defaults if it is missing.
    ///
    /// `self` is left untouched when the file cannot be read or parsed.
    pub fn reload_from(&mut self, path: &Path) -> ConfigResult<()> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            *self = Self::default();
            return Ok(());
        }

        let content = std::fs::read_to_string(path)?;
        *self = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(())
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Config used by the placement hook
static ACTIVE: RwLock<GuardConfig> = RwLock::new(GuardConfig::new());

/// Replace the active config
pub fn set_active(config: GuardConfig) {
    *ACTIVE.write() = config;
}

/// Snapshot of the active config
pub fn active() -> GuardConfig {
    ACTIVE.read().clone()
}

/// Notification style of the active config
pub fn notification_style() -> NotificationStyle {
    ACTIVE.read().notification
}
