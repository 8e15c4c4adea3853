//! Config path resolution
//!
//! The config file lives next to the plugin library, in the directory the
//! loader reported at load time.

use std::path::{Path, PathBuf};

use super::{ConfigError, ConfigResult};

/// Config file name inside the plugin directory
pub const CONFIG_FILE_NAME: &str = "structguard.toml";

/// Returns the directory the plugin was loaded from.
pub fn plugin_dir() -> ConfigResult<PathBuf> {
    structguard_engine::try_host()
        .and_then(|host| host.plugin_dir())
        .map(Path::to_path_buf)
        .ok_or(ConfigError::NoConfigDirectory)
}

/// Returns the config path inside a plugin directory.
///
/// Path: `{plugin_dir}/structguard.toml`
pub fn config_path_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Returns the config path for the loaded plugin.
pub fn config_path() -> ConfigResult<PathBuf> {
    Ok(config_path_in(&plugin_dir()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_format() {
        let base = PathBuf::from("/server/ArkApi/Plugins/StructGuard");
        assert!(config_path_in(&base).ends_with("StructGuard/structguard.toml"));
    }

    #[test]
    fn test_no_directory_before_load() {
        assert!(matches!(config_path(), Err(ConfigError::NoConfigDirectory)));
    }
}
