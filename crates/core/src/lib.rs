//! structguard - Core Logic
//!
//! Placement guard for StructuresPlus building pieces. This crate owns the
//! hook lifecycle, blueprint path derivation, the restricted structure table
//! and the placement interceptor.
//!
//! # Re-exports
//!
//! This crate re-exports the SDK and engine crates for convenience:
//! - [`sdk`] - Host ABI types
//! - [`engine`] - Host function table storage

use tracing::{error, info};

// Re-export SDK and engine crates
pub use structguard_engine as engine;
pub use structguard_sdk as sdk;

pub mod blueprint;
pub mod config;
pub mod hooks;
pub mod host;
pub mod placement;
pub mod structures;

pub use blueprint::{blueprint_from_full_name, blueprint_path};
pub use config::{ConfigError, ConfigResult, GuardConfig, NotificationStyle};
pub use hooks::{HookBackend, HookError, NamedHook};
pub use host::ServerApi;
pub use placement::{evaluate, intercept, PlacementVerdict, BUILD_DENIED};
pub use structures::{RestrictedStructure, Restriction};

/// Install all hooks
///
/// Failures are logged; the server keeps running without the guard.
pub fn init_hooks() {
    let Some(host) = engine::try_host() else {
        error!("Cannot install hooks: host not loaded");
        return;
    };

    match placement::install_hooks(host) {
        Ok(()) => info!("Hooks installed: {:?}", sdk::HOOKED_ENTRY_POINTS),
        Err(e) => error!("Failed to install hooks: {}", e),
    }
}

/// Remove all hooks
///
/// Safe to call when nothing is installed.
pub fn remove_hooks() {
    if !placement::is_installed() {
        return;
    }
    let Some(host) = engine::try_host() else {
        return;
    };

    match placement::uninstall_hooks(host) {
        Ok(()) => info!("Hooks removed"),
        Err(e) => error!("Failed to remove hooks: {}", e),
    }
}

/// Reload the config from the plugin directory and make it active
///
/// Returns the new active config. The previous config stays active if the
/// file cannot be loaded.
pub fn reload_config() -> ConfigResult<GuardConfig> {
    let path = config::config_path()?;
    let mut config = config::active();
    config.reload_from(&path)?;

    info!("Config reloaded (debug = {})", config.debug);
    config::set_active(config.clone());
    Ok(config)
}

/// Shutdown the plugin
///
/// Called from the FFI layer when the host unloads the plugin.
pub fn shutdown() {
    info!("structguard shutting down...");
    remove_hooks();
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_sdk_types_exist() {
        use crate::sdk::HostApi;
        let _: *const HostApi = std::ptr::null();
    }

    #[test]
    fn test_remove_hooks_without_install() {
        // No host is loaded in tests, so both calls are no-ops
        crate::remove_hooks();
        crate::remove_hooks();
    }

    #[test]
    fn test_reload_without_host_keeps_config() {
        let before = crate::config::active();
        assert!(matches!(
            crate::reload_config(),
            Err(crate::ConfigError::NoConfigDirectory)
        ));
        assert_eq!(crate::config::active(), before);
    }
}
