//! C-compatible exports called by the host loader shim

use std::ffi::{c_char, CStr};
use std::path::{Path, PathBuf};

use tracing::instrument;

use structguard_core::config::{self, config_path_in};
use structguard_core::{placement, ConfigError, ConfigResult, GuardConfig};
use structguard_engine::{init_host, load_host};
use structguard_sdk::HostApi;

use crate::logging;

// Plugin metadata - static strings with null terminators for C compatibility
static AUTHOR: &[u8] = b"structguard contributors\0";
static NAME: &[u8] = b"StructGuard\0";
static DESCRIPTION: &[u8] = b"Blocks or warns about restricted StructuresPlus pieces\0";
static URL: &[u8] = b"https://github.com/structguard/structguard\0";
static LICENSE: &[u8] = b"GPL-3.0-or-later\0";
static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

/// Called when the host loads the plugin
///
/// Starts logging, loads the config, validates the host function table and
/// installs the placement hook. A failed hook installation is logged but does
/// not fail the load.
///
/// # Safety
/// - `api` must be null or point to a `HostApi` that outlives the plugin
/// - `plugin_dir` must be null or a valid null-terminated UTF-8 path
/// - `error` must be a valid pointer to a buffer of at least `maxlen` bytes, or null
#[no_mangle]
pub unsafe extern "C" fn structguard_plugin_load(
    api: *const HostApi,
    plugin_dir: *const c_char,
    error: *mut c_char,
    maxlen: usize,
) -> bool {
    logging::init();
    load(api, path_from_c(plugin_dir), error, maxlen)
}

#[instrument(skip_all, fields(plugin_dir = ?plugin_dir))]
unsafe fn load(
    api: *const HostApi,
    plugin_dir: Option<PathBuf>,
    error: *mut c_char,
    maxlen: usize,
) -> bool {
    tracing::info!("structguard loading...");

    let config = load_config(plugin_dir.as_deref());
    match &config {
        Ok(c) => {
            logging::apply_debug(c.debug);
            tracing::info!("Config loaded (debug = {})", c.debug);
        }
        Err(e) => tracing::warn!("Using default config: {}", e),
    }

    let globals = match load_host(api, plugin_dir) {
        Ok(g) => g,
        Err(e) => {
            tracing::error!("Failed to load host functions: {}", e);
            write_error(error, maxlen, &format!("Host error: {}", e));
            return false;
        }
    };

    config::set_active(config.unwrap_or_default());

    if let Err(e) = init_host(globals) {
        tracing::error!("Failed to init host: {}", e);
        write_error(error, maxlen, e);
        return false;
    }

    structguard_core::init_hooks();

    tracing::info!("structguard loaded (hook active: {})", placement::is_installed());
    tracing::info!("Main thread ID: {:?}", std::thread::current().id());

    true
}

/// Called when the host unloads the plugin
#[no_mangle]
#[instrument(skip_all)]
pub extern "C" fn structguard_plugin_unload() -> bool {
    tracing::info!("structguard unloading...");

    match std::panic::catch_unwind(crate::shutdown) {
        Ok(()) => true,
        Err(_) => {
            tracing::error!("Panic during shutdown");
            false
        }
    }
}

/// Re-read the config file, e.g. from an admin console command
///
/// # Safety
/// - `error` must be a valid pointer to a buffer of at least `maxlen` bytes, or null
#[no_mangle]
#[instrument(skip_all)]
pub unsafe extern "C" fn structguard_reload_config(error: *mut c_char, maxlen: usize) -> bool {
    match structguard_core::reload_config() {
        Ok(config) => {
            logging::apply_debug(config.debug);
            true
        }
        Err(e) => {
            tracing::warn!("Config reload failed: {}", e);
            write_error(error, maxlen, &e.to_string());
            false
        }
    }
}

// Metadata exports - these return static strings for the host to display

#[no_mangle]
pub extern "C" fn structguard_get_author() -> *const c_char {
    AUTHOR.as_ptr() as *const c_char
}

#[no_mangle]
pub extern "C" fn structguard_get_name() -> *const c_char {
    NAME.as_ptr() as *const c_char
}

#[no_mangle]
pub extern "C" fn structguard_get_description() -> *const c_char {
    DESCRIPTION.as_ptr() as *const c_char
}

#[no_mangle]
pub extern "C" fn structguard_get_url() -> *const c_char {
    URL.as_ptr() as *const c_char
}

#[no_mangle]
pub extern "C" fn structguard_get_license() -> *const c_char {
    LICENSE.as_ptr() as *const c_char
}

#[no_mangle]
pub extern "C" fn structguard_get_version() -> *const c_char {
    VERSION.as_ptr() as *const c_char
}

/// Config from the loader-supplied directory
fn load_config(plugin_dir: Option<&Path>) -> ConfigResult<GuardConfig> {
    let dir = plugin_dir.ok_or(ConfigError::NoConfigDirectory)?;
    GuardConfig::load_from(&config_path_in(dir))
}

/// Convert a loader-supplied path, treating null and empty as absent
///
/// # Safety
/// - `path` must be null or a valid null-terminated string
unsafe fn path_from_c(path: *const c_char) -> Option<PathBuf> {
    if path.is_null() {
        return None;
    }
    match CStr::from_ptr(path).to_str() {
        Ok("") => None,
        Ok(s) => Some(PathBuf::from(s)),
        Err(_) => None,
    }
}

/// Helper to write an error message to a C buffer
///
/// # Safety
/// - `error` must be a valid pointer or null
/// - `maxlen` must accurately reflect the buffer size
unsafe fn write_error(error: *mut c_char, maxlen: usize, msg: &str) {
    if !error.is_null() && maxlen > 0 {
        let bytes = msg.as_bytes();
        let len = bytes.len().min(maxlen - 1);
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), error as *mut u8, len);
        *error.add(len) = 0;
    }
}
