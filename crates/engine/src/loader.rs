//! Host function table validation

use std::path::PathBuf;

use structguard_sdk::{versions, HostApi};

use crate::error::HostError;
use crate::globals::HostGlobals;

/// Validate the host function table and build the globals from it
///
/// Called during plugin load with the table the loader shim filled in.
///
/// # Arguments
/// * `api` - Host function table, must outlive the plugin
/// * `plugin_dir` - Directory the plugin was loaded from, if known
///
/// # Safety
/// `api` must be null or point to a valid, initialized `HostApi`.
#[tracing::instrument(skip_all)]
pub unsafe fn load_host(
    api: *const HostApi,
    plugin_dir: Option<PathBuf>,
) -> Result<HostGlobals, HostError> {
    let api = api.as_ref().ok_or(HostError::NullTable)?;

    if api.abi_version != versions::HOST_API_VERSION {
        return Err(HostError::AbiMismatch {
            host: api.abi_version,
            plugin: versions::HOST_API_VERSION,
        });
    }

    // Required functions - fail if any are missing
    let set_hook = api.set_hook.ok_or(HostError::MissingFunction("set_hook"))?;
    let disable_hook = api
        .disable_hook
        .ok_or(HostError::MissingFunction("disable_hook"))?;
    let class_of = api.class_of.ok_or(HostError::MissingFunction("class_of"))?;
    let default_object_full_name = api
        .default_object_full_name
        .ok_or(HostError::MissingFunction("default_object_full_name"))?;

    // Optional functions - log but don't fail
    if api.send_notification.is_some() {
        tracing::info!("send_notification: available");
    } else {
        tracing::warn!("send_notification: not available, notifications will only be logged");
    }

    if let Some(ref dir) = plugin_dir {
        tracing::info!("Plugin directory: {}", dir.display());
    } else {
        tracing::debug!("Plugin directory: not supplied");
    }

    let globals = HostGlobals::new(set_hook, disable_hook, class_of, default_object_full_name)
        .with_send_notification(api.send_notification)
        .with_plugin_dir(plugin_dir);

    Ok(globals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::{c_char, c_void};
    use structguard_sdk::{UClass, UObject};

    unsafe extern "C" fn set_hook(_: *const c_char, _: *const c_void, _: *mut *const c_void) -> bool {
        true
    }

    unsafe extern "C" fn disable_hook(_: *const c_char, _: *const c_void) -> bool {
        true
    }

    unsafe extern "C" fn class_of(_: *mut UObject) -> *mut UClass {
        std::ptr::null_mut()
    }

    unsafe extern "C" fn full_name(_: *mut UClass, _: *mut u16, _: usize) -> isize {
        -1
    }

    fn complete_api() -> HostApi {
        HostApi {
            abi_version: versions::HOST_API_VERSION,
            set_hook: Some(set_hook),
            disable_hook: Some(disable_hook),
            class_of: Some(class_of),
            default_object_full_name: Some(full_name),
            send_notification: None,
        }
    }

    #[test]
    fn test_null_table() {
        let result = unsafe { load_host(std::ptr::null(), None) };
        assert!(matches!(result, Err(HostError::NullTable)));
    }

    #[test]
    fn test_abi_mismatch() {
        let api = HostApi {
            abi_version: versions::HOST_API_VERSION + 1,
            ..complete_api()
        };
        let result = unsafe { load_host(&api, None) };
        assert!(matches!(result, Err(HostError::AbiMismatch { .. })));
    }

    #[test]
    fn test_missing_required_function() {
        let api = HostApi {
            class_of: None,
            ..complete_api()
        };
        let result = unsafe { load_host(&api, None) };
        assert!(matches!(result, Err(HostError::MissingFunction("class_of"))));
    }

    #[test]
    fn test_optional_notification() {
        let api = complete_api();
        let globals = unsafe { load_host(&api, Some(PathBuf::from("/plugins/structguard"))) }
            .expect("complete table should load");
        assert!(globals.send_notification.is_none());
        assert_eq!(
            globals.plugin_dir(),
            Some(std::path::Path::new("/plugins/structguard"))
        );
    }
}
