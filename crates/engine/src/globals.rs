//! Global host function storage
//!
//! The host function table is validated once during plugin load and stored here.
//! Access is thread-safe via OnceLock.

use std::ffi::{c_void, CStr};
use std::path::{Path, PathBuf};
use std::ptr::NonNull;
use std::sync::OnceLock;
use std::thread::ThreadId;

use structguard_sdk::{
    AShooterPlayerController, ClassOfFn, DefaultObjectFullNameFn, DisableHookFn, FLinearColor,
    SetHookFn, SendNotificationFn, UClass, UObject,
};

/// Initial UTF-16 buffer for full names; longer names trigger one resize
const FULL_NAME_CAPACITY: usize = 256;

/// Validated host functions
pub struct HostGlobals {
    /// Hook registration (required)
    pub set_hook: SetHookFn,

    /// Hook removal (required)
    pub disable_hook: DisableHookFn,

    /// Object class lookup (required)
    pub class_of: ClassOfFn,

    /// Class default object full name (required)
    pub default_object_full_name: DefaultObjectFullNameFn,

    /// Player notifications (optional)
    pub send_notification: Option<SendNotificationFn>,

    /// Directory the plugin was loaded from, if the loader supplied one
    plugin_dir: Option<PathBuf>,

    /// Game thread ID for thread safety checks
    pub main_thread_id: ThreadId,
}

/// Global host storage
static HOST: OnceLock<HostGlobals> = OnceLock::new();

/// Initialize host globals
///
/// Called once during plugin load. Returns error if already initialized.
pub fn init_host(globals: HostGlobals) -> Result<(), &'static str> {
    HOST.set(globals).map_err(|_| "Host already initialized")
}

/// Get host globals, or None before the plugin has loaded
pub fn try_host() -> Option<&'static HostGlobals> {
    HOST.get()
}

/// Check if current thread is the game thread
pub fn is_main_thread() -> bool {
    HOST.get()
        .map(|g| std::thread::current().id() == g.main_thread_id)
        .unwrap_or(false)
}

impl HostGlobals {
    /// Create new HostGlobals from the required host functions
    pub fn new(
        set_hook: SetHookFn,
        disable_hook: DisableHookFn,
        class_of: ClassOfFn,
        default_object_full_name: DefaultObjectFullNameFn,
    ) -> Self {
        Self {
            set_hook,
            disable_hook,
            class_of,
            default_object_full_name,
            send_notification: None,
            plugin_dir: None,
            main_thread_id: std::thread::current().id(),
        }
    }

    /// Set optional notification service
    pub fn with_send_notification(mut self, func: Option<SendNotificationFn>) -> Self {
        self.send_notification = func;
        self
    }

    /// Set plugin directory
    pub fn with_plugin_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.plugin_dir = dir;
        self
    }

    /// Directory the plugin was loaded from
    pub fn plugin_dir(&self) -> Option<&Path> {
        self.plugin_dir.as_deref()
    }

    /// Register a detour, returning the original implementation
    ///
    /// # Safety
    /// `detour` must match the signature of the named entry point.
    pub unsafe fn set_hook(&self, name: &CStr, detour: *const c_void) -> Option<*const c_void> {
        let mut original: *const c_void = std::ptr::null();
        let ok = (self.set_hook)(name.as_ptr(), detour, &mut original);
        (ok && !original.is_null()).then_some(original)
    }

    /// Unregister a detour
    ///
    /// # Safety
    /// `detour` must be the pointer passed to [`Self::set_hook`].
    pub unsafe fn disable_hook(&self, name: &CStr, detour: *const c_void) -> bool {
        (self.disable_hook)(name.as_ptr(), detour)
    }

    /// Resolve an object's class
    ///
    /// # Safety
    /// `object` must point to a live engine object.
    pub unsafe fn class_of(&self, object: NonNull<UObject>) -> Option<NonNull<UClass>> {
        NonNull::new((self.class_of)(object.as_ptr()))
    }

    /// Full name of a class's default object, e.g.
    /// `"BP_Foo_C /Game/Path/BP_Foo.Default__BP_Foo_C"`
    ///
    /// # Safety
    /// `class` must point to live class metadata.
    pub unsafe fn default_object_full_name(&self, class: NonNull<UClass>) -> Option<String> {
        let resolve = |buffer: &mut Vec<u16>| {
            let len = (self.default_object_full_name)(class.as_ptr(), buffer.as_mut_ptr(), buffer.len());
            usize::try_from(len).ok()
        };

        let mut buffer = vec![0u16; FULL_NAME_CAPACITY];
        let mut len = resolve(&mut buffer)?;

        if len > buffer.len() {
            buffer.resize(len, 0);
            len = resolve(&mut buffer)?;
            if len > buffer.len() {
                tracing::warn!("Full name grew between reads ({} > {})", len, buffer.len());
                return None;
            }
        }

        buffer.truncate(len);
        Some(String::from_utf16_lossy(&buffer))
    }

    /// Show a notification to one player
    ///
    /// Returns false when the host does not provide the notification service.
    ///
    /// # Safety
    /// `controller` must point to a live player controller.
    pub unsafe fn send_notification(
        &self,
        controller: NonNull<AShooterPlayerController>,
        color: FLinearColor,
        text_size: f32,
        display_time: f32,
        message: &str,
    ) -> bool {
        let Some(func) = self.send_notification else {
            return false;
        };

        let wide = to_wide(message);
        func(
            controller.as_ptr(),
            color,
            text_size,
            display_time,
            std::ptr::null_mut(),
            wide.as_ptr(),
        );
        true
    }
}

/// Encode as NUL-terminated UTF-16
fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
