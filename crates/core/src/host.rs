//! Host services used by the placement hook
//!
//! [`ServerApi`] is the slice of the game's modding API the interceptor needs:
//! reflection to name an object's class and notifications to reach a player.
//! The loaded [`HostGlobals`] implement it, and also act as the
//! [`HookBackend`] for installing detours.

use std::ffi::CStr;
use std::ptr::NonNull;

use structguard_engine::HostGlobals;
use structguard_sdk::{AShooterPlayerController, UClass, UObject};

use crate::config::NotificationStyle;
use crate::hooks::HookBackend;

/// Reflection and notification services of the host
pub trait ServerApi {
    /// Resolve an object's class
    ///
    /// # Safety
    /// `object` must point to a live engine object.
    unsafe fn class_of(&self, object: NonNull<UObject>) -> Option<NonNull<UClass>>;

    /// Full name of a class's default object
    ///
    /// # Safety
    /// `class` must point to live class metadata.
    unsafe fn default_object_full_name(&self, class: NonNull<UClass>) -> Option<String>;

    /// Show a message on one player's screen
    ///
    /// # Safety
    /// `controller` must point to a live player controller.
    unsafe fn send_notification(
        &self,
        controller: NonNull<AShooterPlayerController>,
        style: &NotificationStyle,
        message: &str,
    );
}

impl ServerApi for HostGlobals {
    unsafe fn class_of(&self, object: NonNull<UObject>) -> Option<NonNull<UClass>> {
        HostGlobals::class_of(self, object)
    }

    unsafe fn default_object_full_name(&self, class: NonNull<UClass>) -> Option<String> {
        HostGlobals::default_object_full_name(self, class)
    }

    unsafe fn send_notification(
        &self,
        controller: NonNull<AShooterPlayerController>,
        style: &NotificationStyle,
        message: &str,
    ) {
        let sent = HostGlobals::send_notification(
            self,
            controller,
            style.linear_color(),
            style.text_size,
            style.display_time,
            message,
        );

        if !sent {
            // Fall back to logging
            tracing::info!("[Notification {:p}] {}", controller, message);
        }
    }
}

impl HookBackend for HostGlobals {
    unsafe fn set_hook(&self, name: &CStr, detour: *const ()) -> Option<*const ()> {
        HostGlobals::set_hook(self, name, detour.cast()).map(|original| original.cast())
    }

    unsafe fn disable_hook(&self, name: &CStr, detour: *const ()) -> bool {
        HostGlobals::disable_hook(self, name, detour.cast())
    }
}
