//! Structure placement interception
//!
//! Detours `APrimalStructure.IsAllowedToBuild`. Restricted fence supports are
//! refused before the engine sees them; the restricted foundation only earns
//! its owner a warning, after which the engine check runs as usual. Every
//! other placement passes straight through.

use std::ffi::c_int;
use std::ptr::NonNull;
use std::sync::LazyLock;

use structguard_sdk::{
    versions, APlayerController, APrimalStructure, FPlacementData, FRotator, FVector,
    IsAllowedToBuildFn,
};

use crate::blueprint::blueprint_path;
use crate::config::{self, NotificationStyle};
use crate::hooks::{HookBackend, HookError, NamedHook};
use crate::host::ServerApi;
use crate::structures::{RestrictedStructure, Restriction};

/// Value the engine check returns to refuse placement
pub const BUILD_DENIED: c_int = 0;

/// Outcome of matching a blueprint path against the restricted table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementVerdict {
    /// Not restricted
    Allow,
    /// Notify, then run the engine check
    Warn(RestrictedStructure),
    /// Notify and refuse without running the engine check
    Deny(RestrictedStructure),
}

/// Classify a blueprint path
pub fn evaluate(path: &str) -> PlacementVerdict {
    match RestrictedStructure::from_blueprint(path) {
        Some(s) => match s.restriction() {
            Restriction::Deny => PlacementVerdict::Deny(s),
            Restriction::Warn => PlacementVerdict::Warn(s),
        },
        None => PlacementVerdict::Allow,
    }
}

/// Run the placement check for one call
///
/// `forward` invokes the original engine check. It is called exactly once,
/// except for denied structures where it is never called and
/// [`BUILD_DENIED`] is returned.
///
/// # Safety
/// `structure` and `controller` must each be null or point to live engine objects.
pub unsafe fn intercept<A, F>(
    api: &A,
    style: &NotificationStyle,
    structure: *mut APrimalStructure,
    controller: *mut APlayerController,
    forward: F,
) -> c_int
where
    A: ServerApi + ?Sized,
    F: FnOnce() -> c_int,
{
    let Some(pc) = NonNull::new(APlayerController::as_shooter(controller)) else {
        return forward();
    };
    if structure.is_null() {
        return forward();
    }

    let path = blueprint_path(api, APrimalStructure::as_object(structure));

    match evaluate(&path) {
        PlacementVerdict::Deny(s) => {
            tracing::warn!("Denied placement of {:?} by {:p}", s, pc);
            api.send_notification(pc, style, s.message());
            BUILD_DENIED
        }
        PlacementVerdict::Warn(s) => {
            tracing::debug!("Warned about placement of {:?} by {:p}", s, pc);
            api.send_notification(pc, style, s.message());
            forward()
        }
        PlacementVerdict::Allow => forward(),
    }
}

/// Hook handle for `APrimalStructure.IsAllowedToBuild`
static IS_ALLOWED_TO_BUILD: LazyLock<NamedHook<IsAllowedToBuildFn>> = LazyLock::new(|| {
    // SAFETY: The detour has exactly the IsAllowedToBuild signature
    unsafe {
        NamedHook::new(
            versions::IS_ALLOWED_TO_BUILD,
            is_allowed_to_build_detour as *const (),
        )
    }
});

#[allow(clippy::too_many_arguments)]
unsafe extern "C" fn is_allowed_to_build_detour(
    this: *mut APrimalStructure,
    pc: *mut APlayerController,
    at_location: FVector,
    at_rotation: FRotator,
    out_placement_data: *mut FPlacementData,
    dont_adjust_for_max_range: bool,
    player_view_rotation: FRotator,
    final_placement: bool,
) -> c_int {
    let forward = || match IS_ALLOWED_TO_BUILD.original() {
        Some(original) => original(
            this,
            pc,
            at_location,
            at_rotation,
            out_placement_data,
            dont_adjust_for_max_range,
            player_view_rotation,
            final_placement,
        ),
        None => {
            tracing::error!("IsAllowedToBuild called without an original to forward to");
            BUILD_DENIED
        }
    };

    match structguard_engine::try_host() {
        Some(host) => {
            debug_assert!(
                structguard_engine::is_main_thread(),
                "IsAllowedToBuild called off the game thread"
            );
            intercept(host, &config::notification_style(), this, pc, forward)
        }
        None => forward(),
    }
}

/// Install the placement detour
pub fn install_hooks<B: HookBackend + ?Sized>(backend: &B) -> Result<(), HookError> {
    IS_ALLOWED_TO_BUILD.install(backend)
}

/// Remove the placement detour
///
/// Does nothing if it is not installed.
pub fn uninstall_hooks<B: HookBackend + ?Sized>(backend: &B) -> Result<(), HookError> {
    IS_ALLOWED_TO_BUILD.remove(backend)
}

/// Check if the placement detour is installed
pub fn is_installed() -> bool {
    IS_ALLOWED_TO_BUILD.is_installed()
}
