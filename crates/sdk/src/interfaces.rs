//! Host engine object types and the host function table
//!
//! Engine objects are opaque: the plugin only ever holds pointers to them and
//! hands those pointers back to the host. Everything the plugin needs from the
//! game's modding API is reached through [`HostApi`], a flat table of C
//! function pointers filled in by the loader shim.

use std::ffi::{c_char, c_int, c_void};

use crate::math::{FLinearColor, FRotator, FVector};

/// Opaque type for UObject
/// Root of the engine's reflected object hierarchy
#[repr(C)]
pub struct UObject {
    _opaque: [u8; 0],
}

/// Opaque type for UClass
/// Reflected class metadata, owner of the class default object
#[repr(C)]
pub struct UClass {
    _opaque: [u8; 0],
}

/// Opaque type for APrimalStructure
/// Base actor for every placeable building piece
#[repr(C)]
pub struct APrimalStructure {
    _opaque: [u8; 0],
}

/// Opaque type for APlayerController
#[repr(C)]
pub struct APlayerController {
    _opaque: [u8; 0],
}

/// Opaque type for AShooterPlayerController
/// Game-specific player controller, target of notifications
#[repr(C)]
pub struct AShooterPlayerController {
    _opaque: [u8; 0],
}

/// Opaque type for FPlacementData
/// Output record filled by the placement check
#[repr(C)]
pub struct FPlacementData {
    _opaque: [u8; 0],
}

/// Opaque type for UTexture2D
/// Optional notification icon
#[repr(C)]
pub struct UTexture2D {
    _opaque: [u8; 0],
}

impl APrimalStructure {
    /// View a structure pointer as its `UObject` base
    pub fn as_object(this: *mut APrimalStructure) -> *mut UObject {
        this.cast()
    }
}

impl APlayerController {
    /// View a controller as the game's shooter controller
    ///
    /// Every player controller on this host is an `AShooterPlayerController`.
    pub fn as_shooter(this: *mut APlayerController) -> *mut AShooterPlayerController {
        this.cast()
    }
}

/// `APrimalStructure::IsAllowedToBuild` signature
///
/// Returns non-zero when placement is permitted.
pub type IsAllowedToBuildFn = unsafe extern "C" fn(
    this: *mut APrimalStructure,
    pc: *mut APlayerController,
    at_location: FVector,
    at_rotation: FRotator,
    out_placement_data: *mut FPlacementData,
    dont_adjust_for_max_range: bool,
    player_view_rotation: FRotator,
    final_placement: bool,
) -> c_int;

/// Register a detour for a named entry point
///
/// On success the host writes the original implementation into `original`.
pub type SetHookFn = unsafe extern "C" fn(
    name: *const c_char,
    detour: *const c_void,
    original: *mut *const c_void,
) -> bool;

/// Unregister a detour previously registered with [`SetHookFn`]
pub type DisableHookFn = unsafe extern "C" fn(name: *const c_char, detour: *const c_void) -> bool;

/// Resolve an object's class (`UObjectBase::ClassField`)
///
/// Returns null when the object has no class metadata.
pub type ClassOfFn = unsafe extern "C" fn(object: *mut UObject) -> *mut UClass;

/// Write the full name of a class default object as UTF-16 into `buffer`
///
/// Returns the number of UTF-16 units the full name needs (without NUL),
/// which may exceed `capacity`, or a negative value if it cannot be resolved.
pub type DefaultObjectFullNameFn =
    unsafe extern "C" fn(class: *mut UClass, buffer: *mut u16, capacity: usize) -> isize;

/// Show a coloured, timed notification on one player's screen
///
/// `message` is a NUL-terminated UTF-16 string.
pub type SendNotificationFn = unsafe extern "C" fn(
    controller: *mut AShooterPlayerController,
    color: FLinearColor,
    text_size: f32,
    display_time: f32,
    icon: *mut UTexture2D,
    message: *const u16,
);

/// Function table handed to the plugin by the loader shim
///
/// Entries are nullable so a shim built against an older host can leave
/// unsupported services empty. The table must outlive the plugin.
#[repr(C)]
pub struct HostApi {
    /// Must equal [`HOST_API_VERSION`](crate::versions::HOST_API_VERSION)
    pub abi_version: u32,
    pub set_hook: Option<SetHookFn>,
    pub disable_hook: Option<DisableHookFn>,
    pub class_of: Option<ClassOfFn>,
    pub default_object_full_name: Option<DefaultObjectFullNameFn>,
    pub send_notification: Option<SendNotificationFn>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_entries_are_pointer_sized() {
        assert_eq!(
            std::mem::size_of::<Option<SetHookFn>>(),
            std::mem::size_of::<*const c_void>()
        );
    }

    #[test]
    fn test_casts_preserve_address() {
        let structure = 0x1000usize as *mut APrimalStructure;
        assert_eq!(APrimalStructure::as_object(structure) as usize, 0x1000);

        let pc = 0x2000usize as *mut APlayerController;
        assert_eq!(APlayerController::as_shooter(pc) as usize, 0x2000);
    }
}
