//! ABI version and hooked entry point names
//!
//! Entry point names must match exactly what the host hook service resolves.

/// Version of the [`HostApi`](crate::HostApi) layout this plugin was built against.
///
/// Bump when fields are added, removed or reordered.
pub const HOST_API_VERSION: u32 = 1;

/// Structure placement validation
pub const IS_ALLOWED_TO_BUILD: &str = "APrimalStructure.IsAllowedToBuild";

/// All entry points this plugin hooks, for logging at load time
pub const HOOKED_ENTRY_POINTS: &[&str] = &[IS_ALLOWED_TO_BUILD];
