//! Named hooks registered through the host hook service
//!
//! The host resolves entry points by name ("Class.Function"), patches them to
//! jump to our detour, and hands back a pointer to the original code.

use parking_lot::RwLock;
use std::ffi::{CStr, CString};
use std::marker::PhantomData;

/// Error type for hook operations
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("Host rejected hook '{0}'")]
    SetFailed(String),

    #[error("Host failed to disable hook '{0}'")]
    DisableFailed(String),

    #[error("Invalid hook name: {0:?}")]
    InvalidName(String),

    #[error("Hook already installed: {0}")]
    AlreadyInstalled(String),
}

/// Host-side hook registration
pub trait HookBackend {
    /// Detour the named entry point, returning the original implementation
    ///
    /// # Safety
    /// `detour` must match the signature of the named entry point.
    unsafe fn set_hook(&self, name: &CStr, detour: *const ()) -> Option<*const ()>;

    /// Undo a detour installed with [`HookBackend::set_hook`]
    ///
    /// # Safety
    /// `detour` must be the pointer the hook was installed with.
    unsafe fn disable_hook(&self, name: &CStr, detour: *const ()) -> bool;
}

/// Typed handle for a named hook with proper original calling
///
/// `F` is the function pointer type of the hooked entry point.
pub struct NamedHook<F> {
    name: &'static str,
    detour: *const (),
    /// Original implementation while installed
    original: RwLock<Option<*const ()>>,
    _signature: PhantomData<F>,
}

// SAFETY: The original is protected by RwLock, both pointers are code addresses
unsafe impl<F> Send for NamedHook<F> {}
unsafe impl<F> Sync for NamedHook<F> {}

impl<F: Copy> NamedHook<F> {
    const SIGNATURE_IS_FN_POINTER: () = assert!(
        std::mem::size_of::<F>() == std::mem::size_of::<*const ()>(),
        "hook signature must be a function pointer"
    );

    /// Create a hook handle
    ///
    /// # Safety
    /// `F` must be a function pointer type matching both `detour` and the
    /// host entry point called `name`.
    pub unsafe fn new(name: &'static str, detour: *const ()) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::SIGNATURE_IS_FN_POINTER;
        Self {
            name,
            detour,
            original: RwLock::new(None),
            _signature: PhantomData,
        }
    }

    fn c_name(&self) -> Result<CString, HookError> {
        CString::new(self.name).map_err(|_| HookError::InvalidName(self.name.to_string()))
    }

    /// Install the detour
    pub fn install<B: HookBackend + ?Sized>(&self, backend: &B) -> Result<(), HookError> {
        let mut original = self.original.write();
        if original.is_some() {
            return Err(HookError::AlreadyInstalled(self.name.to_string()));
        }

        let c_name = self.c_name()?;
        tracing::debug!(
            "Creating named hook '{}' -> {:x}",
            self.name,
            self.detour as usize
        );

        // SAFETY: `new` guarantees the detour matches the entry point
        let ptr = unsafe { backend.set_hook(&c_name, self.detour) }
            .ok_or_else(|| HookError::SetFailed(self.name.to_string()))?;
        *original = Some(ptr);

        tracing::info!(
            "Created named hook '{}' (original at {:x})",
            self.name,
            ptr as usize
        );
        Ok(())
    }

    /// Remove the detour, restoring original dispatch
    ///
    /// Does nothing if the hook is not installed.
    pub fn remove<B: HookBackend + ?Sized>(&self, backend: &B) -> Result<(), HookError> {
        let mut original = self.original.write();
        if original.is_none() {
            return Ok(());
        }

        let c_name = self.c_name()?;
        // SAFETY: The detour is the one the hook was installed with
        if !unsafe { backend.disable_hook(&c_name, self.detour) } {
            return Err(HookError::DisableFailed(self.name.to_string()));
        }

        *original = None;
        tracing::info!("Removed named hook '{}'", self.name);
        Ok(())
    }

    /// Check if the hook is installed
    pub fn is_installed(&self) -> bool {
        self.original.read().is_some()
    }

    /// Original implementation, or None if the hook is not installed
    pub fn original(&self) -> Option<F> {
        let ptr = (*self.original.read())?;
        // SAFETY: `new` guarantees F is a function pointer of this signature
        Some(unsafe { std::mem::transmute_copy::<*const (), F>(&ptr) })
    }
}
