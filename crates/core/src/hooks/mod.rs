//! Hook system
//!
//! Detours are registered through the host's named hook service: the plugin
//! names an engine entry point, supplies a replacement, and receives the
//! original implementation back for pass-through calls.

pub mod named;

pub use named::{HookBackend, HookError, NamedHook};
