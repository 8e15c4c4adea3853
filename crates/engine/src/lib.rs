//! structguard Engine - Host Function Table Loading and Global Storage
//!
//! This crate handles:
//! - Validating the [`HostApi`](structguard_sdk::HostApi) table handed over by the loader shim
//! - Storing the validated host functions in a write-once global
//! - Thin wrappers that convert between engine strings and Rust strings
//!
//! # Architecture
//!
//! The table is validated once during plugin load via [`loader::load_host`]
//! and stored in [`globals::HostGlobals`]. Access is provided via the
//! [`try_host()`] function.
//!
//! # Thread Safety
//!
//! Host functions may only be called from the game thread. The thread that
//! loaded the plugin is recorded for runtime checks via [`is_main_thread()`].

pub mod error;
pub mod globals;
pub mod loader;

pub use error::HostError;
pub use globals::{init_host, is_main_thread, try_host, HostGlobals};
pub use loader::load_host;
