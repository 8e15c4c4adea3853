//! structguard SDK - Host ABI Type Definitions
//!
//! This crate contains the types shared with the host-side loader shim:
//! opaque engine objects, the `repr(C)` math structs that cross the native
//! calling convention by value, and the host function table.
//! It has no dependencies so the header generator and every other crate can
//! build against it immediately.
//!
//! # Modules
//!
//! - [`interfaces`] - Opaque engine object types and the host function table
//! - [`math`] - Vector, rotator and colour structs
//! - [`versions`] - ABI version and hooked entry point names

pub mod interfaces;
pub mod math;
pub mod versions;

pub use interfaces::*;
pub use math::*;
pub use versions::HOOKED_ENTRY_POINTS;
