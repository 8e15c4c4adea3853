//! structguard Plugin - FFI Layer
//!
//! This crate provides the C boundary between the host loader shim and the
//! Rust core logic. It compiles to a cdylib (.dll/.so).

pub mod ffi;
mod logging;

pub use structguard_core::shutdown;
