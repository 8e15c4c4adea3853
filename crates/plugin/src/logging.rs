//! Tracing subscriber setup
//!
//! The level follows `debug` in the config and can change on config reload.
//! A `RUST_LOG` filter takes precedence and is never replaced.

use std::sync::OnceLock;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Handle to the config-driven filter, absent when `RUST_LOG` is in charge
static FILTER: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Default filter when `RUST_LOG` is not set
pub(crate) fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber at `info`
///
/// Later calls (plugin reloaded into the same process) keep the first one.
pub(crate) fn init() {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .try_init();
        return;
    }

    let (filter, handle) = reload::Layer::new(EnvFilter::new(default_directive(false)));
    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init()
        .is_ok()
    {
        let _ = FILTER.set(handle);
    }
}

/// Switch between `debug` and `info` to match the config
pub(crate) fn apply_debug(debug: bool) {
    let Some(handle) = FILTER.get() else {
        return;
    };
    if let Err(e) = handle.reload(EnvFilter::new(default_directive(debug))) {
        tracing::warn!("Failed to change log level: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "info");
        assert_eq!(default_directive(true), "debug");
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();

        if std::env::var_os("RUST_LOG").is_none() {
            assert!(FILTER.get().is_some());
            assert!(tracing::enabled!(tracing::Level::INFO));
        }
    }
}
