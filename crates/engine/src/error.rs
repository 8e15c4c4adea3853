//! Error types for host function table loading

/// Error type for host loading operations
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Loader passed a null function table
    #[error("Host function table is null")]
    NullTable,

    /// Table layout does not match what this plugin was built against
    #[error("Host ABI version mismatch: host {host}, plugin {plugin}")]
    AbiMismatch { host: u32, plugin: u32 },

    /// A required table entry was left empty
    #[error("Host function missing: {0}")]
    MissingFunction(&'static str),

    /// Host already initialized
    #[error("Host already initialized")]
    AlreadyInitialized,
}
