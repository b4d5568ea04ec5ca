pub mod config_error;
pub mod lifecycle_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use lifecycle_error::LifecycleError;
pub use store_error::StoreError;

/// Top-level error for the Engram system.
#[derive(Debug, thiserror::Error)]
pub enum EngramError {
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used across the workspace.
pub type EngramResult<T> = Result<T, EngramError>;
