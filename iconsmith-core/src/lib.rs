pub mod config;
pub mod error;
pub mod naming;
pub mod plan;
pub mod size;

// Re-export primary types for convenience.
pub use config::{IconsConfig, NamedIcon, TrayIcon, TrayPreview, CONFIG_FILE_NAME};
pub use error::CoreError;
pub use plan::{Plan, Step};
pub use size::IconSize;

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
