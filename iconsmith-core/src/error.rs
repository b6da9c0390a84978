use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from the icon model and configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid icon size: {0} (must be in 1..=1024)")]
    InvalidSize(u32),

    #[error("ICO frames cannot exceed 256 px, got {0}")]
    SizeTooLargeForIco(u32),

    #[error("ICO size {0} is not among the rasterized sizes")]
    IcoSizeNotRendered(u32),

    #[error("no ICO sizes configured")]
    EmptyIcoSizes,

    #[error("output file {0} is produced more than once")]
    DuplicateOutput(String),

    #[error("output file {0} would overwrite a source SVG")]
    OutputOverwritesSource(String),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
