use std::path::PathBuf;

use thiserror::Error;

/// Errors from rasterizing, encoding or reading icon files.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse SVG {path}: {source}")]
    Svg {
        path: PathBuf,
        #[source]
        source: resvg::usvg::Error,
    },

    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    #[error("failed to encode PNG {path}: {source}")]
    PngEncode {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },

    #[error("image error on {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("an ICO needs at least one image")]
    EmptyIco,

    #[error("ICO frames are limited to 256x256, got {width}x{height}")]
    IcoFrameTooLarge { width: u32, height: u32 },

    #[error("{path} is not a valid ICO file: {reason}")]
    InvalidIco { path: PathBuf, reason: String },
}

impl RenderError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn image(path: &std::path::Path, source: image::ImageError) -> Self {
        Self::Image {
            path: path.to_path_buf(),
            source,
        }
    }
}
