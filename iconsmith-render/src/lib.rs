pub mod error;
pub mod export;
pub mod ico;
pub mod resize;
pub mod svg;

pub use error::RenderError;
pub use export::{load_png_rgba, write_png, PngMetadata};
pub use ico::{read_ico_summary, write_ico, IcoEntry, IcoSummary};
pub use resize::ensure_exact_size;
pub use svg::{load_svg, rasterize, rasterize_to_width};

// Callers hold parsed trees across several rasterizations.
pub use resvg::usvg::Tree as SvgTree;

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
