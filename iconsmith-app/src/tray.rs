use std::path::{Path, PathBuf};

use tracing::info;

use iconsmith_core::TrayPreview;
use iconsmith_render::{load_svg, rasterize_to_width, write_png, PngMetadata};

use crate::error::AppError;

/// Render the tray preview at its fixed width; height follows the SVG.
pub(crate) fn render_tray_preview(dir: &Path, preview: &TrayPreview) -> Result<PathBuf, AppError> {
    let tree = load_svg(&dir.join(&preview.svg))?;
    let img = rasterize_to_width(&tree, preview.width)?;

    let path = dir.join(&preview.png);
    write_png(
        &img,
        &path,
        &PngMetadata {
            source: preview.svg.clone(),
        },
    )?;
    info!("Generated {} ({}x{})", preview.png, img.width(), img.height());
    Ok(path)
}
