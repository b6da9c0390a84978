//! PNG export with embedded provenance (tEXt chunks).

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use crate::error::RenderError;

/// Text chunks written into every generated PNG.
pub struct PngMetadata {
    /// File the raster was rendered from, e.g. `icon-win.svg`.
    pub source: String,
}

/// Write an RGBA raster as an 8-bit PNG.
///
/// Uses the `png` crate directly (rather than `image`) to attach tEXt chunks.
pub fn write_png(img: &RgbaImage, path: &Path, metadata: &PngMetadata) -> crate::Result<()> {
    let encode_err = |source| RenderError::PngEncode {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|e| RenderError::io(path, e))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, img.width(), img.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder
        .add_text_chunk("Software".to_string(), "Iconsmith".to_string())
        .map_err(encode_err)?;
    encoder
        .add_text_chunk("Description".to_string(), build_description(img, metadata))
        .map_err(encode_err)?;

    let mut png_writer = encoder.write_header().map_err(encode_err)?;
    png_writer.write_image_data(img.as_raw()).map_err(encode_err)?;
    png_writer.finish().map_err(encode_err)?;

    debug!(
        "Wrote PNG {}x{} to {}",
        img.width(),
        img.height(),
        path.display()
    );
    Ok(())
}

/// Decode a PNG (any colour type) into RGBA8.
pub fn load_png_rgba(path: &Path) -> crate::Result<RgbaImage> {
    let img = image::open(path).map_err(|e| RenderError::image(path, e))?;
    Ok(img.to_rgba8())
}

fn build_description(img: &RgbaImage, meta: &PngMetadata) -> String {
    format!(
        "{}x{} icon rendered from {}",
        img.width(),
        img.height(),
        meta.source
    )
}
