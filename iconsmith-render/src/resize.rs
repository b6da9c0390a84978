use image::imageops::{self, FilterType};
use image::RgbaImage;
use tracing::debug;

use iconsmith_core::IconSize;

/// Return `img` resized to exactly `size x size` (Lanczos3), or unchanged if it already is.
pub fn ensure_exact_size(img: RgbaImage, size: IconSize) -> RgbaImage {
    let px = size.get();
    if img.dimensions() == (px, px) {
        return img;
    }
    debug!(
        "Resizing {}x{} raster to {size}",
        img.width(),
        img.height()
    );
    imageops::resize(&img, px, px, FilterType::Lanczos3)
}
