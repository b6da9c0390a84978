//! SVG parsing and rasterization through resvg.

use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use tracing::debug;

use iconsmith_core::IconSize;

use crate::error::RenderError;

/// Read and parse an SVG. Relative resources resolve against the file's directory.
pub fn load_svg(path: &Path) -> crate::Result<Tree> {
    let data = fs::read(path).map_err(|e| RenderError::io(path, e))?;

    let mut opt = Options::default();
    opt.resources_dir = fs::canonicalize(path)
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));

    let tree = Tree::from_data(&data, &opt).map_err(|source| RenderError::Svg {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "Parsed {} ({}x{})",
        path.display(),
        tree.size().width(),
        tree.size().height()
    );
    Ok(tree)
}

/// Render `tree` onto a transparent `size x size` canvas.
///
/// The drawing is scaled uniformly so its longer side fills the canvas and is
/// centred along the shorter side.
pub fn rasterize(tree: &Tree, size: IconSize) -> crate::Result<RgbaImage> {
    let px = size.get() as f32;
    let svg_size = tree.size();
    let scale = (px / svg_size.width()).min(px / svg_size.height());
    let dx = (px - svg_size.width() * scale) / 2.0;
    let dy = (px - svg_size.height() * scale) / 2.0;

    let transform = Transform::from_scale(scale, scale).post_translate(dx, dy);
    render_into(tree, size.get(), size.get(), transform)
}

/// Render `tree` at a fixed width, the height following the drawing's aspect ratio.
pub fn rasterize_to_width(tree: &Tree, width: IconSize) -> crate::Result<RgbaImage> {
    let svg_size = tree.size();
    let scale = width.get() as f32 / svg_size.width();
    let height = (svg_size.height() * scale).round() as u32;

    render_into(
        tree,
        width.get(),
        height,
        Transform::from_scale(scale, scale),
    )
}

fn render_into(
    tree: &Tree,
    width: u32,
    height: u32,
    transform: Transform,
) -> crate::Result<RgbaImage> {
    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Canvas { width, height })?;
    resvg::render(tree, transform, &mut pixmap.as_mut());
    Ok(to_straight_rgba(&pixmap))
}

/// tiny-skia stores premultiplied alpha; PNG and ICO want straight alpha.
fn to_straight_rgba(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    img
}
