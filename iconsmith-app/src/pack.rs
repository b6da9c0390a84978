//! Packs whatever intermediate PNGs already exist into the ICO.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use iconsmith_core::{naming, IconsConfig};
use iconsmith_render::{ensure_exact_size, load_png_rgba, read_ico_summary, write_ico};

use crate::error::AppError;

#[derive(Debug)]
pub(crate) enum PackOutcome {
    Written {
        path: PathBuf,
        image_count: u16,
        /// Intermediate files that were not found.
        skipped: Vec<String>,
    },
    /// Not a single intermediate existed; nothing was written.
    NoImages,
}

pub(crate) fn pack_existing(dir: &Path, config: &IconsConfig) -> Result<PackOutcome, AppError> {
    let mut frames = Vec::with_capacity(config.ico_sizes.len());
    let mut skipped = Vec::new();

    for &size in &config.ico_sizes {
        let file = naming::intermediate_png(size);
        let path = dir.join(&file);
        if !path.exists() {
            warn!("{file} not found");
            skipped.push(file);
            continue;
        }
        let img = ensure_exact_size(load_png_rgba(&path)?, size);
        info!("Loaded {file}: {}x{}", img.width(), img.height());
        frames.push(img);
    }

    if frames.is_empty() {
        warn!("No images found");
        return Ok(PackOutcome::NoImages);
    }

    let path = dir.join(&config.ico_file);
    write_ico(&frames, &path)?;
    let summary = read_ico_summary(&path)?;
    info!("Generated {}: {} bytes", config.ico_file, summary.file_len);
    info!("ICO contains {} images", summary.image_count);

    Ok(PackOutcome::Written {
        path,
        image_count: summary.image_count,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconsmith_render::{write_png, PngMetadata};
    use image::{Rgba, RgbaImage};

    fn put_png(dir: &Path, name: &str, w: u32, h: u32) {
        let img = RgbaImage::from_pixel(w, h, Rgba([40, 160, 90, 255]));
        write_png(
            &img,
            &dir.join(name),
            &PngMetadata {
                source: "test".into(),
            },
        )
        .unwrap();
    }

    #[test]
    fn packs_present_sizes_and_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        put_png(dir.path(), "icon-win-16.png", 16, 16);
        // Wrong dimensions get resized to the slot they fill.
        put_png(dir.path(), "icon-win-48.png", 50, 40);

        let outcome = pack_existing(dir.path(), &IconsConfig::default()).unwrap();

        let PackOutcome::Written {
            path,
            image_count,
            skipped,
            ..
        } = outcome
        else {
            panic!("expected an ICO to be written");
        };
        assert_eq!(image_count, 2);
        assert_eq!(
            skipped,
            ["icon-win-24.png", "icon-win-32.png", "icon-win-64.png", "icon-win-256.png"]
        );
        let summary = read_ico_summary(&path).unwrap();
        let dims: Vec<_> = summary.entries.iter().map(|e| (e.width, e.height)).collect();
        assert_eq!(dims, vec![(16, 16), (48, 48)]);
    }

    #[test]
    fn nothing_to_pack_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = pack_existing(dir.path(), &IconsConfig::default()).unwrap();
        assert!(matches!(outcome, PackOutcome::NoImages));
        assert!(!dir.path().join("icon-win.ico").exists());
    }

    #[test]
    fn corrupt_intermediate_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("icon-win-16.png"), b"garbage").unwrap();
        assert!(pack_existing(dir.path(), &IconsConfig::default()).is_err());
    }
}
