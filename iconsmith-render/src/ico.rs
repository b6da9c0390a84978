//! ICO container output and header inspection.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{ExtendedColorType, RgbaImage};
use tracing::debug;

use iconsmith_core::size::MAX_ICO_SIZE;

use crate::error::RenderError;

const HEADER_LEN: usize = 6;
const ENTRY_LEN: usize = 16;
/// `idType` value for icons (cursors use 2).
const TYPE_ICON: u16 = 1;

/// Pack `frames` into one ICO file, each frame stored PNG-compressed.
pub fn write_ico(frames: &[RgbaImage], path: &Path) -> crate::Result<()> {
    if frames.is_empty() {
        return Err(RenderError::EmptyIco);
    }

    let mut ico_frames = Vec::with_capacity(frames.len());
    for img in frames {
        let (width, height) = img.dimensions();
        if width > MAX_ICO_SIZE || height > MAX_ICO_SIZE {
            return Err(RenderError::IcoFrameTooLarge { width, height });
        }
        let frame = IcoFrame::as_png(img.as_raw(), width, height, ExtendedColorType::Rgba8)
            .map_err(|e| RenderError::image(path, e))?;
        ico_frames.push(frame);
    }

    let file = File::create(path).map_err(|e| RenderError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    IcoEncoder::new(&mut writer)
        .encode_images(&ico_frames)
        .map_err(|e| RenderError::image(path, e))?;
    writer.flush().map_err(|e| RenderError::io(path, e))?;

    debug!("Wrote ICO with {} frames to {}", frames.len(), path.display());
    Ok(())
}

/// One directory entry of an ICO file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcoEntry {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
    /// Size of the embedded image data in bytes.
    pub bytes: u32,
    pub offset: u32,
}

/// What an ICO file declares about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcoSummary {
    /// The header's image-count field.
    pub image_count: u16,
    pub entries: Vec<IcoEntry>,
    pub file_len: u64,
}

/// Read the header and directory of an ICO file.
pub fn read_ico_summary(path: &Path) -> crate::Result<IcoSummary> {
    let data = fs::read(path).map_err(|e| RenderError::io(path, e))?;
    let invalid = |reason: String| RenderError::InvalidIco {
        path: path.to_path_buf(),
        reason,
    };

    if data.len() < HEADER_LEN {
        return Err(invalid(format!("{} bytes is shorter than the header", data.len())));
    }
    let reserved = u16_at(&data, 0);
    let kind = u16_at(&data, 2);
    let image_count = u16_at(&data, 4);
    if reserved != 0 || kind != TYPE_ICON {
        return Err(invalid(format!("bad header (reserved={reserved}, type={kind})")));
    }

    let dir_end = HEADER_LEN + ENTRY_LEN * image_count as usize;
    if data.len() < dir_end {
        return Err(invalid(format!(
            "directory of {image_count} entries truncated"
        )));
    }

    let entries = data[HEADER_LEN..dir_end]
        .chunks_exact(ENTRY_LEN)
        .map(|e| IcoEntry {
            // 0 encodes 256.
            width: if e[0] == 0 { 256 } else { e[0] as u32 },
            height: if e[1] == 0 { 256 } else { e[1] as u32 },
            bits_per_pixel: u16_at(e, 6),
            bytes: u32_at(e, 8),
            offset: u32_at(e, 12),
        })
        .collect();

    Ok(IcoSummary {
        image_count,
        entries,
        file_len: data.len() as u64,
    })
}

fn u16_at(buf: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([buf[at], buf[at + 1]])
}

fn u32_at(buf: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn square(px: u32) -> RgbaImage {
        RgbaImage::from_pixel(px, px, Rgba([0, 128, 255, 255]))
    }

    #[test]
    fn count_field_matches_frames() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.ico");
        let frames: Vec<_> = [16, 32, 256].into_iter().map(square).collect();

        write_ico(&frames, &path).unwrap();
        let summary = read_ico_summary(&path).unwrap();

        assert_eq!(summary.image_count, 3);
        let dims: Vec<_> = summary.entries.iter().map(|e| (e.width, e.height)).collect();
        assert_eq!(dims, vec![(16, 16), (32, 32), (256, 256)]);
        for entry in &summary.entries {
            assert_eq!(entry.bits_per_pixel, 32);
            assert!(entry.offset as u64 + entry.bytes as u64 <= summary.file_len);
        }
    }

    #[test]
    fn empty_and_oversized_frames_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.ico");
        assert!(matches!(write_ico(&[], &path), Err(RenderError::EmptyIco)));
        assert!(matches!(
            write_ico(&[square(300)], &path),
            Err(RenderError::IcoFrameTooLarge { width: 300, .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn non_ico_files_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.ico");

        fs::write(&path, b"\x89PNG\r\n\x1a\n").unwrap();
        assert!(matches!(
            read_ico_summary(&path),
            Err(RenderError::InvalidIco { .. })
        ));

        // Valid header claiming two entries but carrying none.
        fs::write(&path, [0, 0, 1, 0, 2, 0]).unwrap();
        assert!(matches!(
            read_ico_summary(&path),
            Err(RenderError::InvalidIco { .. })
        ));
    }
}
