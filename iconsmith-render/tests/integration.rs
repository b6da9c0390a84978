use std::fs;
use std::path::Path;

use iconsmith_core::IconSize;
use iconsmith_render::{
    ensure_exact_size, load_png_rgba, load_svg, rasterize, read_ico_summary, write_ico, write_png,
    PngMetadata,
};

const LOGO: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 64 64">
    <circle cx="32" cy="32" r="30" fill="#e0457b"/>
    <rect x="20" y="20" width="24" height="24" fill="#ffffff"/>
</svg>"##;

fn write_logo(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("icon-win.svg");
    fs::write(&path, LOGO).unwrap();
    path
}

fn px(n: u32) -> IconSize {
    IconSize::new(n).unwrap()
}

#[test]
fn every_raster_matches_requested_size() {
    let dir = tempfile::tempdir().unwrap();
    let tree = load_svg(&write_logo(dir.path())).unwrap();

    for n in [16, 24, 30, 44, 71, 89, 107, 142, 150, 284, 310] {
        let out = dir.path().join(format!("{n}.png"));
        let img = ensure_exact_size(rasterize(&tree, px(n)).unwrap(), px(n));
        write_png(
            &img,
            &out,
            &PngMetadata {
                source: "icon-win.svg".into(),
            },
        )
        .unwrap();

        let back = load_png_rgba(&out).unwrap();
        assert_eq!(back.dimensions(), (n, n), "size {n}");
    }
}

#[test]
fn rendered_logo_has_content_and_transparent_corners() {
    let dir = tempfile::tempdir().unwrap();
    let tree = load_svg(&write_logo(dir.path())).unwrap();
    let img = rasterize(&tree, px(64)).unwrap();

    assert_eq!(img.get_pixel(0, 0)[3], 0, "corner outside the circle");
    assert_eq!(img.get_pixel(32, 32).0, [255, 255, 255, 255]);
}

#[test]
fn ico_from_pngs_counts_every_size() {
    let dir = tempfile::tempdir().unwrap();
    let tree = load_svg(&write_logo(dir.path())).unwrap();
    let sizes = [16, 24, 32, 48, 64, 256];

    let frames: Vec<_> = sizes
        .iter()
        .map(|&n| rasterize(&tree, px(n)).unwrap())
        .collect();
    let ico = dir.path().join("icon-win.ico");
    write_ico(&frames, &ico).unwrap();

    let summary = read_ico_summary(&ico).unwrap();
    assert_eq!(summary.image_count as usize, sizes.len());
    assert_eq!(
        summary.entries.iter().map(|e| e.width).collect::<Vec<_>>(),
        sizes.to_vec()
    );
    assert_eq!(summary.file_len, fs::metadata(&ico).unwrap().len());
}

#[test]
fn unparsable_svg_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.svg");
    fs::write(&path, "<svg").unwrap();
    let err = load_svg(&path).unwrap_err();
    assert!(err.to_string().contains("broken.svg"));
}
