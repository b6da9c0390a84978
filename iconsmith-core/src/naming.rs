//! Fixed filename conventions for the Windows icon set.

use crate::size::IconSize;

/// Source SVG of the application icon.
pub const APP_SVG: &str = "icon-win.svg";
/// Multi-resolution icon container.
pub const ICO_FILE: &str = "icon-win.ico";
/// Tray icon source and output.
pub const TRAY_SVG: &str = "tray-icon-win.svg";
pub const TRAY_PNG: &str = "tray-icon-win.png";
/// Store badge, the one store logo that does not follow the `Square` pattern.
pub const STORE_LOGO: &str = "StoreLogo-win.png";
/// Cross-platform tray preview rendered at a fixed width.
pub const TRAY_PREVIEW_SVG: &str = "tray-icon.svg";
pub const TRAY_PREVIEW_PNG: &str = "tray-icon.png";

/// Intermediate raster used to assemble the ICO, e.g. `icon-win-48.png`.
pub fn intermediate_png(size: IconSize) -> String {
    format!("icon-win-{}.png", size.get())
}

/// Store tile, e.g. `Square150x150Logo-win.png`.
pub fn store_logo_png(size: IconSize) -> String {
    format!("Square{size}Logo-win.png")
}

/// General-purpose icon, e.g. `128x128-win.png`.
pub fn general_png(size: IconSize) -> String {
    format!("{size}-win.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(n: u32) -> IconSize {
        IconSize::new(n).unwrap()
    }

    #[test]
    fn names_encode_dimensions() {
        assert_eq!(intermediate_png(px(16)), "icon-win-16.png");
        assert_eq!(store_logo_png(px(44)), "Square44x44Logo-win.png");
        assert_eq!(general_png(px(256)), "256x256-win.png");
    }
}
