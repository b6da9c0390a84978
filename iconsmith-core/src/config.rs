use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::error::CoreError;
use crate::naming;
use crate::size::{sizes, IconSize};

/// Optional override file looked up in the icons directory.
pub const CONFIG_FILE_NAME: &str = "iconsmith.json";

// ---------------------------------------------------------------------------
// Table entries
// ---------------------------------------------------------------------------

/// A raster written under a fixed filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedIcon {
    pub file: String,
    pub size: IconSize,
}

impl NamedIcon {
    fn new(file: impl Into<String>, size: IconSize) -> Self {
        Self {
            file: file.into(),
            size,
        }
    }
}

/// Square tray icon rendered from its own SVG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrayIcon {
    pub svg: String,
    pub png: String,
    pub size: IconSize,
}

/// Tray preview: fixed width, height follows the SVG aspect ratio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrayPreview {
    pub svg: String,
    pub png: String,
    pub width: IconSize,
}

// ---------------------------------------------------------------------------
// Icon set configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconsConfig {
    #[serde(default = "default_app_svg")]
    pub app_svg: String,
    /// Sizes rendered to temporary `icon-win-{n}.png` files.
    #[serde(default = "default_raster_sizes")]
    pub raster_sizes: Vec<IconSize>,
    /// Subset of `raster_sizes` packed into the ICO container.
    #[serde(default = "default_ico_sizes")]
    pub ico_sizes: Vec<IconSize>,
    #[serde(default = "default_ico_file")]
    pub ico_file: String,
    /// `null` skips the tray icon.
    #[serde(default = "default_tray")]
    pub tray: Option<TrayIcon>,
    #[serde(default = "default_store_logos")]
    pub store_logos: Vec<NamedIcon>,
    #[serde(default = "default_general_icons")]
    pub general_icons: Vec<NamedIcon>,
    /// Leave the intermediate PNGs on disk after the ICO is written.
    #[serde(default)]
    pub keep_intermediates: bool,
    #[serde(default = "default_tray_preview")]
    pub tray_preview: TrayPreview,
}

fn default_app_svg() -> String {
    naming::APP_SVG.into()
}
fn default_raster_sizes() -> Vec<IconSize> {
    sizes(&[16, 24, 32, 48, 64, 128, 256])
}
fn default_ico_sizes() -> Vec<IconSize> {
    sizes(&[16, 24, 32, 48, 64, 256])
}
fn default_ico_file() -> String {
    naming::ICO_FILE.into()
}
fn default_tray() -> Option<TrayIcon> {
    Some(TrayIcon {
        svg: naming::TRAY_SVG.into(),
        png: naming::TRAY_PNG.into(),
        size: sizes(&[32])[0],
    })
}
fn default_store_logos() -> Vec<NamedIcon> {
    let mut logos: Vec<NamedIcon> = sizes(&[30, 44, 71, 89, 107, 142, 150, 284, 310])
        .into_iter()
        .map(|s| NamedIcon::new(naming::store_logo_png(s), s))
        .collect();
    logos.push(NamedIcon::new(naming::STORE_LOGO, sizes(&[50])[0]));
    logos
}
fn default_general_icons() -> Vec<NamedIcon> {
    sizes(&[32, 64, 128, 256])
        .into_iter()
        .map(|s| NamedIcon::new(naming::general_png(s), s))
        .collect()
}
fn default_tray_preview() -> TrayPreview {
    TrayPreview {
        svg: naming::TRAY_PREVIEW_SVG.into(),
        png: naming::TRAY_PREVIEW_PNG.into(),
        width: sizes(&[44])[0],
    }
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            app_svg: default_app_svg(),
            raster_sizes: default_raster_sizes(),
            ico_sizes: default_ico_sizes(),
            ico_file: default_ico_file(),
            tray: default_tray(),
            store_logos: default_store_logos(),
            general_icons: default_general_icons(),
            keep_intermediates: false,
            tray_preview: default_tray_preview(),
        }
    }
}

impl IconsConfig {
    /// Load `iconsmith.json` from `dir`, falling back to the built-in tables.
    pub fn load(dir: &Path) -> Self {
        let path = config_path(dir);
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                info!("Loaded icon config from {}", path.display());
                config
            }
            Err(e) => {
                error!("{e}; using built-in icon tables");
                Self::default()
            }
        }
    }

    /// Load an explicitly named config file. Unlike [`IconsConfig::load`], failures are returned.
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| CoreError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check cross-table constraints that serde alone cannot express.
    pub fn validate(&self) -> crate::Result<()> {
        if self.ico_sizes.is_empty() {
            return Err(CoreError::EmptyIcoSizes);
        }
        for &size in &self.ico_sizes {
            if !size.fits_ico() {
                return Err(CoreError::SizeTooLargeForIco(size.get()));
            }
            if !self.raster_sizes.contains(&size) {
                return Err(CoreError::IcoSizeNotRendered(size.get()));
            }
        }

        let sources = self.source_files();
        let mut seen = HashSet::new();
        for file in self.output_files() {
            if sources.contains(&file.as_str()) {
                return Err(CoreError::OutputOverwritesSource(file));
            }
            if !seen.insert(file.clone()) {
                return Err(CoreError::DuplicateOutput(file));
            }
        }
        Ok(())
    }

    /// SVG files a `generate` run reads.
    pub fn source_files(&self) -> Vec<&str> {
        let mut files = vec![self.app_svg.as_str()];
        files.extend(self.tray.iter().map(|t| t.svg.as_str()));
        files
    }

    /// Every file a `generate` run writes, intermediates included.
    pub fn output_files(&self) -> Vec<String> {
        let mut files: Vec<String> = self
            .raster_sizes
            .iter()
            .map(|&s| naming::intermediate_png(s))
            .collect();
        files.extend(self.tray.iter().map(|t| t.png.clone()));
        files.push(self.ico_file.clone());
        files.extend(
            self.store_logos
                .iter()
                .chain(&self.general_icons)
                .map(|icon| icon.file.clone()),
        );
        files
    }
}

fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}
