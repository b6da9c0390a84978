//! Ordered list of file operations making up a `generate` run.

use std::fmt;

use tracing::debug;

use crate::config::IconsConfig;
use crate::naming;
use crate::size::IconSize;

/// One file operation, with paths relative to the icons directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Render `source` into a `size x size` PNG at `output`.
    Rasterize {
        source: String,
        output: String,
        size: IconSize,
        /// Output only exists to feed a later `PackIco`.
        temporary: bool,
    },
    /// Read the listed PNGs and pack them into a single ICO.
    PackIco {
        inputs: Vec<(String, IconSize)>,
        output: String,
    },
    /// Delete intermediate files.
    Cleanup { files: Vec<String> },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Rasterize {
                source,
                output,
                size,
                temporary,
            } => {
                write!(f, "rasterize {source} -> {output} ({size})")?;
                if *temporary {
                    write!(f, " [temporary]")?;
                }
                Ok(())
            }
            Step::PackIco { inputs, output } => {
                write!(f, "pack {} images -> {output}", inputs.len())
            }
            Step::Cleanup { files } => write!(f, "remove {} intermediate files", files.len()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Plan {
    steps: Vec<Step>,
}

impl Plan {
    /// Validate `config` and lay out its steps in execution order.
    pub fn from_config(config: &IconsConfig) -> crate::Result<Self> {
        config.validate()?;

        let mut steps = Vec::new();
        let mut temporaries = Vec::with_capacity(config.raster_sizes.len());

        for &size in &config.raster_sizes {
            let output = naming::intermediate_png(size);
            temporaries.push(output.clone());
            steps.push(Step::Rasterize {
                source: config.app_svg.clone(),
                output,
                size,
                temporary: true,
            });
        }

        if let Some(tray) = &config.tray {
            steps.push(Step::Rasterize {
                source: tray.svg.clone(),
                output: tray.png.clone(),
                size: tray.size,
                temporary: false,
            });
        }

        steps.push(Step::PackIco {
            inputs: config
                .ico_sizes
                .iter()
                .map(|&s| (naming::intermediate_png(s), s))
                .collect(),
            output: config.ico_file.clone(),
        });

        for icon in config.store_logos.iter().chain(&config.general_icons) {
            steps.push(Step::Rasterize {
                source: config.app_svg.clone(),
                output: icon.file.clone(),
                size: icon.size,
                temporary: false,
            });
        }

        if !config.keep_intermediates {
            steps.push(Step::Cleanup { files: temporaries });
        }

        debug!("Planned {} steps", steps.len());
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Files that are written but expected to be gone once the plan finishes.
    pub fn temporary_files(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().filter_map(|step| match step {
            Step::Rasterize {
                output,
                temporary: true,
                ..
            } => Some(output.as_str()),
            _ => None,
        })
    }
}
