//! Executes a generation [`Plan`] against an icons directory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use iconsmith_core::{IconSize, Plan, Step};
use iconsmith_render::{
    ensure_exact_size, load_png_rgba, load_svg, rasterize, read_ico_summary, write_ico, write_png,
    PngMetadata, SvgTree,
};

use crate::error::AppError;

/// Outcome of a successful `generate` run.
#[derive(Debug, Default)]
pub(crate) struct GenerateReport {
    /// Files left on disk, in the order they were written.
    pub written: Vec<PathBuf>,
    /// Image count read back from each ICO written.
    pub ico_images: Vec<u16>,
    pub removed: usize,
}

/// Runs plan steps in order, parsing each SVG source once.
struct Executor<'a> {
    dir: &'a Path,
    trees: HashMap<String, SvgTree>,
    /// Temporary outputs written so far and not yet removed.
    pending_temporaries: Vec<PathBuf>,
    report: GenerateReport,
}

/// Execute every step of `plan` inside `dir`.
///
/// If a step fails, intermediates written so far are removed before the
/// error is returned.
pub(crate) fn run_plan(dir: &Path, plan: &Plan) -> Result<GenerateReport, AppError> {
    let cleans_up = plan
        .steps()
        .iter()
        .any(|s| matches!(s, Step::Cleanup { .. }));

    let mut exec = Executor {
        dir,
        trees: HashMap::new(),
        pending_temporaries: Vec::new(),
        report: GenerateReport::default(),
    };

    for step in plan.steps() {
        debug!("Step: {step}");
        if let Err(e) = exec.run_step(step) {
            if cleans_up {
                let leftovers = std::mem::take(&mut exec.pending_temporaries);
                remove_files(&leftovers);
            }
            return Err(e);
        }
    }

    if !cleans_up {
        exec.report.written.append(&mut exec.pending_temporaries);
    }
    Ok(exec.report)
}

impl Executor<'_> {
    fn run_step(&mut self, step: &Step) -> Result<(), AppError> {
        match step {
            Step::Rasterize {
                source,
                output,
                size,
                temporary,
            } => {
                let path = self.dir.join(output);
                // Tracked before writing so a half-written file is still cleaned up.
                if *temporary {
                    self.pending_temporaries.push(path.clone());
                }
                self.render_png(source, &path, *size)?;
                info!("Generated {output} ({size})");
                if !*temporary {
                    self.report.written.push(path);
                }
            }
            Step::PackIco { inputs, output } => {
                let frames = inputs
                    .iter()
                    .map(|(file, size)| {
                        load_png_rgba(&self.dir.join(file)).map(|img| ensure_exact_size(img, *size))
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                let path = self.dir.join(output);
                write_ico(&frames, &path)?;
                let summary = read_ico_summary(&path)?;
                info!(
                    "Generated {output} ({} images, {} bytes)",
                    summary.image_count, summary.file_len
                );
                self.report.ico_images.push(summary.image_count);
                self.report.written.push(path);
            }
            Step::Cleanup { files } => {
                let paths: Vec<PathBuf> = files.iter().map(|f| self.dir.join(f)).collect();
                self.report.removed += remove_files(&paths);
                self.pending_temporaries.retain(|p| !paths.contains(p));
            }
        }
        Ok(())
    }

    fn render_png(&mut self, source: &str, path: &Path, size: IconSize) -> Result<(), AppError> {
        if !self.trees.contains_key(source) {
            let tree = load_svg(&self.dir.join(source))?;
            self.trees.insert(source.to_string(), tree);
        }
        let tree = &self.trees[source];

        let img = ensure_exact_size(rasterize(tree, size)?, size);
        write_png(
            &img,
            path,
            &PngMetadata {
                source: source.to_string(),
            },
        )?;
        Ok(())
    }
}

/// Remove each existing file; returns how many were deleted.
fn remove_files(paths: &[PathBuf]) -> usize {
    let mut removed = 0;
    for path in paths {
        if !path.exists() {
            continue;
        }
        match fs::remove_file(path) {
            Ok(()) => removed += 1,
            Err(e) => warn!("Could not remove {}: {e}", path.display()),
        }
    }
    removed
}
