mod cli;
mod error;
mod pack;
mod pipeline;
mod tray;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use iconsmith_core::{IconsConfig, Plan};

use cli::{Cli, Commands};
use error::AppError;
use pack::PackOutcome;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = log_directives(cli.verbose, env.as_deref());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = load_config(&cli.dir, cli.config.as_deref())?;

    match cli.command {
        Commands::Generate => {
            let plan = Plan::from_config(&config)?;
            info!("Generating Windows icons in {}", cli.dir.display());
            let report = pipeline::run_plan(&cli.dir, &plan)?;
            for path in &report.written {
                debug!("Wrote {}", path.display());
            }
            info!(
                "Done! {} files written ({} ICO images), {} intermediates removed",
                report.written.len(),
                report.ico_images.iter().sum::<u16>(),
                report.removed
            );
        }
        Commands::Pack => match pack::pack_existing(&cli.dir, &config)? {
            PackOutcome::Written {
                path,
                image_count,
                skipped,
            } => {
                if !skipped.is_empty() {
                    warn!("{} packed without {}", path.display(), skipped.join(", "));
                }
                debug!("{} holds {image_count} images", path.display());
            }
            PackOutcome::NoImages => {}
        },
        Commands::Tray => {
            tray::render_tray_preview(&cli.dir, &config.tray_preview)?;
        }
        Commands::Plan => {
            let plan = Plan::from_config(&config)?;
            for (i, step) in plan.steps().iter().enumerate() {
                println!("{:>3}. {step}", i + 1);
            }
        }
    }
    Ok(())
}

/// `-v` wins over `RUST_LOG`; without either, log at `info`.
fn log_directives(verbose: bool, env: Option<&str>) -> &str {
    if verbose {
        return "debug";
    }
    match env {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ => "info",
    }
}

/// An explicit `--config` must load; the implicit one falls back to defaults.
fn load_config(dir: &Path, explicit: Option<&Path>) -> Result<IconsConfig, AppError> {
    match explicit {
        Some(path) => Ok(IconsConfig::load_from(path)?),
        None => Ok(IconsConfig::load(dir)),
    }
}
