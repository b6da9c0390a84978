use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "iconsmith")]
#[command(author, version, about = "Generate Windows icon assets from SVG sources")]
pub struct Cli {
    /// Icons directory holding the SVG sources; outputs are written next to them
    #[arg(short, long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Config file overriding the built-in size tables (default: <dir>/iconsmith.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render every PNG, assemble the ICO and remove intermediates
    Generate,

    /// Pack existing icon-win-{size}.png files into the ICO, skipping missing ones
    Pack,

    /// Render the tray preview PNG at its fixed width
    Tray,

    /// Print the generation steps without touching disk
    Plan,
}
