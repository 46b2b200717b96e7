use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pixelforged")]
#[command(author, version, about = "Batch image converter producing responsive WebP variants")]
pub struct Cli {
    /// Path to config file
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
    /// Convert all images in the input directory to WebP variants
    Run {
        /// Input directory (overrides config)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output directory (overrides config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Show what would be written without converting anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate a JSON manifest of converted images and their variants
    Manifest {
        /// Media directory to scan (defaults to the configured output directory)
        #[arg(long)]
        media_dir: Option<PathBuf>,

        /// Manifest file to write
        #[arg(long, default_value = "content/images-manifest.json")]
        out: PathBuf,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
