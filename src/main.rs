mod cli;

use pixelforged::{config, convert, manifest, scanner};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "pixelforged=trace,pixelforged_common=debug".to_string()
        } else {
            "pixelforged=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .init();

    match cli.command {
        Commands::Run {
            input,
            output,
            dry_run,
        } => run_convert(cli.config.as_deref(), input, output, dry_run),
        Commands::Manifest { media_dir, out } => {
            run_manifest(cli.config.as_deref(), media_dir, &out)
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("pixelforged {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn run_convert(
    config_path: Option<&Path>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    // Override directories from CLI if specified
    if let Some(input) = input {
        config.convert.input_dir = input;
    }
    if let Some(output) = output {
        config.convert.output_dir = output;
    }

    if dry_run {
        let entries = scanner::scan_input_dir(&config.convert.input_dir)?;
        println!(
            "[DRY RUN] {} source files, {} outputs:",
            entries.len(),
            entries.len() * (1 + config.convert.sizes.len())
        );
        for path in convert::planned_outputs(&entries, &config.convert) {
            println!("  {}", path.display());
        }
        return Ok(());
    }

    let report = convert::run_batch(&config.convert)?;
    tracing::debug!(
        "Batch complete: {} files, {} outputs",
        report.files_processed,
        report.outputs_written
    );
    println!("Done.");

    Ok(())
}

fn run_manifest(
    config_path: Option<&Path>,
    media_dir: Option<PathBuf>,
    out: &Path,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let media_dir = media_dir.unwrap_or(config.convert.output_dir);

    let manifest = manifest::generate(&media_dir)?;
    manifest::write_manifest(&manifest, out)?;

    println!("✔ Manifest written: {} ({} entries)", out.display(), manifest.len());

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Input: {:?}", config.convert.input_dir);
            println!("  Output: {:?}", config.convert.output_dir);
            println!(
                "  Sizes: {}",
                config
                    .convert
                    .sizes
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            println!(
                "  Quality: {} full / {} scaled",
                config.convert.quality_full, config.convert.quality_scaled
            );
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Input: {:?}", config.convert.input_dir);
            println!("  Output: {:?}", config.convert.output_dir);
        }
    }

    Ok(())
}
