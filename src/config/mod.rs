mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./pixelforged.toml",
        "./config.toml",
        "~/.config/pixelforged/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    let convert = &config.convert;

    if convert.sizes.is_empty() {
        anyhow::bail!("At least one target width is required");
    }

    if !convert.sizes.windows(2).all(|w| w[0] < w[1]) {
        anyhow::bail!("Target widths must be strictly ascending");
    }

    if convert.sizes.contains(&0) {
        anyhow::bail!("Target widths must be non-zero");
    }

    for (name, quality) in [
        ("quality_full", convert.quality_full),
        ("quality_scaled", convert.quality_scaled),
    ] {
        if quality == 0 || quality > 100 {
            anyhow::bail!("{} must be between 1 and 100, got {}", name, quality);
        }
    }

    if convert.input_dir == convert.output_dir {
        anyhow::bail!("Input and output directories must differ");
    }

    Ok(())
}
