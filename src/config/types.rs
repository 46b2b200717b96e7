use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,
}

/// Settings for one batch conversion run.
///
/// Every field has a default, so a missing or empty config file still
/// yields a fully usable configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConvertConfig {
    /// Directory scanned (recursively) for source images
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Directory receiving the numbered WebP outputs
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Target widths for the responsive variants, ascending
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,

    /// WebP quality for the full-size output (1-100)
    #[serde(default = "default_quality_full")]
    pub quality_full: u8,

    /// WebP quality for the width variants (1-100)
    #[serde(default = "default_quality_scaled")]
    pub quality_scaled: u8,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("media/research/shape-tuning/orig")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("media/research/shape-tuning")
}

fn default_sizes() -> Vec<u32> {
    vec![640, 960, 1280, 1600]
}

fn default_quality_full() -> u8 {
    90
}

fn default_quality_scaled() -> u8 {
    85
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            sizes: default_sizes(),
            quality_full: default_quality_full(),
            quality_scaled: default_quality_scaled(),
        }
    }
}
