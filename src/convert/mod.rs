//! Batch image conversion.
//!
//! Takes the scanner's ordered entry list and, for each source image,
//! writes one full-resolution WebP plus one WebP per configured target
//! width into the output directory. The pass is fully sequential; the
//! first decode or write failure aborts the whole batch.

pub mod encoder;

use crate::config::ConvertConfig;
use crate::scanner::{scan_input_dir, SourceEntry};
use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Summary of a completed batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub files_processed: usize,
    pub outputs_written: usize,
}

/// Convert every source image under the configured input directory.
///
/// Prints one `✓ <path>` progress line per completed source file. Each
/// successfully decoded source yields exactly `1 + sizes.len()` outputs;
/// any failure propagates immediately with the offending file attached as
/// context, leaving remaining files unprocessed.
pub fn run_batch(config: &ConvertConfig) -> Result<BatchReport> {
    let entries = scan_input_dir(&config.input_dir)?;

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {:?}",
            config.output_dir
        )
    })?;

    info!(
        "Converting {} files: {:?} -> {:?}",
        entries.len(),
        config.input_dir,
        config.output_dir
    );

    let mut outputs_written = 0;
    for entry in &entries {
        outputs_written += convert_entry(entry, config)
            .with_context(|| format!("Failed to convert {:?}", entry.path))?;
    }

    Ok(BatchReport {
        files_processed: entries.len(),
        outputs_written,
    })
}

/// List the files a batch run would write, in write order.
///
/// Used by dry runs; indices come from the same scan as a real run.
pub fn planned_outputs(entries: &[SourceEntry], config: &ConvertConfig) -> Vec<PathBuf> {
    let mut planned = Vec::with_capacity(entries.len() * (1 + config.sizes.len()));
    for entry in entries {
        planned.push(full_output_path(&config.output_dir, entry.index));
        for &width in &config.sizes {
            planned.push(variant_output_path(&config.output_dir, entry.index, width));
        }
    }
    planned
}

/// Decode one source image and write its full-size output and variants.
///
/// Returns the number of files written.
fn convert_entry(entry: &SourceEntry, config: &ConvertConfig) -> Result<usize> {
    debug!("Decoding {:?}", entry.path);

    // Multi-frame containers (animated GIF/WebP) decode as their first
    // frame, uniformly for every format. Normalize to 8-bit RGB, dropping
    // alpha and palette information.
    let full = DynamicImage::ImageRgb8(
        image::ImageReader::open(&entry.path)
            .with_context(|| format!("Failed to open {:?}", entry.path))?
            .with_guessed_format()
            .with_context(|| format!("Failed to probe format of {:?}", entry.path))?
            .decode()
            .with_context(|| format!("Failed to decode {:?}", entry.path))?
            .to_rgb8(),
    );

    let full_path = full_output_path(&config.output_dir, entry.index);
    encoder::write_webp(&full, config.quality_full, &full_path)?;
    let mut written = 1;

    for &width in &config.sizes {
        let variant_path = variant_output_path(&config.output_dir, entry.index, width);
        match scaled_variant(&full, width) {
            Some(scaled) => encoder::write_webp(&scaled, config.quality_scaled, &variant_path)?,
            None => encoder::write_webp(&full, config.quality_scaled, &variant_path)?,
        }
        written += 1;
    }

    println!("✓ {}", full_path.display());
    Ok(written)
}

fn full_output_path(output_dir: &Path, index: usize) -> PathBuf {
    output_dir.join(format!("{}.webp", index))
}

fn variant_output_path(output_dir: &Path, index: usize, width: u32) -> PathBuf {
    output_dir.join(format!("{}-{}.webp", index, width))
}

/// Downscale to `target_width` preserving aspect ratio.
///
/// Returns `None` when the target is not smaller than the source width:
/// variants are never upscaled, the caller reuses the full image instead.
/// The new height is `floor(height * target_width / width)`.
fn scaled_variant(img: &DynamicImage, target_width: u32) -> Option<DynamicImage> {
    let (width, height) = (img.width(), img.height());
    if target_width >= width {
        return None;
    }

    let new_height = ((u64::from(height) * u64::from(target_width)) / u64::from(width)) as u32;
    Some(img.resize_exact(target_width, new_height, FilterType::Lanczos3))
}
