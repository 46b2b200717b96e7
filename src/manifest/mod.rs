//! Image manifest generation.
//!
//! Walks a generated media directory and produces a JSON manifest mapping
//! each base image to its width variants, for consumers that build
//! `srcset`-style markup from the converter's output. Variant files are
//! recognized by the `-<width>` stem suffix the converter writes.

use anyhow::{Context, Result};
use pixelforged_common::NaturalKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// One width variant of a base image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Path relative to the scanned media directory, forward-slashed.
    pub path: String,
    /// Pixel width parsed from the file name suffix.
    pub w: u32,
}

/// Manifest entry for one base image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub original: String,
    pub variants: Vec<Variant>,
}

/// Full manifest, keyed by base image path without extension.
///
/// `BTreeMap` keeps keys sorted in the serialized output.
pub type Manifest = BTreeMap<String, ManifestEntry>;

/// Scan `media_dir` for generated WebP files and group them into a manifest.
///
/// Variants whose base image is missing are skipped with a warning rather
/// than failing the whole scan.
pub fn generate(media_dir: &Path) -> Result<Manifest> {
    if !media_dir.is_dir() {
        anyhow::bail!("Media directory does not exist: {:?}", media_dir);
    }

    let mut originals: BTreeMap<String, String> = BTreeMap::new();
    let mut variants: BTreeMap<String, Vec<Variant>> = BTreeMap::new();

    for entry in WalkDir::new(media_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_dir() || path.extension().and_then(|e| e.to_str()) != Some("webp") {
            continue;
        }

        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let rel = relative_string(path, media_dir);
        let parent_key = match rel.rfind('/') {
            Some(pos) => &rel[..pos + 1],
            None => "",
        };

        match split_width_suffix(stem) {
            Some((base, w)) => {
                variants
                    .entry(format!("{}{}", parent_key, base))
                    .or_default()
                    .push(Variant { path: rel, w });
            }
            None => {
                originals.insert(format!("{}{}", parent_key, stem), rel);
            }
        }
    }

    let mut manifest = Manifest::new();
    for (key, original) in originals {
        let mut entry_variants = variants.remove(&key).unwrap_or_default();
        entry_variants.sort_by_key(|v| v.w);
        entry_variants.dedup_by_key(|v| v.w);
        manifest.insert(
            key,
            ManifestEntry {
                original,
                variants: entry_variants,
            },
        );
    }

    for key in variants.keys() {
        warn!("Skipping variants with no base image: {}", key);
    }

    Ok(manifest)
}

/// Serialize the manifest as pretty JSON to `out_path`, creating parents.
pub fn write_manifest(manifest: &Manifest, out_path: &Path) -> Result<()> {
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create manifest directory: {:?}", parent))?;
    }

    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(out_path, json)
        .with_context(|| format!("Failed to write manifest: {:?}", out_path))?;

    Ok(())
}

/// Split a `-<width>` suffix off a file stem.
///
/// Widths are 2-4 digit numbers, matching what the converter emits; a
/// stem like `logo-2` or `report-2021-final` is not treated as a variant.
fn split_width_suffix(stem: &str) -> Option<(&str, u32)> {
    let (base, digits) = stem.rsplit_once('-')?;
    if base.is_empty() || digits.len() < 2 || digits.len() > 4 {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((base, digits.parse().ok()?))
}

fn relative_string(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Order manifest keys naturally for display purposes.
///
/// The manifest itself is keyed lexicographically; consumers that want
/// `2` before `10` can re-sort with this.
pub fn natural_key_order(manifest: &Manifest) -> Vec<&String> {
    let mut keys: Vec<&String> = manifest.keys().collect();
    keys.sort_by_cached_key(|k| NaturalKey::new(k));
    keys
}
