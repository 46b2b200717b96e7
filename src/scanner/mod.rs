//! Input directory scanner.
//!
//! This module discovers source images under the input directory, orders
//! them naturally by file name, and assigns each one its 1-based output
//! index. The resulting list is the processing plan for a batch run.

use anyhow::Result;
use pixelforged_common::{paths::is_source_image, NaturalKey};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// One source image scheduled for conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// 1-based position in natural-sort order; becomes the output file stem.
    pub index: usize,
    pub path: PathBuf,
}

/// Collect all source images under `input_dir`, recursively.
///
/// Entries are sorted by the natural key of their file name; ties keep the
/// stable order of the directory walk. Indices are assigned from 1 in
/// sorted order.
pub fn scan_input_dir(input_dir: &Path) -> Result<Vec<SourceEntry>> {
    if !input_dir.is_dir() {
        anyhow::bail!("Input directory does not exist: {:?}", input_dir);
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(input_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        if !is_source_image(path) {
            debug!("Skipping non-image file: {:?}", path);
            continue;
        }
        paths.push(path.to_path_buf());
    }

    paths.sort_by_cached_key(|p| NaturalKey::from_path(p));

    Ok(paths
        .into_iter()
        .enumerate()
        .map(|(i, path)| SourceEntry { index: i + 1, path })
        .collect())
}
