//! File discovery for input directories.
//!
//! Both processing stages scan a single flat directory for files with a
//! fixed extension. Matches are returned sorted by file name so runs are
//! deterministic regardless of filesystem order.

use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect files with `extension` directly under `dir`, sorted by file name
pub fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_extension(path, extension) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Check if a path carries the given extension
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}
