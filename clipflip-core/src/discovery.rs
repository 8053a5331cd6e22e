//! File discovery module for finding manifest files to convert.
//!
//! This module handles the discovery of manifest files eligible for
//! conversion. Currently only searches for .xml files (case-insensitive) in
//! the top level of the provided directory.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Finds manifest files eligible for conversion in the specified directory.
///
/// This function scans the top level of the provided directory for .xml
/// files (case-insensitive) and returns their paths in name order. It does
/// not search subdirectories, and it does not apply the size limit; that is
/// the validator's job.
///
/// # Errors
///
/// * `Err(CoreError::Io)` - If the directory cannot be read
/// * `Err(CoreError::NoValidFiles)` - If no .xml files are found
pub fn find_manifest_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir)?;
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();

            if !path.is_file() {
                return None;
            }

            path.extension()
                .and_then(|ext| ext.to_str())
                .filter(|ext_str| ext_str.eq_ignore_ascii_case("xml"))
                .map(|_| path.clone())
        })
        .collect();

    if files.is_empty() {
        Err(CoreError::NoValidFiles)
    } else {
        // Deterministic batch order regardless of directory iteration order
        files.sort();
        Ok(files)
    }
}
