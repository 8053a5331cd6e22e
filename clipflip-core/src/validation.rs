//! Candidate validation for incoming manifest files.
//!
//! Applies the batch admission rules before any processing starts: a hard
//! cardinality limit over the whole batch, then a per-file filter on
//! extension and on-disk size. Files failing the filter are dropped
//! silently; the caller can compare input and output counts for the
//! aggregate signal.

use crate::config::{MAX_BATCH_FILES, MAX_MANIFEST_BYTES};
use crate::error::{CoreError, CoreResult};

use log::debug;
use std::path::{Path, PathBuf};

/// Validates candidate manifest files for admission into a batch.
///
/// Fails with [`CoreError::TooManyFiles`] when `already_accepted` plus the
/// incoming candidates would exceed [`MAX_BATCH_FILES`]; in that case the
/// entire incoming set is rejected, never partially admitted. Otherwise the
/// candidates are filtered to files whose name ends case-insensitively in
/// `.xml` and whose size is at most [`MAX_MANIFEST_BYTES`]. Candidates that
/// cannot be stat'ed are treated like oversized ones and dropped.
///
/// # Errors
///
/// * [`CoreError::TooManyFiles`] - batch cardinality limit exceeded
/// * [`CoreError::NoValidFiles`] - the filter left nothing to process
pub fn validate_candidates(
    candidates: &[PathBuf],
    already_accepted: usize,
) -> CoreResult<Vec<PathBuf>> {
    if already_accepted + candidates.len() > MAX_BATCH_FILES {
        return Err(CoreError::TooManyFiles {
            requested: candidates.len(),
            already_accepted,
            limit: MAX_BATCH_FILES,
        });
    }

    let accepted: Vec<PathBuf> = candidates
        .iter()
        .filter(|path| is_valid_manifest_file(path))
        .cloned()
        .collect();

    if accepted.is_empty() {
        Err(CoreError::NoValidFiles)
    } else {
        Ok(accepted)
    }
}

/// Checks if the given path is a manifest file that can be processed:
/// a case-insensitive `.xml` name no larger than [`MAX_MANIFEST_BYTES`].
#[must_use]
pub fn is_valid_manifest_file(path: &Path) -> bool {
    let has_xml_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_ascii_lowercase().ends_with(".xml"))
        .unwrap_or(false);
    if !has_xml_name {
        return false;
    }

    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => metadata.len() <= MAX_MANIFEST_BYTES,
        Ok(_) => false,
        Err(e) => {
            debug!("Dropping unreadable candidate {}: {}", path.display(), e);
            false
        }
    }
}
