//! Core library for converting attached-media XML manifests into CSV flip
//! reports.
//!
//! This crate provides manifest file discovery and validation, manifest
//! parsing into per-clip records, CSV report serialization, and sequential
//! batch conversion with progress reporting.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use clipflip_core::{process_manifests, ConvertOptions, FsDownloadSink};
//! use std::path::{Path, PathBuf};
//!
//! let candidates = clipflip_core::find_manifest_files(Path::new("/path/to/manifests")).unwrap();
//! let files = clipflip_core::validate_candidates(&candidates, 0).unwrap();
//!
//! let sink = FsDownloadSink::new(PathBuf::from("/path/to/reports"));
//! let results = process_manifests(
//!     &ConvertOptions::default(),
//!     &files,
//!     &sink,
//!     |file, fraction| println!("{}: {:.0}%", file, fraction * 100.0),
//! ).unwrap();
//! println!("Converted {} manifests", results.len());
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod manifest;
pub mod processing;
pub mod report;
pub mod sink;
pub mod utils;
pub mod validation;

// Re-exports for public API
pub use config::{ConvertOptions, MAX_BATCH_FILES, MAX_MANIFEST_BYTES, REPORT_SUFFIX};
pub use discovery::find_manifest_files;
pub use error::{CoreError, CoreResult};
pub use manifest::{parse_manifest, ClipRecord, ConversionResult, MediaManifest};
pub use processing::{process_manifests, BatchConverter, BatchState};
pub use report::{render_report, report_filename, serialize_report};
pub use sink::{DownloadSink, FsDownloadSink};
pub use utils::{format_bytes, get_filename_safe};
pub use validation::validate_candidates;

/// Result of converting one manifest file.
///
/// Returned by the batch converter for each successfully processed manifest.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Input manifest file name
    pub filename: String,
    /// Report file name delivered to the sink
    pub report_filename: String,
    /// Number of clip records written
    pub clip_count: usize,
    /// Size of the delivered report in bytes
    pub output_size: u64,
}
