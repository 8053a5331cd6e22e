// ============================================================================
// clipflip-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Conversion Limits and Options
//
// This module defines the fixed conversion limits and the per-run options
// used throughout the clipflip-core library.
//
// KEY COMPONENTS:
// - MAX_BATCH_FILES / MAX_MANIFEST_BYTES: hard input limits
// - REPORT_SUFFIX: fixed product suffix for report file names
// - ConvertOptions: per-run options created by consumers of the library
//   (like clipflip-cli) and passed to the batch converter.

// ============================================================================
// CONVERSION LIMITS
// ============================================================================

/// Maximum number of manifest files a single batch may hold, counting files
/// already accepted into the batch.
pub const MAX_BATCH_FILES: usize = 99;

/// Maximum size of a single manifest file in bytes (50 MiB exactly).
pub const MAX_MANIFEST_BYTES: u64 = 50 * 1024 * 1024;

/// Fixed product suffix appended to report file names:
/// `<mediaName>_<REPORT_SUFFIX>.csv`.
pub const REPORT_SUFFIX: &str = "ClipFlip";

// ============================================================================
// CONVERSION OPTIONS
// ============================================================================

/// Per-run options for manifest conversion.
///
/// Created by the consumer of the library (e.g., clipflip-cli) and passed to
/// [`BatchConverter::new`](crate::processing::BatchConverter::new).
///
/// # Examples
///
/// ```rust
/// use clipflip_core::ConvertOptions;
///
/// let options = ConvertOptions::default();
/// assert!(!options.quote_fields);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Apply RFC-4180 quoting to report fields containing commas, quotes,
    /// or line breaks. Off by default: the unquoted comma join is the
    /// documented report format, warts and all.
    pub quote_fields: bool,
}
