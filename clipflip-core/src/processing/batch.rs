// ============================================================================
// clipflip-core/src/processing/batch.rs
// ============================================================================
//
// BATCH CONVERSION: Main Manifest Conversion Orchestration
//
// This module houses the batch conversion orchestration logic for the
// clipflip-core library. It sequences each validated manifest file through
// read, parse, and serialize steps, hands the finished report to the
// download sink, and reports per-file progress back to the caller.
//
// WORKFLOW:
// For each manifest file i of n, strictly in input order:
//   a. Emit progress i/n before starting
//   b. Read the raw manifest bytes
//   c. Parse the manifest into a media header plus clip records
//   d. Serialize the CSV report
//   e. Deliver the report bytes to the download sink
//   f. Emit progress (i+1)/n
// Any failure aborts the remaining batch immediately; reports already
// delivered are retained.

// ---- Internal crate imports ----
use crate::config::ConvertOptions;
use crate::error::{CoreError, CoreResult};
use crate::manifest::parse_manifest;
use crate::report::{report_filename, serialize_report};
use crate::sink::DownloadSink;
use crate::utils::get_filename_safe;
use crate::ConvertResult;

// ---- External crate imports ----
use log::{error, info};

// ---- Standard library imports ----
use std::path::{Path, PathBuf};

/// Lifecycle of one batch job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Idle,
    Running,
    Completed,
    Aborted,
}

/// Drives a bounded batch of manifest conversions.
///
/// One instance runs at most one batch: `process_all` transitions
/// `Idle -> Running -> {Completed | Aborted}` and rejects any further
/// invocation once the job has left `Idle`. Files are processed strictly
/// sequentially in input order; there is no cancellation once a batch has
/// started.
pub struct BatchConverter {
    options: ConvertOptions,
    state: BatchState,
}

impl BatchConverter {
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            state: BatchState::Idle,
        }
    }

    /// Current job state.
    pub fn state(&self) -> BatchState {
        self.state
    }

    /// Processes the given manifest files in order, delivering one report
    /// per file to `sink` and emitting `(file_name, fraction)` progress
    /// events before and after each file.
    ///
    /// On the first failure (unreadable file, malformed XML, or a sink
    /// error) the job transitions to `Aborted` and the error is returned;
    /// no further files are attempted and earlier deliveries stand.
    ///
    /// # Errors
    ///
    /// * [`CoreError::OperationFailed`] - the converter already ran a batch
    /// * [`CoreError::Io`] - a manifest file could not be read
    /// * [`CoreError::MalformedXml`] - a manifest failed to parse
    pub fn process_all<S, F>(
        &mut self,
        files: &[PathBuf],
        sink: &S,
        mut on_progress: F,
    ) -> CoreResult<Vec<ConvertResult>>
    where
        S: DownloadSink,
        F: FnMut(&str, f64),
    {
        if self.state != BatchState::Idle {
            return Err(CoreError::OperationFailed(format!(
                "batch converter already used (state: {:?}); one batch per instance",
                self.state
            )));
        }
        self.state = BatchState::Running;

        let total = files.len();
        let mut results: Vec<ConvertResult> = Vec::with_capacity(total);

        for (index, input_path) in files.iter().enumerate() {
            let filename = match get_filename_safe(input_path) {
                Ok(name) => name,
                Err(e) => {
                    self.state = BatchState::Aborted;
                    return Err(e);
                }
            };

            on_progress(&filename, index as f64 / total as f64);
            info!("Converting: {}", filename);

            match convert_one(input_path, &filename, &self.options, sink) {
                Ok(result) => {
                    info!(
                        "Completed: {} ({} clips -> {})",
                        filename, result.clip_count, result.report_filename
                    );
                    on_progress(&filename, (index + 1) as f64 / total as f64);
                    results.push(result);
                }
                Err(e) => {
                    error!(
                        "Conversion failed for {}: {}. Aborting remaining batch.",
                        filename, e
                    );
                    self.state = BatchState::Aborted;
                    return Err(e);
                }
            }
        }

        self.state = BatchState::Completed;
        Ok(results)
    }
}

/// Processes a list of manifest files with a one-shot converter.
///
/// Convenience wrapper over [`BatchConverter`] for callers that do not need
/// to inspect the job state afterwards.
pub fn process_manifests<S, F>(
    options: &ConvertOptions,
    files: &[PathBuf],
    sink: &S,
    on_progress: F,
) -> CoreResult<Vec<ConvertResult>>
where
    S: DownloadSink,
    F: FnMut(&str, f64),
{
    BatchConverter::new(options.clone()).process_all(files, sink, on_progress)
}

/// Converts a single manifest file and delivers the report.
///
/// The manifest text and parse result are dropped before this returns, so
/// at most one decoded document is resident at a time across the batch.
fn convert_one<S: DownloadSink>(
    input_path: &Path,
    filename: &str,
    options: &ConvertOptions,
    sink: &S,
) -> CoreResult<ConvertResult> {
    let xml = std::fs::read_to_string(input_path)?;
    let parsed = parse_manifest(&xml)?;
    drop(xml);

    let report_name = report_filename(&parsed.manifest);
    let bytes = serialize_report(&parsed, options);
    sink.deliver(&report_name, &bytes)?;

    Ok(ConvertResult {
        filename: filename.to_string(),
        report_filename: report_name,
        clip_count: parsed.clips.len(),
        output_size: bytes.len() as u64,
    })
}
