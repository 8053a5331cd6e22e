// clipflip-core/src/sink.rs
//
// Module for handing finished reports to their destination.

use crate::error::CoreResult;

use log::debug;
use std::path::PathBuf;

/// Trait for delivering a finished report.
///
/// The sink is an external collaborator: the batch converter hands it a file
/// name and the report bytes and does not care what happens next (write to
/// disk, offer as a browser download, buffer in a test).
pub trait DownloadSink {
    /// Delivers one report.
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> CoreResult<()>;
}

/// Implementation of [`DownloadSink`] that writes reports into a directory.
#[derive(Debug)]
pub struct FsDownloadSink {
    output_dir: PathBuf,
}

impl FsDownloadSink {
    /// Creates a sink writing into `output_dir`. The directory must already
    /// exist; callers create it alongside their other output setup.
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }
}

impl DownloadSink for FsDownloadSink {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> CoreResult<()> {
        let target = self.output_dir.join(file_name);
        std::fs::write(&target, bytes)?;
        debug!("Delivered {} ({} bytes)", target.display(), bytes.len());
        Ok(())
    }
}
