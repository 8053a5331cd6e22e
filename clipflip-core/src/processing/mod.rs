//! Core conversion orchestration.
//!
//! This module houses the batch conversion logic for the clipflip-core
//! library: sequencing validated manifest files through parse and serialize
//! steps and delivering each finished report to the download sink.

/// Batch conversion state machine and loop
pub mod batch;

pub use batch::{process_manifests, BatchConverter, BatchState};
