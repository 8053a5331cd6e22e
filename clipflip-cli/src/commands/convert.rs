// clipflip-cli/src/commands/convert.rs
//
// The 'convert' command: resolves the input to a candidate list, validates
// it, drives the batch converter with a progress bar, and prints a summary.

use crate::cli::ConvertArgs;
use crate::logging::get_timestamp;

use anyhow::{bail, Context};
use clipflip_core::{
    find_manifest_files, format_bytes, validate_candidates, BatchConverter, ConvertOptions,
    FsDownloadSink, MAX_MANIFEST_BYTES,
};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use owo_colors::OwoColorize;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

pub fn run_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let run_start = Instant::now();
    info!("Clipflip convert run started: {}", get_timestamp());

    // --- Resolve Input and Determine Candidates ---
    let input_path = args.input_path.canonicalize().with_context(|| {
        format!("Invalid input path '{}'", args.input_path.display())
    })?;

    let metadata = fs::metadata(&input_path).with_context(|| {
        format!("Failed to access input path '{}'", input_path.display())
    })?;

    let candidates: Vec<PathBuf> = if metadata.is_dir() {
        find_manifest_files(&input_path)
            .with_context(|| format!("No manifests found in '{}'", input_path.display()))?
    } else if metadata.is_file() {
        vec![input_path.clone()]
    } else {
        bail!(
            "Input path '{}' is neither a file nor a directory.",
            input_path.display()
        );
    };

    // --- Validate Candidates ---
    let files = validate_candidates(&candidates, 0)?;
    if files.len() < candidates.len() {
        warn!(
            "Skipping {} invalid candidate(s) (not .xml or larger than {})",
            candidates.len() - files.len(),
            format_bytes(MAX_MANIFEST_BYTES)
        );
    }
    for file in &files {
        let size = fs::metadata(file).map(|m| m.len()).unwrap_or(0);
        debug!("Queued: {} ({})", file.display(), format_bytes(size));
    }

    // --- Prepare Output ---
    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!("Failed to create output directory '{}'", args.output_dir.display())
    })?;
    let sink = FsDownloadSink::new(args.output_dir.clone());

    // --- Run the Batch ---
    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos:>3}% {msg}")
            .expect("static progress template is valid"),
    );

    let options = ConvertOptions {
        quote_fields: args.quote,
    };
    let mut converter = BatchConverter::new(options);
    let results = converter.process_all(&files, &sink, |file, fraction| {
        bar.set_message(file.to_string());
        bar.set_position((fraction * 100.0).round() as u64);
    });
    bar.finish_and_clear();
    let results = results?;

    // --- Summary ---
    let total_clips: usize = results.iter().map(|r| r.clip_count).sum();
    let total_bytes: u64 = results.iter().map(|r| r.output_size).sum();

    println!("{}", "Conversion complete".green().bold());
    for result in &results {
        println!(
            "  {} -> {} ({} clips, {})",
            result.filename,
            result.report_filename.cyan(),
            result.clip_count,
            format_bytes(result.output_size)
        );
    }
    println!(
        "Converted {} manifest(s), {} clip(s), {} written in {:.2}s",
        results.len(),
        total_clips,
        format_bytes(total_bytes),
        run_start.elapsed().as_secs_f64()
    );

    Ok(())
}
