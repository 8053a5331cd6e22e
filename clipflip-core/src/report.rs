//! CSV report serialization.
//!
//! Renders a [`ConversionResult`] into the flip report layout: four comment
//! lines with the media header, a blank line, the column header row, and one
//! row per clip. Lines are LF-joined with no trailing newline.
//!
//! By default field values are comma-joined with no quoting or escaping,
//! matching the documented report format. Fields containing commas would
//! corrupt their row; [`ConvertOptions::quote_fields`] opts in to RFC-4180
//! quoting for callers that need it.

use crate::config::{ConvertOptions, REPORT_SUFFIX};
use crate::manifest::{ClipRecord, ConversionResult, MediaManifest};

/// Column header row for the clip table.
const HEADER_ROW: &str = "Clip Name,Flip,Duration (frames),Project FPS,Aspect Ratio,\
Pixel Aspect,Video Type,Audio Type,Audio Channels,Status";

/// Renders the CSV report text for a conversion result.
///
/// Always succeeds: every parse result serializes, including one with zero
/// clip records (the preamble and header row are still emitted).
pub fn render_report(result: &ConversionResult, options: &ConvertOptions) -> String {
    let manifest = &result.manifest;
    let mut lines = vec![
        "# Media Information".to_string(),
        format!("# Media Name: {}", manifest.media_name),
        format!("# Media ID: {}", manifest.media_id),
        format!("# Media Kind: {}", manifest.media_kind),
        String::new(),
        HEADER_ROW.to_string(),
    ];
    lines.extend(result.clips.iter().map(|clip| render_row(clip, options)));
    lines.join("\n")
}

/// Renders the CSV report as UTF-8 bytes, ready for a download sink.
pub fn serialize_report(result: &ConversionResult, options: &ConvertOptions) -> Vec<u8> {
    render_report(result, options).into_bytes()
}

/// Report file name for a manifest: `<mediaName>_<REPORT_SUFFIX>.csv`.
pub fn report_filename(manifest: &MediaManifest) -> String {
    format!("{}_{}.csv", manifest.media_name, REPORT_SUFFIX)
}

fn render_row(clip: &ClipRecord, options: &ConvertOptions) -> String {
    let fields = [
        &clip.clip_name,
        &clip.flip,
        &clip.duration,
        &clip.frame_rate,
        &clip.aspect_ratio,
        &clip.pixel_aspect,
        &clip.video_type,
        &clip.audio_type,
        &clip.channels,
        &clip.status,
    ];
    fields
        .iter()
        .map(|field| {
            if options.quote_fields {
                quote_field(field)
            } else {
                (*field).clone()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// RFC-4180 quoting: wrap in double quotes when the field contains a comma,
/// quote, or line break; double any embedded quotes.
fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
