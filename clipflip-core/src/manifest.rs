//! Attached-media manifest parsing.
//!
//! Parses the vendor "attached-media" XML manifest format: a single optional
//! `Attached` element carrying the media header attributes, and any number of
//! `Material` elements (at any nesting depth) each describing one recorded
//! clip. Attribute values are passed through verbatim; no value-format
//! validation is performed.

use crate::error::{CoreError, CoreResult};

/// Media header parsed from the manifest's `Attached` element.
///
/// A manifest without an `Attached` element is not an error; all three
/// fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaManifest {
    /// `mediaName` attribute, `"unknown"` when absent
    pub media_name: String,
    /// `mediaId` attribute, may be empty
    pub media_id: String,
    /// `mediaKind` attribute, may be empty
    pub media_kind: String,
}

/// One recorded clip, parsed from a `Material` element.
///
/// All fields are verbatim attribute values apart from `clip_name`, which is
/// derived from the `uri` attribute (last path segment, trailing `.mxf`
/// stripped). Every record in a parse result has a non-empty `clip_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipRecord {
    pub clip_name: String,
    /// `flip` attribute, `"none"` when absent
    pub flip: String,
    /// `dur` attribute (frames)
    pub duration: String,
    /// `fps` attribute
    pub frame_rate: String,
    /// `aspectRatio` attribute
    pub aspect_ratio: String,
    /// `pixelAspect` attribute
    pub pixel_aspect: String,
    /// `videoType` attribute
    pub video_type: String,
    /// `audioType` attribute
    pub audio_type: String,
    /// `ch` attribute
    pub channels: String,
    /// `status` attribute
    pub status: String,
}

/// The complete parse result for one manifest file: the media header plus
/// the clip records in document order. Consumed once by the serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub manifest: MediaManifest,
    pub clips: Vec<ClipRecord>,
}

/// Parses attached-media manifest XML into a [`ConversionResult`].
///
/// The first `Attached` element anywhere in the document populates the
/// [`MediaManifest`]; every `Material` element in document order yields a
/// [`ClipRecord`]. Materials whose derived clip name is empty (missing or
/// directory-only `uri`) are silently excluded; that is a filtering rule,
/// not a failure.
///
/// # Errors
///
/// Returns [`CoreError::MalformedXml`] when the input is not well-formed XML.
pub fn parse_manifest(xml: &str) -> CoreResult<ConversionResult> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|e| CoreError::MalformedXml(format!("XML parse error: {}", e)))?;

    let attached = doc
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == "Attached");

    let manifest = MediaManifest {
        media_name: attr_or(attached, "mediaName", "unknown"),
        media_id: attr_or(attached, "mediaId", ""),
        media_kind: attr_or(attached, "mediaKind", ""),
    };

    let clips = doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "Material")
        .filter_map(|material| clip_from_material(&material))
        .collect();

    Ok(ConversionResult { manifest, clips })
}

/// Reads an attribute from an optional node, falling back to a default when
/// the node or the attribute is absent.
fn attr_or(node: Option<roxmltree::Node>, name: &str, default: &str) -> String {
    node.and_then(|n| n.attribute(name))
        .unwrap_or(default)
        .to_string()
}

/// Builds a clip record from a `Material` element, or `None` when the
/// derived clip name is empty.
fn clip_from_material(material: &roxmltree::Node) -> Option<ClipRecord> {
    let uri = material.attribute("uri").unwrap_or("");
    let clip_name = derive_clip_name(uri);
    if clip_name.is_empty() {
        return None;
    }

    let attr = |name: &str, default: &str| -> String {
        material.attribute(name).unwrap_or(default).to_string()
    };

    Some(ClipRecord {
        clip_name,
        flip: attr("flip", "none"),
        duration: attr("dur", ""),
        frame_rate: attr("fps", ""),
        aspect_ratio: attr("aspectRatio", ""),
        pixel_aspect: attr("pixelAspect", ""),
        video_type: attr("videoType", ""),
        audio_type: attr("audioType", ""),
        channels: attr("ch", ""),
        status: attr("status", ""),
    })
}

/// Derives a clip name from a material `uri`: last `/` segment with a
/// trailing `.mxf` suffix stripped.
fn derive_clip_name(uri: &str) -> String {
    let segment = uri.rsplit('/').next().unwrap_or("");
    segment.strip_suffix(".mxf").unwrap_or(segment).to_string()
}
