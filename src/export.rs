//! On-demand JSON export of architectures and diagrams.
//!
//! Export is the only persistence in the system: a single structured text
//! payload, downloadable as one file, that re-decodes to an equal
//! architecture.

use crate::diagram::Diagram;
use crate::model::Architecture;

/// Serializes an architecture to the pretty-printed export payload.
pub fn architecture_to_json(architecture: &Architecture) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(architecture)
}

/// Decodes an export payload back into an architecture. Round-trips:
/// `architecture_from_json(&architecture_to_json(a)?)? == a`.
pub fn architecture_from_json(payload: &str) -> Result<Architecture, serde_json::Error> {
    serde_json::from_str(payload)
}

/// Serializes a diagram in the `{nodes, edges}` interchange shape shared
/// with the rendering collaborator.
pub fn diagram_to_json(diagram: &Diagram) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(diagram)
}

pub fn diagram_from_json(payload: &str) -> Result<Diagram, serde_json::Error> {
    serde_json::from_str(payload)
}

/// Suggested download file name for an architecture export.
pub fn export_file_name(architecture: &Architecture) -> String {
    let mut slug = String::new();
    let mut last_was_sep = true;
    for c in architecture.name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            slug.push('-');
            last_was_sep = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("architecture");
    }
    format!("{slug}.json")
}
