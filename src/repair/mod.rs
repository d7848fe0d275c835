//! Turns untrusted generation-service output into a valid [`Architecture`].
//!
//! The pass is split in two deliberately: [`extract_payload`] answers "can we
//! find structure at all" (and is the only place a [`RepairError`] can
//! legitimately come from), while the normalization that follows always
//! succeeds — unknown vocabulary is defaulted, unresolvable references are
//! dropped, and disconnected screens are stitched back into the graph.

pub mod connectivity;

pub use connectivity::stitch_connectivity;

use crate::error::RepairError;
use crate::model::{
    Architecture, Screen, ScreenType, Transition, TransitionTrigger, derive_name,
};
use ahash::{AHashMap, AHashSet};
use serde::Deserialize;

// --- Raw decode structs (tolerant of the vocabulary the service invents) ---

#[derive(Debug, Deserialize)]
struct RawArchitecture {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, alias = "nodes")]
    screens: Vec<RawScreen>,
    #[serde(default, alias = "edges", alias = "connections")]
    transitions: Vec<RawTransition>,
}

#[derive(Debug, Deserialize)]
struct RawScreen {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, alias = "type", alias = "screenType")]
    screen_type: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    components: Vec<String>,
    #[serde(default, alias = "requiresAuth")]
    requires_auth: bool,
}

#[derive(Debug, Deserialize)]
struct RawTransition {
    #[serde(default)]
    id: Option<String>,
    #[serde(alias = "source")]
    from: String,
    #[serde(alias = "target")]
    to: String,
    #[serde(default)]
    trigger: Option<String>,
    #[serde(default)]
    condition: Option<String>,
    #[serde(default)]
    description: String,
}

/// Locates the first balanced brace-delimited object in `raw`, skipping any
/// prose or markdown fencing around it.
pub fn extract_payload(raw: &str) -> Result<&str, RepairError> {
    let start = raw.find('{').ok_or(RepairError::PayloadNotFound)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in raw[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&raw[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    Err(RepairError::PayloadNotFound)
}

/// Lowercase alphanumeric identifier derived from a display name.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_was_sep = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

/// Parses and repairs semi-structured generation output into a valid,
/// connected [`Architecture`].
///
/// Fails only when no structured payload can be located or the payload is
/// undecodable; everything past that point is repaired, not rejected:
///
/// 1. unknown screen types default to `home`, unknown triggers to
///    `user_action`;
/// 2. transitions given by screen *name* are resolved by exact lookup, and
///    unresolvable references are dropped (a dangling edge is worse than a
///    missing one);
/// 3. screens and components the entry screen cannot reach are stitched in
///    via [`stitch_connectivity`], so the result is always weakly connected.
pub fn repair(raw_text: &str, goal: &str) -> Result<Architecture, RepairError> {
    let payload = extract_payload(raw_text)?;
    let raw: RawArchitecture =
        serde_json::from_str(payload).map_err(|e| RepairError::DecodeError(e.to_string()))?;
    if raw.screens.is_empty() {
        return Err(RepairError::EmptyArchitecture);
    }

    // Screens: synthesize missing ids/names and keep ids unique.
    let mut used_ids: AHashSet<String> = AHashSet::new();
    let mut screens: Vec<Screen> = Vec::with_capacity(raw.screens.len());
    for (index, rs) in raw.screens.into_iter().enumerate() {
        let name = rs
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("Screen {}", index + 1));
        // Provided ids are kept verbatim so transitions can still reference
        // them; only synthesized ids are slugged from the name.
        let mut id = rs
            .id
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .unwrap_or_else(|| slug(&name));
        if id.is_empty() {
            id = format!("screen_{}", index + 1);
        }
        let base = id.clone();
        let mut suffix = 2;
        while !used_ids.insert(id.clone()) {
            id = format!("{base}_{suffix}");
            suffix += 1;
        }

        let screen_type = rs
            .screen_type
            .as_deref()
            .map(ScreenType::parse_or_default)
            .unwrap_or(ScreenType::Home);
        screens.push(
            Screen::new(id, name, screen_type)
                .with_description(rs.description)
                .with_components(rs.components)
                .with_auth(rs.requires_auth),
        );
    }

    // Endpoint resolution: ids win, then exact name lookup (first occurrence).
    let ids: AHashSet<&str> = screens.iter().map(|s| s.id.as_str()).collect();
    let mut by_name: AHashMap<&str, &str> = AHashMap::new();
    for s in &screens {
        by_name.entry(s.name.as_str()).or_insert(s.id.as_str());
    }
    let resolve = |endpoint: &str| -> Option<String> {
        if ids.contains(endpoint) {
            return Some(endpoint.to_string());
        }
        by_name.get(endpoint).map(|id| id.to_string())
    };

    let mut used_tids: AHashSet<String> = AHashSet::new();
    let mut transitions: Vec<Transition> = Vec::new();
    for (index, rt) in raw.transitions.into_iter().enumerate() {
        let (Some(from), Some(to)) = (resolve(&rt.from), resolve(&rt.to)) else {
            continue;
        };
        let mut id = rt
            .id
            .filter(|i| !i.trim().is_empty())
            .unwrap_or_else(|| format!("t{}", index + 1));
        let base = id.clone();
        let mut suffix = 2;
        while !used_tids.insert(id.clone()) {
            id = format!("{base}_{suffix}");
            suffix += 1;
        }

        let trigger = rt
            .trigger
            .as_deref()
            .map(TransitionTrigger::parse_or_default)
            .unwrap_or(TransitionTrigger::UserAction);
        let mut transition =
            Transition::new(id, from, to, trigger).with_description(rt.description);
        transition.condition = rt.condition.filter(|c| !c.trim().is_empty());
        transitions.push(transition);
    }

    let transitions = stitch_connectivity(&screens, &transitions);

    let name = raw
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| derive_name(goal));
    let id = {
        let s = slug(&name);
        if s.is_empty() { "app".to_string() } else { s }
    };
    let mut architecture = Architecture::new(id, name, screens, transitions);
    architecture.description = raw
        .description
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| goal.to_string());

    architecture.validate()?;
    Ok(architecture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_inside_markdown_fence() {
        let raw = "Here you go:\n```json\n{\"screens\": []}\n```\nEnjoy!";
        assert_eq!(extract_payload(raw).unwrap(), "{\"screens\": []}");
    }

    #[test]
    fn braces_inside_strings_do_not_close_the_payload() {
        let raw = r#"{"name": "curly } brace", "screens": []}"#;
        assert_eq!(extract_payload(raw).unwrap(), raw);
    }

    #[test]
    fn unbalanced_payload_is_not_found() {
        assert!(matches!(
            extract_payload("{\"screens\": ["),
            Err(RepairError::PayloadNotFound)
        ));
        assert!(matches!(
            extract_payload("no structure here"),
            Err(RepairError::PayloadNotFound)
        ));
    }

    #[test]
    fn slug_collapses_punctuation() {
        assert_eq!(slug("Task List!"), "task_list");
        assert_eq!(slug("  --  "), "");
    }
}
