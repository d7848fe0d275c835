pub mod architecture;
pub mod screen;
pub mod transition;

pub use architecture::*;
pub use screen::*;
pub use transition::*;

/// Derives a short display name from free-form goal text (first six words,
/// title-cased), used when the generation service does not supply one.
pub fn derive_name(goal: &str) -> String {
    let mut words: Vec<String> = goal
        .split_whitespace()
        .take(6)
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    if words.is_empty() {
        words.push("Untitled App".to_string());
    }
    words.join(" ")
}

/// Milliseconds since the Unix epoch, used for architecture metadata stamps.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
