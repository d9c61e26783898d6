//! Compact output rendering helpers for CLI surfaces.

use serde_json::{Map, Value};

/// Collapse newlines/extra whitespace and bound length for terminal display.
pub fn compact_line(input: &str, max_chars: usize) -> String {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = collapsed.chars();
    let preview: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", preview)
    } else {
        preview
    }
}

/// Render plugin settings as `key=value` pairs on one bounded line.
///
/// String values are printed bare; everything else as compact JSON.
pub fn render_settings(settings: &Map<String, Value>, max_chars: usize) -> String {
    let joined = settings
        .iter()
        .map(|(k, v)| match v {
            Value::String(s) => format!("{}={}", k, s),
            other => format!("{}={}", k, other),
        })
        .collect::<Vec<_>>()
        .join(" ");
    compact_line(&joined, max_chars)
}
