//! `@mention` extraction from post, comment, and reply text.

use once_cell::sync::Lazy;
use regex::Regex;

static MENTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@([A-Za-z0-9_]+)").expect("mention pattern is valid")
});

/// Extracts the distinct `@name` tokens from `content`, in order of first
/// appearance and without the leading `@`.
pub fn extract_mentions(content: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for capture in MENTION_RE.captures_iter(content) {
        let name = capture[1].to_string();
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}
