//! Text normalization applied to every source before skill extraction.

use std::sync::LazyLock;

use regex::Regex;

static NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9+/.\s]").expect("noise pattern is valid"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Replaces everything outside `[a-zA-Z0-9+/.\s]` with a space, collapses whitespace
/// runs to a single space, and lowercases the result.
///
/// `+`, `/` and `.` survive so that keywords like `c++` and `ci/cd` stay intact.
pub fn normalize_text(text: &str) -> String {
    let cleaned = NOISE.replace_all(text, " ");
    let collapsed = WHITESPACE.replace_all(&cleaned, " ");
    collapsed.to_lowercase()
}
