//! Hash suffix detection and removal for exported names.

use std::sync::OnceLock;

use regex::Regex;

/// A single space, 32 lowercase hex characters, then an optional extension.
const HASH_SUFFIX_PATTERN: &str = r" ([0-9a-f]{32})(\.[^.]+)?$";

fn hash_suffix_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(HASH_SUFFIX_PATTERN).unwrap())
}

/// Check if a base name ends with an export hash suffix.
pub fn has_hash_suffix(name: &str) -> bool {
    hash_suffix_regex().is_match(name)
}

/// Strip the trailing export hash from a base name, keeping the extension.
///
/// `"My Page 9b30b13b97a74acda7dd1f152937e173.html"` becomes `"My Page.html"`,
/// and a folder name such as `"Notes 1a2b3c4d5e6f7081920a1b2c3d4e5f60"` becomes
/// `"Notes"`. Names without a suffix are returned unchanged.
pub fn remove_hash_suffix(name: &str) -> String {
    hash_suffix_regex()
        .replace(name, |caps: &regex::Captures<'_>| {
            caps.get(2)
                .map(|ext| ext.as_str().to_string())
                .unwrap_or_default()
        })
        .into_owned()
}
