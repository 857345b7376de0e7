//! Hashtag extraction.
//!
//! # Invariants
//! - A tag is `#` followed by one or more ASCII letters, digits or `_`.
//! - Returned tags are unique under ASCII case folding and keep the casing of
//!   their first occurrence.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static HASHTAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[A-Za-z0-9_]+").expect("valid hashtag regex"));

/// Extracts hashtags from `text` in first-occurrence order.
///
/// `"Nice #Sunset at the #beach! #beach"` yields `["#Sunset", "#beach"]`.
pub fn extract_tags(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for found in HASHTAG_RE.find_iter(text) {
        let tag = found.as_str();
        if seen.insert(normalize_tag(tag)) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Returns the case-insensitive counting key for a tag.
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{extract_tags, normalize_tag};

    #[test]
    fn stops_at_first_non_word_character() {
        assert_eq!(extract_tags("#rust-lang #café"), vec!["#rust", "#caf"]);
    }

    #[test]
    fn lone_hash_is_not_a_tag() {
        assert!(extract_tags("# heading and ## more").is_empty());
    }

    #[test]
    fn normalize_tag_folds_ascii_case() {
        assert_eq!(normalize_tag(" #BeAch "), "#beach");
    }
}
