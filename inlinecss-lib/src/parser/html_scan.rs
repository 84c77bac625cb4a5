//! Pattern-based scanning of an HTML fragment for class and tag names.
//!
//! This is deliberately a text heuristic, not an HTML parser: only
//! double-quoted `class="..."` attributes are seen, and anything that looks
//! like `<tag` counts, even inside comments or scripts.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static CLASS_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"class="([^"]*)""#).expect("class attribute pattern is valid"));

static OPEN_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([a-zA-Z][a-zA-Z0-9]*)").expect("open tag pattern is valid"));

/// Every class named in a `class="..."` attribute, split on whitespace.
pub fn scan_classes(html: &str) -> HashSet<String> {
    let mut classes = HashSet::new();
    for caps in CLASS_ATTR_RE.captures_iter(html) {
        if let Some(value) = caps.get(1) {
            classes.extend(value.as_str().split_whitespace().map(str::to_string));
        }
    }
    classes
}

/// Every tag name that opens a tag, as written. Custom elements are cut at
/// the first hyphen (`<my-card>` yields `my`).
pub fn scan_elements(html: &str) -> HashSet<String> {
    OPEN_TAG_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
