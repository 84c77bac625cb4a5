use crate::style::stylesheet::StyleRule;
use log::{info, trace};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// A `.class` reference inside a selector; group 1 is the class name.
static CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.([a-zA-Z_][a-zA-Z0-9_-]*)").expect("class pattern is valid")
});

/// A run that could be a type selector, custom-element hyphens included.
/// Whether it actually is one depends on the characters around it, see
/// [`part_mentions_element`].
static TAG_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9-]*").expect("tag pattern is valid"));

/// Class names referenced anywhere in `selector`, in order, duplicates kept.
pub fn selector_classes(selector: &str) -> impl Iterator<Item = &str> + '_ {
    CLASS_RE
        .captures_iter(selector)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

/// Keep the rules that can apply to a document with the given class and tag
/// names. The result is a subsequence of `rules` in the original order.
///
/// A rule is kept when
/// 1. any `.class` in its selector is in `classes`, or
/// 2. one of its comma-separated parts has no class reference at all and
///    starts with `*`, starts with `:`, or names a tag in `elements`.
///
/// Tag names compare ASCII case-insensitively.
pub fn filter<'a, I>(
    rules: I,
    classes: &HashSet<String>,
    elements: &HashSet<String>,
) -> Vec<StyleRule<'a>>
where
    I: IntoIterator<Item = StyleRule<'a>>,
{
    let elements: HashSet<String> = elements.iter().map(|e| e.to_ascii_lowercase()).collect();

    let relevant: Vec<StyleRule<'a>> = rules
        .into_iter()
        .filter(|rule| {
            let keep = is_relevant(rule.selector, classes, &elements);
            if !keep {
                trace!("Dropping `{}`", rule.selector);
            }
            keep
        })
        .collect();

    info!("Filtered to {} relevant CSS rules", relevant.len());
    relevant
}

/// `elements` must already be lowercase.
fn is_relevant(selector: &str, classes: &HashSet<String>, elements: &HashSet<String>) -> bool {
    if selector_classes(selector).any(|class| classes.contains(class)) {
        return true;
    }

    selector
        .split(',')
        .map(str::trim)
        .filter(|part| !CLASS_RE.is_match(part))
        .any(|part| {
            part.starts_with('*') || part.starts_with(':') || part_mentions_element(part, elements)
        })
}

/// True if `part` contains a tag from `elements` as a type selector: preceded by
/// the start of the part or a combinator, and followed by the end of the part,
/// a combinator, or a `:` `.` `[` `#` `{` marker.
fn part_mentions_element(part: &str, elements: &HashSet<String>) -> bool {
    if elements.is_empty() {
        return false;
    }
    let bytes = part.as_bytes();
    TAG_TOKEN_RE.find_iter(part).any(|token| {
        let opens = token.start() == 0 || is_combinator(bytes[token.start() - 1]);
        let closes = bytes
            .get(token.end())
            .map_or(true, |&b| is_combinator(b) || matches!(b, b':' | b'.' | b'[' | b'#' | b'{'));
        opens && closes && elements.contains(&token.as_str().to_ascii_lowercase())
    })
}

fn is_combinator(b: u8) -> bool {
    b.is_ascii_whitespace() || matches!(b, b'>' | b'+' | b'~')
}
