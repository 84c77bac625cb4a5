use crate::style::stylesheet::{RuleSpan, Stylesheet};
use log::{debug, info};
use regex::Regex;
use std::borrow::Cow;
use std::ops::Range;
use std::sync::LazyLock;

/// `/* ... */`, non-greedy, spanning newlines.
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("comment pattern is valid"));

/// At-rules whose block holds ordinary style rules. Their children are
/// spliced into the output in place and the condition itself is dropped.
const GROUPING_RULES: &[&str] = &["@media", "@layer"];

/// Remove every CSS comment. Borrows when there is nothing to remove.
pub fn strip_comments(css_text: &str) -> Cow<'_, str> {
    COMMENT_RE.replace_all(css_text, "")
}

/// Parse a raw CSS string into a flat, ordered [`Stylesheet`].
///
/// Grouping rules (`@media`, `@layer`) are flattened; every other at-rule is
/// skipped together with its block. Malformed input never fails: a missing
/// `{` ends the parse and a missing `}` extends the last body to the end of
/// the text.
pub fn parse(css_text: &str) -> Stylesheet {
    let text = strip_comments(css_text).into_owned();
    let mut spans = Vec::new();
    parse_range(&text, 0..text.len(), &mut spans);

    info!("Parsed {} CSS rules total", spans.len());
    Stylesheet::from_parts(text, spans)
}

/// Scan `range` of `text` for rules, appending to `spans`. Re-entered for the
/// body of each grouping rule, over the same buffer.
fn parse_range(text: &str, range: Range<usize>, spans: &mut Vec<RuleSpan>) {
    let bytes = text.as_bytes();
    let end = range.end;
    let mut pos = range.start;

    loop {
        while pos < end && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= end {
            break;
        }

        // Trailing text without a block is dropped.
        let Some(open) = find_unescaped(bytes, b'{', pos, end) else {
            break;
        };

        let (body_end, resume) = match find_block_end(bytes, open + 1, end) {
            Some(close) => (close, close + 1),
            None => (end, end),
        };

        let selector = trim_range(text, pos..open);
        let body = trim_range(text, open + 1..body_end);
        let head = &text[selector.clone()];

        if is_grouping_rule(head) {
            debug!("Flattening grouping rule `{}`", head);
            parse_range(text, body, spans);
        } else if head.starts_with('@') {
            debug!("Skipping at-rule `{}`", head);
        } else {
            spans.push(RuleSpan { selector, body });
        }

        pos = resume;
    }
}

/// Position of the first `needle` in `bytes[from..end]` that is not escaped
/// with a backslash.
fn find_unescaped(bytes: &[u8], needle: u8, from: usize, end: usize) -> Option<usize> {
    let mut i = from;
    while i < end {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == needle => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Position of the `}` closing a block whose `{` sits just before `from`.
fn find_block_end(bytes: &[u8], from: usize, end: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut i = from;
    while i < end {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

fn trim_range(text: &str, range: Range<usize>) -> Range<usize> {
    let slice = &text[range.clone()];
    let start = range.start + (slice.len() - slice.trim_start().len());
    start..start + slice.trim().len()
}

fn is_grouping_rule(head: &str) -> bool {
    GROUPING_RULES.iter().any(|keyword| {
        head.get(..keyword.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(keyword))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::stylesheet::StyleRule;
    use pretty_assertions::assert_eq;

    fn pairs(css: &str) -> Vec<(String, String)> {
        parse(css)
            .rules()
            .map(|r| (r.selector.to_string(), r.body.to_string()))
            .collect()
    }

    fn pair(selector: &str, body: &str) -> (String, String) {
        (selector.to_string(), body.to_string())
    }

    #[test]
    fn test_plain_rules_in_source_order() {
        let css = ".card { color: red }\n.unused { color: blue }\n* { margin: 0 }";
        assert_eq!(
            pairs(css),
            vec![
                pair(".card", "color: red"),
                pair(".unused", "color: blue"),
                pair("*", "margin: 0"),
            ]
        );
    }

    #[test]
    fn test_comments_are_stripped_across_lines() {
        let css = "/* header\n   spans lines */ .a { color: red; /* inline */ }\n/**/p{x:y}";
        assert_eq!(pairs(css), vec![pair(".a", "color: red;"), pair("p", "x:y")]);
    }

    #[test]
    fn test_strip_comments_borrows_without_comments() {
        assert!(matches!(strip_comments(".a { b: c }"), Cow::Borrowed(_)));
        assert_eq!(strip_comments("a/* x */b/* y */c"), "abc");
    }

    #[test]
    fn test_media_rule_is_flattened_in_place() {
        let css = ".first { a: 1 }\n@media (max-width: 600px) {\n  .x { color: red }\n  .y { color: blue }\n}\n.last { b: 2 }";
        assert_eq!(
            pairs(css),
            vec![
                pair(".first", "a: 1"),
                pair(".x", "color: red"),
                pair(".y", "color: blue"),
                pair(".last", "b: 2"),
            ]
        );
    }

    #[test]
    fn test_flattened_rule_equals_unwrapped_rule() {
        let wrapped = parse("@media print { .x { color: red } }");
        let bare = parse(".x { color: red }");
        assert_eq!(
            wrapped.rules().collect::<Vec<_>>(),
            bare.rules().collect::<Vec<_>>()
        );
        assert_eq!(
            wrapped.get(0),
            Some(StyleRule {
                selector: ".x",
                body: "color: red"
            })
        );
    }

    #[test]
    fn test_layer_and_nested_grouping_rules() {
        let css = "@layer base { @media screen { html { margin: 0 } } .b { c: d } }";
        assert_eq!(pairs(css), vec![pair("html", "margin: 0"), pair(".b", "c: d")]);
    }

    #[test]
    fn test_grouping_keyword_is_case_insensitive() {
        assert_eq!(pairs("@MEDIA screen { .a { b: c } }"), vec![pair(".a", "b: c")]);
    }

    #[test]
    fn test_other_at_rules_are_discarded() {
        let css = "@keyframes spin { from { transform: rotate(0) } to { transform: rotate(360deg) } }\n\
                   @font-face { font-family: X; src: url(x.woff) }\n\
                   @supports (display: grid) { .g { display: grid } }\n\
                   .kept { a: b }";
        assert_eq!(pairs(css), vec![pair(".kept", "a: b")]);
    }

    #[test]
    fn test_trailing_text_without_block_is_ignored() {
        assert_eq!(pairs(".a { b: c } .dangling"), vec![pair(".a", "b: c")]);
        assert!(parse("   \n\t").is_empty());
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_empty_selector_is_kept_as_rule() {
        assert_eq!(pairs("{ color: red } .a{}"), vec![pair("", "color: red"), pair(".a", "")]);
    }

    #[test]
    fn test_missing_close_brace_runs_to_end() {
        assert_eq!(
            pairs(".a { b: c }\n.broken { color: red; width: 1px"),
            vec![pair(".a", "b: c"), pair(".broken", "color: red; width: 1px")]
        );
    }

    #[test]
    fn test_escaped_brace_is_not_a_block_opener() {
        assert_eq!(pairs(r".a\{b { c: d }"), vec![pair(r".a\{b", "c: d")]);
    }

    #[test]
    fn test_balanced_bodies_have_no_top_level_open_brace() {
        let css = "@media a { .x { y: z } } .p { q: r } @keyframes k { 0% { o: 1 } } .s{}";
        for rule in parse(css).rules() {
            let mut depth = 0i32;
            for ch in rule.body.chars() {
                match ch {
                    '{' => depth += 1,
                    '}' => depth -= 1,
                    _ => {}
                }
                assert!(depth >= 0, "unmatched close in {:?}", rule.body);
            }
            assert_eq!(depth, 0, "unmatched open in {:?}", rule.body);
        }
    }

    #[test]
    fn test_multibyte_text_is_sliced_on_char_boundaries() {
        assert_eq!(
            pairs(".ünï { content: \"→\" }  \u{a0}.b{c:d}"),
            vec![pair(".ünï", "content: \"→\""), pair(".b", "c:d")]
        );
    }
}
