use crate::style::stylesheet::StyleRule;

/// Prefix `html` with a `<style>` block holding `rules`, one `selector { body }`
/// per line in the given order. The HTML is copied through unchanged.
pub fn emit(rules: &[StyleRule<'_>], html: &str) -> String {
    let css_lines: Vec<String> = rules.iter().map(ToString::to_string).collect();
    let inline_css = css_lines.join("\n");

    format!("<style>\n{}\n</style>\n{}", inline_css, html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_emit_wraps_rules_and_keeps_html() {
        let rules = [
            StyleRule {
                selector: ".card",
                body: "color: red",
            },
            StyleRule {
                selector: "*",
                body: "margin: 0",
            },
        ];
        let html = "<div class=\"card\">\n  <h2>Hi</h2>\n</div>\n";

        assert_eq!(
            emit(&rules, html),
            "<style>\n.card { color: red }\n* { margin: 0 }\n</style>\n<div class=\"card\">\n  <h2>Hi</h2>\n</div>\n"
        );
    }

    #[test]
    fn test_emit_without_rules() {
        assert_eq!(emit(&[], "<p>x</p>"), "<style>\n\n</style>\n<p>x</p>");
    }

    #[test]
    fn test_duplicate_selectors_are_not_merged() {
        let rules = [
            StyleRule {
                selector: "p",
                body: "color: red",
            },
            StyleRule {
                selector: "p",
                body: "color: blue",
            },
        ];
        assert_eq!(
            emit(&rules, ""),
            "<style>\np { color: red }\np { color: blue }\n</style>\n"
        );
    }
}
