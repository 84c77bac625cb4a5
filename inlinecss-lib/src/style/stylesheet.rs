// src/style/stylesheet.rs
use std::fmt;
use std::ops::Range;

/// A parsed stylesheet: the comment-free CSS text plus the byte ranges of every
/// flat style rule found in it, in discovery order.
///
/// Rules are never copied out of the buffer; [`StyleRule`] borrows straight
/// from `text`.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    text: String,
    spans: Vec<RuleSpan>,
}

/// Where one rule lives inside [`Stylesheet::text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RuleSpan {
    pub selector: Range<usize>,
    pub body: Range<usize>,
}

/// One `selector { body }` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRule<'a> {
    /// e.g. ".card > h2:hover, .title"
    pub selector: &'a str,
    /// Declarations between the braces, e.g. "color: red; margin: 0"
    pub body: &'a str,
}

impl Stylesheet {
    pub(crate) fn from_parts(text: String, spans: Vec<RuleSpan>) -> Self {
        Stylesheet { text, spans }
    }

    /// Parse raw CSS. Never fails; see [`crate::style::rule_parser::parse`].
    pub fn parse(css_text: &str) -> Self {
        crate::style::rule_parser::parse(css_text)
    }

    /// The CSS text with comments removed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rules(&self) -> impl ExactSizeIterator<Item = StyleRule<'_>> + '_ {
        self.spans.iter().map(move |span| self.rule_at(span))
    }

    pub fn get(&self, index: usize) -> Option<StyleRule<'_>> {
        self.spans.get(index).map(|span| self.rule_at(span))
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    fn rule_at(&self, span: &RuleSpan) -> StyleRule<'_> {
        StyleRule {
            selector: &self.text[span.selector.clone()],
            body: &self.text[span.body.clone()],
        }
    }
}

impl fmt::Display for StyleRule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ {} }}", self.selector, self.body)
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", rule)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rules_borrow_from_comment_free_text() {
        let sheet = Stylesheet::parse("/* lead */ .a { color: red }\np { margin: 0 }");

        assert_eq!(sheet.len(), 2);
        assert!(!sheet.text().contains("lead"));
        assert_eq!(
            sheet.get(1),
            Some(StyleRule {
                selector: "p",
                body: "margin: 0"
            })
        );
        assert_eq!(sheet.get(2), None);
    }

    #[test]
    fn test_display_uses_inline_form() {
        let sheet = Stylesheet::parse(".a{color:red}   h1 ,h2{ }");
        assert_eq!(sheet.to_string(), ".a { color:red }\nh1 ,h2 {  }");
    }

    #[test]
    fn test_empty_stylesheet() {
        let sheet = Stylesheet::default();
        assert!(sheet.is_empty());
        assert_eq!(sheet.to_string(), "");
    }
}
