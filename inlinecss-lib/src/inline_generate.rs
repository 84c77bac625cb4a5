use crate::error::{InlineError, InputKind};
use crate::parser::{scan_with, ScanMode};
use crate::style::stylesheet::Stylesheet;
use crate::style::{emitter, relevance, rule_parser};

pub mod css_inline {
    use super::*;
    use rayon::prelude::*;

    /// Counts from one inlining run.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct InlineReport {
        /// Distinct class names found in the HTML.
        pub classes: usize,
        /// Distinct tag names found in the HTML.
        pub elements: usize,
        /// Rules in the flattened stylesheet.
        pub parsed: usize,
        /// Rules written to the `<style>` block.
        pub retained: usize,
    }

    /// Inline the rules of `css_content` that `html_content` can use.
    pub fn inline(html_content: &str, css_content: &str) -> String {
        inline_with(html_content, css_content, ScanMode::default())
    }

    pub fn inline_with(html_content: &str, css_content: &str, mode: ScanMode) -> String {
        inline_with_report(html_content, css_content, mode).0
    }

    pub fn inline_with_report(
        html_content: &str,
        css_content: &str,
        mode: ScanMode,
    ) -> (String, InlineReport) {
        let stylesheet = rule_parser::parse(css_content);
        inline_parsed(html_content, &stylesheet, mode)
    }

    /// [`inline`] for raw bytes. Both inputs must be UTF-8.
    pub fn inline_bytes(html_content: &[u8], css_content: &[u8]) -> Result<String, InlineError> {
        let html = std::str::from_utf8(html_content).map_err(|source| InlineError::InvalidUtf8 {
            input: InputKind::Html,
            source,
        })?;
        let css = std::str::from_utf8(css_content).map_err(|source| InlineError::InvalidUtf8 {
            input: InputKind::Css,
            source,
        })?;
        Ok(inline(html, css))
    }

    /// Inline one stylesheet into many documents. The stylesheet is parsed once
    /// and the documents are processed in parallel; outputs keep input order.
    pub fn inline_many<S>(css_content: &str, documents: &[S], mode: ScanMode) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        let stylesheet = rule_parser::parse(css_content);
        documents
            .par_iter()
            .map(|html| inline_parsed(html.as_ref(), &stylesheet, mode).0)
            .collect()
    }

    fn inline_parsed(
        html_content: &str,
        stylesheet: &Stylesheet,
        mode: ScanMode,
    ) -> (String, InlineReport) {
        let inventory = scan_with(html_content, mode);
        let retained = relevance::filter(
            stylesheet.rules(),
            &inventory.classes,
            &inventory.elements,
        );

        let report = InlineReport {
            classes: inventory.classes.len(),
            elements: inventory.elements.len(),
            parsed: stylesheet.len(),
            retained: retained.len(),
        };
        (emitter::emit(&retained, html_content), report)
    }
}
