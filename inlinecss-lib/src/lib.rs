//! Inline only the CSS an HTML fragment actually uses.
//!
//! The pipeline is strictly forward: the stylesheet is parsed into flat
//! `selector { body }` rules, the HTML is scanned for class and tag names,
//! rules that cannot apply are dropped, and the survivors are emitted as a
//! `<style>` block in front of the untouched HTML.

pub mod error;
pub mod inline_generate;
pub mod parser;
pub mod style;

pub use error::{InlineError, InputKind};
pub use inline_generate::css_inline::{
    inline, inline_bytes, inline_many, inline_with, inline_with_report, InlineReport,
};
pub use parser::{scan, scan_with, HtmlInventory, ScanMode};
pub use style::stylesheet::{StyleRule, Stylesheet};
