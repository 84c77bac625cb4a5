pub mod html_scan;
pub mod html_tokens;

use log::info;
use std::collections::HashSet;

/// The class and tag names found in one HTML fragment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HtmlInventory {
    /// Distinct class names from `class` attributes.
    pub classes: HashSet<String>,
    /// Distinct tag names from opening tags.
    pub elements: HashSet<String>,
}

/// How the HTML fragment is scanned.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Text patterns over the raw HTML. See [`html_scan`].
    #[default]
    Pattern,
    /// The html5ever tokenizer. See [`html_tokens`].
    Tokenizer,
}

/// Scan `html` with the default [`ScanMode::Pattern`].
pub fn scan(html: &str) -> HtmlInventory {
    scan_with(html, ScanMode::Pattern)
}

pub fn scan_with(html: &str, mode: ScanMode) -> HtmlInventory {
    let inventory = match mode {
        ScanMode::Pattern => HtmlInventory {
            classes: html_scan::scan_classes(html),
            elements: html_scan::scan_elements(html),
        },
        ScanMode::Tokenizer => html_tokens::scan(html),
    };
    info!("Found {} unique classes in HTML", inventory.classes.len());
    inventory
}
