use std::fmt;
use std::str::Utf8Error;

/// Which of the two pipeline inputs a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Html,
    Css,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Html => f.write_str("HTML"),
            InputKind::Css => f.write_str("CSS"),
        }
    }
}

/// Errors produced by the inliner.
///
/// Malformed CSS is not an error: unbalanced braces, stray at-rules and empty
/// selectors are absorbed by the parser. The only rejected input is one that
/// is not text at all.
#[derive(thiserror::Error, Debug)]
pub enum InlineError {
    #[error("{input} input is not valid UTF-8: {source}")]
    InvalidUtf8 {
        input: InputKind,
        #[source]
        source: Utf8Error,
    },
}
