use inlinecss_lib::InlineError;
use std::path::PathBuf;

/// All errors produced by the inlinecss command.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("--output takes a single HTML input, got {count}")]
    OutputConflict { count: usize },

    #[error(transparent)]
    Inline(#[from] InlineError),
}
