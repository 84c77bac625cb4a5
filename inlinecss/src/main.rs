mod error;

use clap::{Parser, ValueEnum};
use error::CliError;
use inlinecss_lib::{inline_many, InlineError, InputKind, ScanMode};
use log::info;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "inlinecss")]
#[command(about = "Inline the CSS an HTML fragment actually uses")]
struct Args {
    /// Stylesheet to take rules from.
    #[arg(long)]
    css: PathBuf,

    /// HTML fragments to inline into.
    #[arg(required = true)]
    html: Vec<PathBuf>,

    /// Output file name. Only valid with a single HTML input; defaults to
    /// `<name>-inlined.<ext>` next to each input.
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Write the results to stdout instead of files.
    #[arg(long)]
    stdout: bool,

    /// How class and tag names are found in the HTML.
    #[arg(long, value_enum, default_value_t = Scanner::Pattern)]
    scanner: Scanner,

    /// Only log warnings and errors.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Scanner {
    /// Text patterns: double-quoted class attributes, `<tag` openers.
    Pattern,
    /// The html5ever tokenizer.
    Tokenizer,
}

impl From<Scanner> for ScanMode {
    fn from(scanner: Scanner) -> Self {
        match scanner {
            Scanner::Pattern => ScanMode::Pattern,
            Scanner::Tokenizer => ScanMode::Tokenizer,
        }
    }
}

fn main() -> ExitCode {
    // parse the args given in terminal
    let args = Args::parse();

    let default_filter = if args.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    if args.output.is_some() && args.html.len() > 1 {
        return Err(CliError::OutputConflict {
            count: args.html.len(),
        });
    }

    let css = read_text(&args.css, InputKind::Css)?;
    let documents = args
        .html
        .iter()
        .map(|path| read_text(path, InputKind::Html))
        .collect::<Result<Vec<_>, _>>()?;

    let outputs = inline_many(&css, &documents, args.scanner.into());

    if args.stdout {
        let mut stdout = std::io::stdout().lock();
        for output in &outputs {
            stdout
                .write_all(output.as_bytes())
                .map_err(|source| CliError::Write {
                    path: PathBuf::from("<stdout>"),
                    source,
                })?;
        }
        return Ok(());
    }

    for (input, output) in args.html.iter().zip(&outputs) {
        let out_path = match &args.output {
            Some(path) => path.clone(),
            None => inlined_path(input),
        };
        fs::write(&out_path, output).map_err(|source| CliError::Write {
            path: out_path.clone(),
            source,
        })?;
        info!("Wrote {} ({} bytes)", out_path.display(), output.len());
    }
    Ok(())
}

fn read_text(path: &Path, input: InputKind) -> Result<String, CliError> {
    let bytes = fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|e| {
        CliError::from(InlineError::InvalidUtf8 {
            input,
            source: e.utf8_error(),
        })
    })
}

/// `page.html` becomes `page-inlined.html` in the same directory.
fn inlined_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{}-inlined.{}", stem, ext.to_string_lossy()),
        None => format!("{}-inlined", stem),
    };
    input.with_file_name(name)
}
