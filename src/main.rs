//! tinymark CLI - convert markup to an HTML fragment

use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use tinymark::{DEFAULT_LANGUAGE, Highlighter, Options, PlainHighlighter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Converts markup to HTML
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file, `-` or nothing reads stdin
    input: Option<PathBuf>,

    /// Write HTML here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Language for code fences that name none
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Color code blocks with syntect
    #[cfg(feature = "highlighting")]
    #[arg(long)]
    highlight: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let input = read_input(args.input.as_ref())?;

    let options = Options {
        default_language: args.language.clone(),
    };
    let highlighter = highlighter(&args);
    let html = tinymark::to_html_with_highlighter(&input, &options, highlighter.as_ref())
        .context("failed to convert markup")?;

    match &args.output {
        Some(path) => fs::write(path, html)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

#[tracing::instrument]
fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(feature = "highlighting")]
fn highlighter(args: &Args) -> Box<dyn Highlighter> {
    if args.highlight {
        Box::new(tinymark::SyntectHighlighter::new())
    } else {
        Box::new(PlainHighlighter)
    }
}

#[cfg(not(feature = "highlighting"))]
fn highlighter(_args: &Args) -> Box<dyn Highlighter> {
    Box::new(PlainHighlighter)
}
