//! icon-hover CLI - preview icon class hovers from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Resolve the hover at line 10, column 15 using <root>/dist or <root>/assets
//! icon-hover index.html 10 15 --root ./my-extension
//!
//! # Read from stdin with an explicit catalog
//! cat App.vue | icon-hover - 3 12 --icons icons.json --format json
//! ```

use clap::{Parser, ValueEnum};
use icon_hover::{CatalogLoader, IconHoverProvider, SourceText};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "icon-hover")]
#[command(about = "Icon class hover provider")]
#[command(version)]
struct Cli {
    /// HTML/Vue file (or - for stdin)
    file: String,

    /// Line number (1-based)
    line: u32,

    /// Column number (1-based)
    column: u32,

    /// Install root holding dist/icons.json or assets/icons.json
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Icon catalog file, overrides --root
    #[arg(long)]
    icons: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "markdown")]
    format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let loader = match cli.icons {
        Some(path) => CatalogLoader::with_candidates(vec![path]),
        None => CatalogLoader::new(&cli.root),
    };

    let source = if cli.file == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(&cli.file)?
    };

    tracing::debug!("Position: line {}, column {}", cli.line, cli.column);

    let provider = IconHoverProvider::new(loader);
    let hover = provider.hover(&SourceText::new(&source), cli.line, cli.column);

    match hover {
        Some(info) => {
            let output = match cli.format {
                OutputFormat::Markdown => info.contents,
                OutputFormat::Json => serde_json::to_string_pretty(&info)?,
            };
            println!("{}", output);
        }
        None => {
            tracing::debug!("No hover information available at this position");
        }
    }

    Ok(())
}
