//! `sessdesc` - inspect session descriptions from the command line.
//!
//! Reads a description from a file or stdin, parses it and prints either a
//! summary or the parsed structure as JSON.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod summary;

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as _;
use sessdesc_parser::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments.
#[derive(clap::Parser, Debug)]
#[command(author, version, about = "Parse and inspect session descriptions", long_about = None)]
struct Args {
    /// Input file; reads stdin when absent or `-`
    input: Option<PathBuf>,

    /// Print the parsed description as JSON
    #[arg(short, long)]
    json: bool,

    /// Indent JSON output
    #[arg(short, long, requires = "json")]
    pretty: bool,
}

impl Args {
    /// Name of the input for messages.
    fn input_name(&self) -> String {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => path.display().to_string(),
            _ => "<stdin>".to_string(),
        }
    }

    /// Reads the whole input.
    fn read_input(&self) -> Result<Vec<u8>> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => {
                std::fs::read(path)
                    .with_context(|| format!("failed to read {}", path.display()))
            }
            _ => {
                let mut buf = Vec::new();
                io::stdin()
                    .read_to_end(&mut buf)
                    .context("failed to read stdin")?;
                Ok(buf)
            }
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sessdesc=info,sessdesc_parser=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let name = args.input_name();
    let input = args.read_input()?;
    debug!(input = %name, bytes = input.len(), "read input");

    let description = Parser::new()
        .parse(&input)
        .with_context(|| format!("failed to parse {name}"))?;
    info!(input = %name, media = description.media.len(), "parsed");

    let output = if args.pretty {
        serde_json::to_string_pretty(&description)?
    } else if args.json {
        serde_json::to_string(&description)?
    } else {
        summary::render(&description)
    };
    println!("{output}");

    Ok(())
}
