use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mdtree::Config;

#[derive(Parser)]
#[command(name = "mdtree")]
#[command(about = "Render Markdown into a document tree")]
struct Cli {
    /// Input Markdown file (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// TOML file with HTML output settings
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// HTML markup
    Html,
    /// The block tree as JSON
    Json,
    /// The block tree in Rust debug notation
    Debug,
    /// Block segments before inline tokenization, as JSON
    Segments,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // A bad --config is reported whatever the output format.
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::compiled_default(),
    };

    let markdown = read_input(cli.input.as_ref())?;

    let rendered = match cli.format {
        Format::Html => mdtree::markdown_to_html_with_config(&markdown, &config),
        Format::Json => pretty_json(&mdtree::parse(&markdown))?,
        Format::Debug => format!("{:#?}\n", mdtree::parse(&markdown)),
        Format::Segments => pretty_json(&mdtree::segment(&markdown))?,
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("Error writing {}", path.display()))?;
            log::info!("Created {}", path.display());
        }
        None => io::stdout()
            .write_all(rendered.as_bytes())
            .context("Error writing to stdout")?,
    }

    Ok(())
}

fn pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("Error reading {}", path.display())),
        _ => {
            log::debug!("reading markdown from stdin");
            let mut markdown = String::new();
            io::stdin()
                .read_to_string(&mut markdown)
                .context("Error reading stdin")?;
            Ok(markdown)
        }
    }
}
