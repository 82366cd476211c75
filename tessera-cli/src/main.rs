//! Tessera CLI
//!
//! Converts an HTML document into render blocks and prints them to the
//! terminal or as JSON.

mod terminal;

use std::fs;
use std::io::{self, Read as _};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tessera_blocks::style::Color;
use tessera_blocks::{ParserSession, RenderConfig};
use tessera_common::warning::set_warnings_enabled;
use tessera_html::{format_tree, parse_document};

/// Tessera: HTML to styled text and image blocks
#[allow(clippy::struct_excessive_bools)]
#[derive(Parser, Debug)]
#[command(name = "tessera")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print a file's blocks
    tessera ./article.html

    # Convert inline HTML
    tessera --html '<h1>Title</h1><img src="http://x/y.png">'

    # Resolve relative images and dump JSON
    tessera --base-url https://cdn.example/ --json page.html

    # Read from stdin with settings from a file
    cat page.html | tessera --config render.json
"#)]
struct Cli {
    /// Path to an HTML file (stdin when omitted)
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Convert an HTML string directly
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// JSON file with conversion settings
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Prefix for relative image sources
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Hyperlink color
    #[arg(long, value_name = "#RRGGBB")]
    link_color: Option<Color>,

    /// Print the block sequence as JSON
    #[arg(long, conflicts_with = "dom")]
    json: bool,

    /// Print the parsed DOM tree instead of blocks
    #[arg(long)]
    dom: bool,

    /// Disable ANSI styling
    #[arg(long)]
    no_color: bool,

    /// Suppress warnings
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        set_warnings_enabled(false);
    }

    let html = read_input(&cli)?;

    if cli.dom {
        let tree = parse_document(&html);
        print!("{}", format_tree(&tree, tree.root()));
        return Ok(());
    }

    let mut session = ParserSession::new(load_config(&cli)?);
    let blocks = session
        .parse(&html)
        .context("failed to convert document")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(blocks)?);
    } else {
        print!("{}", terminal::render_blocks(blocks, !cli.no_color));
    }

    Ok(())
}

/// Load the document from `--html`, a file, or stdin
fn read_input(cli: &Cli) -> Result<String> {
    if let Some(ref html) = cli.html {
        return Ok(html.clone());
    }

    match cli.path {
        Some(ref path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut html = String::new();
            let _ = io::stdin()
                .read_to_string(&mut html)
                .context("failed to read stdin")?;
            Ok(html)
        }
    }
}

/// Settings file first, then command-line overrides
fn load_config(cli: &Cli) -> Result<RenderConfig> {
    let mut config = match cli.config {
        Some(ref path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => RenderConfig::default(),
    };

    if let Some(ref base_url) = cli.base_url {
        config.base_url = Some(base_url.clone());
    }
    if let Some(color) = cli.link_color {
        config.hyperlink_color = color;
    }

    Ok(config)
}
