//! Wombat CLI
//!
//! Inspect CSS files the way the toolkit's assertions see them: list the
//! `@media` blocks a stylesheet contains (optionally filtered by condition
//! phrase, optionally as JSON) or print a file's whitespace-normalized text.
//!
//! File reading happens here, at the edge; the core library stays pure.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use wombat_css::{MediaQueryBlock, extract_media_queries, normalize};

#[derive(Parser)]
#[command(name = "wombat", about = "CSS fragment extraction and normalization")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the `@media` blocks of a CSS file in document order.
    Media {
        /// Path to the CSS file to scan.
        file: PathBuf,
        /// Keep only blocks whose condition matches this phrase
        /// (whitespace- and case-insensitive).
        #[arg(long)]
        condition: Option<String>,
        /// Print only the inner rule text of the first block.
        #[arg(long)]
        inner: bool,
        /// Emit the block list as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print a file's content with whitespace runs collapsed.
    Normalize {
        /// Path to the text file to normalize.
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Media {
            file,
            condition,
            inner,
            json,
        } => {
            let css = read_file(&file)?;
            let mut blocks = extract_media_queries(&css);
            if let Some(phrase) = condition {
                blocks.retain(|block| block.matches_condition(&phrase));
            }
            // An input without media queries prints nothing and exits 0:
            // absence is not an error, mirroring the library contract.
            if inner {
                if let Some(block) = blocks.first() {
                    println!("{}", block.inner);
                }
            } else if json {
                println!("{}", serde_json::to_string_pretty(&blocks)?);
            } else {
                print_blocks(&blocks);
            }
        }
        Command::Normalize { file } => {
            let text = read_file(&file)?;
            println!("{}", normalize(&text));
        }
    }

    Ok(())
}

/// Read a file as UTF-8 text, with the path in any error message.
fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))
}

/// Print each block with an index and its (normalized) condition header.
fn print_blocks(blocks: &[MediaQueryBlock]) {
    for (index, block) in blocks.iter().enumerate() {
        println!(
            "{} {}",
            format!("[{index}]").bold(),
            format!("@media {}", normalize(&block.condition)).yellow()
        );
        println!("{}", block.text);
    }
}
