// ABOUTME: CLI for querying HTML documents with CSS selectors using domsift.
// ABOUTME: Loads HTML from a URL, file, or stdin and prints text or attribute values per match.

use std::fs;
use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use clap::Parser;
use domsift::{Document, Node};
use serde_json::json;

/// Query an HTML document with CSS selectors and print the results.
#[derive(Parser, Debug)]
#[command(name = "domsift")]
#[command(about = "Query HTML with CSS selectors", long_about = None)]
struct Args {
    /// HTML source: a http(s) URL, a file path, or "-" for stdin.
    target: String,

    /// CSS selector(s) to evaluate against the document.
    #[arg(short = 's', long = "select", required = true)]
    selectors: Vec<String>,

    /// Print this attribute of each match instead of its text.
    #[arg(short = 'a', long = "attr")]
    attr: Option<String>,

    /// Print shaped text (paragraph structure preserved) instead of plain text.
    #[arg(long)]
    shape: bool,

    /// Print every match instead of only the first.
    #[arg(long)]
    all: bool,

    /// Force a character encoding label (e.g. "windows-1252").
    #[arg(short = 'e', long = "encoding")]
    encoding: Option<String>,

    /// Output a JSON report instead of plain lines.
    #[arg(long)]
    json: bool,
}

fn load_bytes(target: &str) -> Result<Vec<u8>> {
    if target == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }

    if target.starts_with("http://") || target.starts_with("https://") {
        let response = reqwest::blocking::get(target)
            .with_context(|| format!("failed to fetch {}", target))?;
        if !response.status().is_success() {
            bail!("HTTP status {} for {}", response.status(), target);
        }
        let body = response.bytes().context("failed to read response body")?;
        return Ok(body.to_vec());
    }

    fs::read(target).with_context(|| format!("failed to read file {}", target))
}

fn render(node: &Node, args: &Args) -> Option<String> {
    match &args.attr {
        Some(attr) => node.attr(attr).map(str::to_string),
        None if args.shape => Some(node.inner_text()),
        None => Some(node.text()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let bytes = load_bytes(&args.target)?;
    let document = Document::parse_bytes(&bytes, args.encoding.as_deref());
    let root = document.root();

    let mut report = Vec::new();
    for selector in &args.selectors {
        let matches: Vec<Node> = if args.all {
            root.query_all(selector)?
        } else {
            root.query(selector)?.into_iter().collect()
        };

        if args.json {
            report.push(json!({
                "selector": selector,
                "matches": matches
                    .iter()
                    .map(|node| json!({
                        "tag": node.node_name(),
                        "value": render(node, &args),
                    }))
                    .collect::<Vec<_>>(),
            }));
        } else {
            for node in &matches {
                if let Some(value) = render(node, &args) {
                    println!("{}", value);
                }
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
