//! Command-line interface for guikit
//! Highlights JSON text as HTML, the same transform the bundled web interface
//! applies before injecting responses into the page.
//!
//! Usage:
//!   guikit `<path>` [--format fragment|page|tokens] [--pretty]
//!
//! Pass `-` as the path to read from stdin.

use clap::{Arg, ArgAction, Command};
use guikit::highlight::{highlight_json, tokens};
use guikit::templates::render_page;
use std::io::Read;

fn main() {
    let matches = Command::new("guikit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Highlight JSON text as HTML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the JSON file, or '-' for stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'fragment' (HTML fragment), 'page' (standalone HTML document), 'tokens' (recognized tokens as JSON)")
                .default_value("fragment"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Reformat valid JSON input before highlighting (invalid input passes through untouched)")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").unwrap();
    let format = matches.get_one::<String>("format").unwrap();
    let pretty = matches.get_flag("pretty");

    let mut source = read_input(path);
    if pretty {
        // Best-effort: the highlighter itself never requires valid JSON
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&source) {
            source = serde_json::to_string_pretty(&value)
                .unwrap_or_else(|e| {
                    eprintln!("Error reformatting input: {}", e);
                    std::process::exit(1);
                });
        }
    }

    match format.as_str() {
        "fragment" => println!("{}", highlight_json(&source)),
        "page" => {
            let title = if path == "-" { "stdin" } else { path };
            print!("{}", render_page(title, &highlight_json(&source)));
        }
        "tokens" => {
            let toks = tokens(&source);
            match serde_json::to_string_pretty(&toks) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error serializing tokens: {}", e);
                    std::process::exit(1);
                }
            }
        }
        other => {
            eprintln!(
                "Unknown format '{}': expected 'fragment', 'page' or 'tokens'",
                other
            );
            std::process::exit(1);
        }
    }
}

/// Read the input text from a file path, or from stdin for '-'
fn read_input(path: &str) -> String {
    if path == "-" {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        }
        buf
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        })
    }
}
