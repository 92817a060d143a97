//! Command-line interface for c0
//! This binary tokenizes and parses C0 source files and dumps the result.
//!
//! Usage:
//!   c0 tokenize `<path>` [--format `<format>`]   - Dump the token stream
//!   c0 parse `<path>` [--format `<format>`]      - Dump the parse tree

use clap::{Arg, Command};

fn main() {
    let matches = Command::new("c0")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A compiler front-end for the C0 teaching language")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokenize")
                .about("Tokenize a C0 source file and dump the token stream")
                .arg(
                    Arg::new("path")
                        .help("Path to the C0 source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a C0 source file and dump the parse tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the C0 source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("tokenize", tokenize_matches)) => {
            let path = tokenize_matches.get_one::<String>("path").unwrap();
            let format = tokenize_matches.get_one::<String>("format").unwrap();
            handle_tokenize_command(path, format);
        }
        Some(("parse", parse_matches)) => {
            let path = parse_matches.get_one::<String>("path").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(path, format);
        }
        _ => unreachable!(),
    }
}

/// Handle the tokenize command
fn handle_tokenize_command(path: &str, format: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let tokens = c0::tokenize(&source);
    match format {
        "text" => print!("{}", c0::format_tokens(&tokens)),
        "json" => {
            let output = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        other => {
            eprintln!("Unknown format: {}", other);
            std::process::exit(1);
        }
    }
}

/// Handle the parse command
fn handle_parse_command(path: &str, format: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let tree = c0::parse(&source).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    match format {
        "text" => println!("{}", tree.tree()),
        "json" => {
            let output = serde_json::to_string_pretty(&tree).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        other => {
            eprintln!("Unknown format: {}", other);
            std::process::exit(1);
        }
    }
}
