//! Command-line interface for tgifer
//! This binary parses tgif object files and prints them in one of the registered formats.
//!
//! Usage:
//!   tgifer [`<path>`] [--format `<format>`] [--config `<file>`] [--strict]  - Parse and serialize
//!   tgifer strings [`<path>`]                                              - Print the text strings
//!   tgifer --list-formats                                                - List all available formats
//!
//! Input is read from stdin when no path is given.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io;
use std::process;
use tgifer::tgif::config::{Loader, TgiferConfig};
use tgifer::tgif::loader::{DocumentLoader, LoadError};
use tgifer::tgif::parsing::Document;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = Command::new("tgifer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting tgif object files and extracting their text")
        .arg(
            Arg::new("path")
                .help("Path to the tgif file (reads stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'json', 'treeviz', 'strings'); defaults to the configured one"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .global(true)
                .help("Refuse to produce output when the parser reports any diagnostic")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("strings")
                .about("Print the literal text of every text object, one string per line")
                .arg(
                    Arg::new("path")
                        .help("Path to the tgif file (reads stdin when omitted)")
                        .index(1),
                ),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    });
    let loader = DocumentLoader::from_config(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&loader);
        return;
    }

    let (path, format) = match matches.subcommand() {
        Some(("strings", strings_matches)) => (
            strings_matches.get_one::<String>("path"),
            "strings".to_string(),
        ),
        _ => (
            matches.get_one::<String>("path"),
            matches
                .get_one::<String>("format")
                .cloned()
                .unwrap_or_else(|| config.output.format.clone()),
        ),
    };
    handle_execute_command(&loader, path.map(String::as_str), &format);
}

fn load_config(matches: &ArgMatches) -> Result<TgiferConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("strict") {
        loader = loader.set_override("parsing.strict", true)?;
    }
    loader.build()
}

/// Parse the input, report diagnostics and print the requested format
fn handle_execute_command(loader: &DocumentLoader, path: Option<&str>, format: &str) {
    let doc = read_document(loader, path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    if !doc.is_clean() {
        eprintln!("Parser has {} diagnostic(s)", doc.diagnostics.len());
        for message in doc.errors() {
            eprintln!("\t{}", message);
        }
    }

    match loader.serialize(&doc, format) {
        Ok(output) => print!("{}", output),
        Err(LoadError::Rejected { .. }) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("\nAvailable formats:");
            for name in loader.registry().list_formats() {
                eprintln!("  {}", name);
            }
            process::exit(1);
        }
    }
}

fn read_document(loader: &DocumentLoader, path: Option<&str>) -> Result<Document, LoadError> {
    match path {
        Some(path) => loader.load_and_parse(path),
        None => loader.read_and_parse(io::stdin().lock()),
    }
}

/// Handle the --list-formats flag
fn handle_list_formats_command(loader: &DocumentLoader) {
    println!("Available formats:\n");

    let registry = loader.registry();
    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
            println!();
        }
    }
}
