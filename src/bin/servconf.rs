//! Command-line interface for servconf
//! Parses a server configuration file and prints the resulting servers.
//!
//! Usage:
//!   servconf `<path>` [--format `<format>`] [-v...]   - Parse and display a configuration
//!   servconf --list-formats                           - List available output formats
//!
//! Exit codes: 0 on success, 1 on usage errors, unreadable files and output errors.

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command};
use servconf::formats::OutputFormat;
use servconf::loader::ConfigLoader;
use std::process;

fn cli() -> Command {
    Command::new("servconf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse an nginx-style server configuration and display it")
        .arg(
            Arg::new("path")
                .help("Path to the configuration file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'text', 'json', 'yaml')")
                .default_value("text"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log more (repeat for debug and trace); RUST_LOG overrides")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = cli().try_get_matches().unwrap_or_else(|e| {
        let _ = e.print();
        match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
            _ => process::exit(1),
        }
    });

    servconf::logging::init(matches.get_count("verbose"));

    let loader = ConfigLoader::new();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing formats");
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default value");
    handle_parse_command(&loader, path, format);
}

/// Handle the default command: parse, render, print
fn handle_parse_command(loader: &ConfigLoader, path: &str, format: &str) {
    let format: OutputFormat = format.parse().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Available formats: {}", OutputFormat::names().join(", "));
        process::exit(1);
    });

    let output = loader.load_and_format(path, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    });

    print!("{}", output);
}

/// Handle --list-formats
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in OutputFormat::ALL {
        println!("  {}", format.name());
        println!("    {}", format.description());
    }
}
