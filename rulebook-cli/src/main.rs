//! Command-line interface for rulebook
//! This binary converts rulebook markup into HTML, or dumps the document tree and token stream
//! for debugging.
//!
//! Usage:
//!   rulebook [`<path>`] [-o `<file>`] [--to `<format>`]   - Convert a file (or stdin) to stdout (or a file)
//!   rulebook --list-formats                              - List all available output formats
//!
//! Configuration is layered: built-in defaults, then `rulebook.toml` in the working directory,
//! then `--config <file>`, then `--toc` / `--no-toc`. Set `RUST_LOG=debug` to trace the
//! assembler and ignored commands.

mod transforms;

use clap::{Arg, ArgAction, ArgMatches, Command};
use config::ConfigError;
use log::{debug, info};
use rulebook::BuildError;
use rulebook_babel::{FormatRegistry, HtmlFormat, HtmlOptions};
use rulebook_config::{Loader, RulebookConfig};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use thiserror::Error;

const DEFAULT_FORMAT: &str = "html";
const LOCAL_CONFIG: &str = "rulebook.toml";

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("failed to dump tokens: {0}")]
    Tokens(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: String, source: io::Error },
}

fn cli() -> Command {
    Command::new("rulebook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert rulebook markup into HTML")
        .arg(
            Arg::new("path")
                .help("Path to the rulebook source (reads stdin when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write to this file instead of stdout"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .short('t')
                .help("Output format (default: from the output file extension, else html)"),
        )
        .arg(
            Arg::new("toc")
                .long("toc")
                .help("Emit the table of contents")
                .action(ArgAction::SetTrue)
                .conflicts_with("no-toc"),
        )
        .arg(
            Arg::new("no-toc")
                .long("no-toc")
                .help("Omit the table of contents")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    env_logger::init();
    let matches = cli().get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    if let Err(err) = handle_convert_command(&matches) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn load_config(matches: &ArgMatches) -> Result<RulebookConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("toc") {
        loader = loader.set_override("html.table_of_contents", true)?;
    }
    if matches.get_flag("no-toc") {
        loader = loader.set_override("html.table_of_contents", false)?;
    }
    loader.build()
}

/// Explicit `--to`, else the format claiming the output file extension, else html.
fn select_format(matches: &ArgMatches, registry: &FormatRegistry) -> String {
    if let Some(format) = matches.get_one::<String>("to") {
        return format.clone();
    }
    matches
        .get_one::<String>("output")
        .and_then(|path| Path::new(path).extension())
        .and_then(|extension| extension.to_str())
        .and_then(|extension| registry.find_by_extension(extension))
        .map(|format| format.name().to_string())
        .unwrap_or_else(|| DEFAULT_FORMAT.to_string())
}

/// Sources are read as bytes; invalid UTF-8 becomes U+FFFD.
fn read_source(path: Option<&String>) -> Result<String, CliError> {
    let bytes = match path {
        Some(path) => fs::read(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?,
        None => {
            let mut buffer = Vec::new();
            io::stdin()
                .read_to_end(&mut buffer)
                .map_err(|source| CliError::Read {
                    path: "stdin".to_string(),
                    source,
                })?;
            buffer
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_output(path: Option<&String>, output: &str) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, output).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        }),
        None => io::stdout()
            .write_all(output.as_bytes())
            .map_err(|source| CliError::Write {
                path: "stdout".to_string(),
                source,
            }),
    }
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    let options = HtmlOptions::from(&config.html);
    debug!("html options: {:?}", options);

    let mut registry = FormatRegistry::with_defaults();
    registry.register(HtmlFormat::with_options(options));

    let format = select_format(matches, &registry);
    let path = matches.get_one::<String>("path");
    info!(
        "converting {} to {}",
        path.map(String::as_str).unwrap_or("stdin"),
        format
    );

    let source = read_source(path)?;
    let output = if transforms::is_token_format(&format) {
        transforms::dump_tokens(&source, &format)?
    } else {
        rulebook::convert_with(&source, &format, &registry)?
    };

    write_output(matches.get_one::<String>("output"), &output)
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");

    let mut formats: Vec<(String, String)> = registry
        .list_formats()
        .into_iter()
        .filter_map(|name| registry.get(&name).ok())
        .map(|format| (format.name().to_string(), format.description().to_string()))
        .collect();
    formats.extend(
        transforms::TOKEN_FORMATS
            .iter()
            .map(|(name, description)| (name.to_string(), description.to_string())),
    );

    for (name, description) in formats {
        println!("  {:<14}{}", name, description);
    }
}
