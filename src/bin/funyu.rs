//! Command-line interface for funyu
//! Converts a funyu document into HTML (the default) or any other registered format.
//!
//! Usage:
//!   funyu [`<path>`]                 - Render the file (or stdin) as HTML
//!   funyu --meta [`<path>`]          - Print the metadata as `key: value` lines
//!   funyu --json [`<path>`]          - Print the metadata as a JSON object
//!   funyu --format `<name>` [`<path>`] - Render with any registered formatter
//!   funyu --list-formats             - List the registered formatters

use clap::{Arg, ArgAction, ArgMatches, Command};
use funyu::funyu::config::FunyuConfig;
use funyu::funyu::formats::{FormatRegistry, HtmlFormatter};
use std::io::Read;

fn main() {
    let matches = Command::new("funyu")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert funyu blog markup into HTML")
        .arg(
            Arg::new("path")
                .help("Path to the funyu file (reads stdin when omitted or '-')")
                .index(1),
        )
        .arg(
            Arg::new("meta")
                .long("meta")
                .short('m')
                .help("Print the document metadata instead of the body")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["json", "format"]),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .short('j')
                .help("Print the document metadata as JSON")
                .action(ArgAction::SetTrue)
                .conflicts_with("format"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'html', 'funyu', 'treeviz')")
                .default_value("html"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List the available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("YAML configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_tracing(matches.get_flag("verbose"));

    let config = load_config(matches.get_one::<String>("config"));
    let registry = build_registry(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    let format = output_format(&matches);
    let source = read_source(matches.get_one::<String>("path").map(String::as_str));
    handle_convert_command(&source, &format, &config, &registry);
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&String>) -> FunyuConfig {
    let loaded = match path {
        Some(path) => FunyuConfig::load(path),
        None => FunyuConfig::defaults(),
    };
    loaded.unwrap_or_else(|e| {
        eprintln!("Config error: {}", e);
        std::process::exit(1);
    })
}

/// The default registry, with html rendering under the configured options
fn build_registry(config: &FunyuConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(HtmlFormatter::new(config.html.clone()));
    registry
}

fn output_format(matches: &ArgMatches) -> String {
    if matches.get_flag("meta") {
        return "metadata".to_string();
    }
    if matches.get_flag("json") {
        return "metadata-json".to_string();
    }
    matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| "html".to_string())
}

fn read_source(path: Option<&str>) -> String {
    let result = match path {
        Some(path) if path != "-" => std::fs::read_to_string(path),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer).map(|_| buffer)
        }
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    })
}

/// Handle the default command: parse, then serialize with the chosen format
fn handle_convert_command(
    source: &str,
    format: &str,
    config: &FunyuConfig,
    registry: &FormatRegistry,
) {
    let doc = funyu::parse_with(source, &config.parse).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let output = registry.serialize(&doc, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");
    for formatter in registry.formats() {
        println!("  {:<15} {}", formatter.name(), formatter.description());
    }
}
