//! Command-line interface for patlex
//! This binary lexes files with the bundled languages and serves the JSON endpoint.
//!
//! Usage:
//!   patlex lex `<language>` [`<path>`] [--format `<format>`] [--discard `<categories>`]  - Lex a file (or stdin)
//!   patlex languages [`<language>`]                                                 - List languages, or one language's categories
//!   patlex serve [--address `<addr>`]                                               - Run the JSON endpoint

use clap::{Arg, ArgAction, ArgMatches, Command};
use patlex::languages::LanguageRegistry;
use patlex::rendering;
use patlex::server::{self, AppState};
use patlex_config::{ConfigError, Loader, PatlexConfig};
use std::io::Read;
use tracing_subscriber::EnvFilter;

const LOCAL_CONFIG: &str = "patlex.toml";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("patlex=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("patlex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A data-driven lexer for the bundled languages")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults and ./patlex.toml"),
        )
        .subcommand(
            Command::new("lex")
                .about("Lex a file, or stdin when no path is given")
                .arg(
                    Arg::new("language")
                        .help("Language name (see `patlex languages`)")
                        .required(true)
                        .index(1),
                )
                .arg(Arg::new("path").help("Path to the source file").index(2))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["tokens", "json", "yaml", "html"])
                        .default_value("tokens"),
                )
                .arg(
                    Arg::new("discard")
                        .long("discard")
                        .short('d')
                        .help("Comma separated categories to drop (defaults from configuration)"),
                )
                .arg(
                    Arg::new("annotate")
                        .long("annotate")
                        .action(ArgAction::SetTrue)
                        .help("Insert cosmetic spaces between tokens in html output"),
                ),
        )
        .subcommand(
            Command::new("languages")
                .about("List bundled languages, or the categories of one")
                .arg(
                    Arg::new("language")
                        .help("Show the categories of this language in declaration order")
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("serve").about("Run the JSON endpoint").arg(
                Arg::new("address")
                    .long("address")
                    .short('a')
                    .help("Address to bind (defaults from configuration)"),
            ),
        )
        .get_matches();

    let config = load_config(matches.get_one::<String>("config")).unwrap_or_else(|e| fail(e));
    let registry = LanguageRegistry::with_defaults().unwrap_or_else(|e| fail(e));

    match matches.subcommand() {
        Some(("lex", lex_matches)) => handle_lex_command(lex_matches, &registry, &config),
        Some(("languages", languages_matches)) => {
            handle_languages_command(languages_matches, &registry)
        }
        Some(("serve", serve_matches)) => handle_serve_command(serve_matches, registry, config),
        _ => unreachable!(),
    }
}

/// Defaults, then `./patlex.toml` when present, then `--config`.
fn load_config(path: Option<&String>) -> Result<PatlexConfig, ConfigError> {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    let loader = match path {
        Some(path) => loader.with_file(path),
        None => loader,
    };
    loader.build()
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(1);
}

/// Handle the lex command
fn handle_lex_command(matches: &ArgMatches, registry: &LanguageRegistry, config: &PatlexConfig) {
    let language = matches.get_one::<String>("language").unwrap();
    let source = match matches.get_one::<String>("path") {
        Some(path) => std::fs::read_to_string(path)
            .unwrap_or_else(|e| fail(format!("reading {path}: {e}"))),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .unwrap_or_else(|e| fail(format!("reading stdin: {e}")));
            buf
        }
    };

    let discard: Vec<String> = match matches.get_one::<String>("discard") {
        Some(list) => list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        None => config.discard_for(language),
    };

    let lexer = registry
        .lexer(language, discard)
        .unwrap_or_else(|e| fail(e));
    let tokens = lexer.lex(&source).unwrap_or_else(|e| fail(e));

    let format = matches.get_one::<String>("format").unwrap();
    let output = match format.as_str() {
        "json" => serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| fail(e)),
        "yaml" => serde_yaml::to_string(&tokens).unwrap_or_else(|e| fail(e)),
        "html" => {
            let annotate = matches.get_flag("annotate") || config.render.annotate;
            rendering::render(&tokens, &config.render.raw_categories, annotate)
        }
        _ => tokens
            .iter()
            .map(|t| format!("{}\t{}\t{:?}\n", t.start, t.category, t.text))
            .collect(),
    };

    print!("{}", output);
}

/// Handle the languages command
fn handle_languages_command(matches: &ArgMatches, registry: &LanguageRegistry) {
    if let Some(language) = matches.get_one::<String>("language") {
        let spec = registry
            .get(language)
            .unwrap_or_else(|| fail(format!("unknown language '{language}'")));
        for category in spec.categories() {
            let marker = if spec.is_wrong(category.name()) { " (wrong)" } else { "" };
            println!("{}{}", category.name(), marker);
            for matcher in category.matchers() {
                println!("    {}", matcher.pattern());
            }
        }
        return;
    }

    println!("Available languages:\n");
    for name in registry.list_languages() {
        let Some(spec) = registry.get(&name) else {
            continue;
        };
        let label = spec.metadata().get("name").cloned().unwrap_or_else(|| name.clone());
        println!(
            "  {:<8} {:<8} {} categories",
            name,
            label,
            spec.category_names().count()
        );
    }
}

/// Handle the serve command
fn handle_serve_command(matches: &ArgMatches, registry: LanguageRegistry, config: PatlexConfig) {
    let address = matches
        .get_one::<String>("address")
        .cloned()
        .unwrap_or_else(|| config.server.address.clone());
    let state = AppState::new(registry, config).unwrap_or_else(|e| fail(e));

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| fail(e));
    if let Err(e) = runtime.block_on(server::serve(state, &address)) {
        fail(e);
    }
}
