//! Command-line interface for jai-lex
//! Runs the tokenizer and structure scanner over a JAI file and prints the result.
//!
//! Usage:
//!   jai-lex tokens `<path>` [--format `<format>`] [--all]     - Token stream (trivia with --all)
//!   jai-lex depth `<path>` `<offset>`                         - Nesting depth at a byte offset
//!   jai-lex defun `<path>` (--offset `<n>` | --line `<n>`)   - Enclosing procedure lines
//!   jai-lex outline `<path>` [--format `<format>`]            - Top-level declarations
//!
//! Configuration layers, later ones winning: the built-in defaults, `jai-lex.toml` in the
//! working directory if it exists, then the file given with `--config <file>`. Logging goes to
//! stderr and is controlled by `RUST_LOG`.

use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command};
use jai_lex::jai::config::{JaiLexConfig, Loader};
use jai_lex::jai::lexing::{Lexed, Tokenizer, Vocabulary};
use jai_lex::jai::outline::outline_with;
use jai_lex::jai::structure::StructureScanner;
use serde::Serialize;
use std::fmt::Display;
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("json output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml output: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{0}")]
    Usage(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Simple,
    Json,
    Yaml,
}

impl OutputFormat {
    fn from_matches(matches: &ArgMatches) -> Self {
        match matches.get_one::<String>("format").map(String::as_str) {
            Some("json") => OutputFormat::Json,
            Some("yaml") => OutputFormat::Yaml,
            _ => OutputFormat::Simple,
        }
    }
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format")
        .value_parser(["simple", "json", "yaml"])
        .default_value("simple")
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the JAI source file")
        .required(true)
        .index(1)
}

fn cli() -> Command {
    Command::new("jai-lex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize JAI source and query its brace structure")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults")
                .global(true),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the token stream")
                .arg(path_arg())
                .arg(format_arg())
                .arg(
                    Arg::new("all")
                        .long("all")
                        .help("Include whitespace and comment tokens")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("depth")
                .about("Print the {/( nesting depth at a byte offset")
                .arg(path_arg())
                .arg(
                    Arg::new("offset")
                        .help("Byte offset into the file")
                        .required(true)
                        .index(2)
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("defun")
                .about("Print the lines of the procedure enclosing a position")
                .arg(path_arg())
                .arg(
                    Arg::new("offset")
                        .long("offset")
                        .help("Byte offset into the file")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("line")
                        .long("line")
                        .help("1-based line number")
                        .value_parser(clap::value_parser!(usize)),
                )
                .group(
                    ArgGroup::new("position")
                        .args(["offset", "line"])
                        .required(true),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("outline")
                .about("List top-level declarations")
                .arg(path_arg())
                .arg(format_arg()),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;

    match matches.subcommand() {
        Some(("tokens", sub)) => handle_tokens_command(sub, &config),
        Some(("depth", sub)) => handle_depth_command(sub, &config),
        Some(("defun", sub)) => handle_defun_command(sub, &config),
        Some(("outline", sub)) => handle_outline_command(sub, &config),
        _ => unreachable!(),
    }
}

/// Project file picked up from the working directory when present.
const PROJECT_CONFIG: &str = "jai-lex.toml";

fn load_config(matches: &ArgMatches) -> Result<JaiLexConfig, CliError> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    Ok(loader.build()?)
}

fn read_source(matches: &ArgMatches) -> Result<String, CliError> {
    let path = required::<String>(matches, "path")?;
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })
}

fn required<'m, T>(matches: &'m ArgMatches, id: &str) -> Result<&'m T, CliError>
where
    T: Clone + Send + Sync + 'static,
{
    matches
        .get_one::<T>(id)
        .ok_or_else(|| CliError::Usage(format!("missing argument <{}>", id)))
}

fn lex_with<'a>(
    source: &'a str,
    vocabulary: &'a Vocabulary,
    config: &JaiLexConfig,
) -> Lexed<'a> {
    let lexed = Tokenizer::new(source)
        .vocabulary(vocabulary)
        .options(config.lex_options())
        .finish();
    for diagnostic in &lexed.diagnostics {
        warn!(%diagnostic, "lexing diagnostic");
    }
    lexed
}

/// Print `value` in the requested format; `simple` uses the given line renderer.
fn emit<T, F>(value: &T, format: OutputFormat, simple: F) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> Vec<String>,
{
    match format {
        OutputFormat::Simple => {
            for line in simple() {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
    }
    Ok(())
}

fn render_lines<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Display,
{
    items.into_iter().map(|item| item.to_string()).collect()
}

fn handle_tokens_command(matches: &ArgMatches, config: &JaiLexConfig) -> Result<(), CliError> {
    let source = read_source(matches)?;
    let vocabulary = config.vocabulary();
    let lexed = lex_with(&source, &vocabulary, config);

    let tokens: Vec<_> = if matches.get_flag("all") {
        lexed.tokens.iter().collect()
    } else {
        lexed.significant().collect()
    };
    debug!(count = tokens.len(), "tokens selected");

    emit(&tokens, OutputFormat::from_matches(matches), || {
        render_lines(tokens.iter())
    })
}

fn handle_depth_command(matches: &ArgMatches, config: &JaiLexConfig) -> Result<(), CliError> {
    let source = read_source(matches)?;
    let offset = *required::<usize>(matches, "offset")?;
    if offset > source.len() {
        return Err(CliError::Usage(format!(
            "offset {} is past the end of the file ({} bytes)",
            offset,
            source.len()
        )));
    }

    let vocabulary = config.vocabulary();
    let scanner = StructureScanner::from_lexed(&source, lex_with(&source, &vocabulary, config));
    println!("{}", scanner.depth_at(offset));
    Ok(())
}

fn handle_defun_command(matches: &ArgMatches, config: &JaiLexConfig) -> Result<(), CliError> {
    let source = read_source(matches)?;
    let vocabulary = config.vocabulary();
    let scanner = StructureScanner::from_lexed(&source, lex_with(&source, &vocabulary, config));

    let position = match (
        matches.get_one::<usize>("offset"),
        matches.get_one::<usize>("line"),
    ) {
        (Some(&offset), _) if offset <= source.len() => offset,
        (Some(&offset), _) => {
            return Err(CliError::Usage(format!(
                "offset {} is past the end of the file ({} bytes)",
                offset,
                source.len()
            )))
        }
        (None, Some(&line)) if (1..=scanner.line_count()).contains(&line) => {
            scanner.line_start(line)
        }
        (None, Some(&line)) => {
            return Err(CliError::Usage(format!(
                "line {} is outside 1..={}",
                line,
                scanner.line_count()
            )))
        }
        (None, None) => return Err(CliError::Usage("expected --offset or --line".into())),
    };

    let boundary = scanner.find_enclosing_procedure(position);
    emit(&boundary, OutputFormat::from_matches(matches), || {
        vec![match boundary {
            Some(b) => format!("{}..{}", b.start_line, b.end_line),
            None => "none".to_string(),
        }]
    })
}

fn handle_outline_command(matches: &ArgMatches, config: &JaiLexConfig) -> Result<(), CliError> {
    let source = read_source(matches)?;
    let vocabulary = config.vocabulary();
    let scanner = StructureScanner::from_lexed(&source, lex_with(&source, &vocabulary, config));
    let declarations = outline_with(&scanner, config.outline_options());

    emit(&declarations, OutputFormat::from_matches(matches), || {
        declarations
            .iter()
            .map(|d| match d.boundary {
                Some(b) => format!(
                    "{} {} {} ({}..{})",
                    d.line,
                    d.kind.as_str(),
                    d.name,
                    b.start_line,
                    b.end_line
                ),
                None => format!("{} {} {}", d.line, d.kind.as_str(), d.name),
            })
            .collect()
    })
}
