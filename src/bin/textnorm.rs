//! Command-line interface for textnorm
//! Runs the text utilities over command-line arguments for shell scripts and quick checks.
//!
//! Usage:
//!   textnorm codec `<name>` [--default `<name>`] [--no-default] [--json] - Resolve an encoding name
//!   textnorm break `<text>` --length `<n>` [--hyphenate]           - Insert soft break points
//!   textnorm tokens `<name>` [--remove-digits] [--json]            - Tokenize an identifier
//!   textnorm callsign `<name>` [--count `<n>`] [--json]            - List callsign candidates
//!   textnorm dot-atom `<value>`                                    - Validate a dot-atom
//!   textnorm truncate `<value>` --max `<n>` [--ellipsis `<s>`]     - Truncate to a visible width
//!   textnorm show-config                                         - Print the effective configuration
//!
//! Configuration layers, later wins: built-in defaults, the user file
//! (`$XDG_CONFIG_HOME/textnorm/textnorm.toml`), `--config <file>`, `--set key=value`.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use std::process::ExitCode;
use textnorm::codec::{Codec, CodecRegistry};
use textnorm::config::{Loader, TextnormConfig};
use textnorm::soft_break::{soft_break, soft_break_with, soft_hyphenate};
use textnorm::{is_valid_dot_atom, tokens_from_name, truncate_chars, CallsignChoices};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let matches = command().get_matches();
    init_tracing(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn command() -> Command {
    Command::new("textnorm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Text normalization utilities for identifiers and display strings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .global(true)
                .value_name("KEY=VALUE")
                .action(ArgAction::Append)
                .help("Override one configuration key, e.g. truncate.ellipsis=~"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log decisions to stderr"),
        )
        .subcommand(
            Command::new("codec")
                .about("Resolve an encoding name to its canonical text codec")
                .arg(Arg::new("name").required(true).index(1))
                .arg(
                    Arg::new("default")
                        .long("default")
                        .short('d')
                        .help("Fallback codec (defaults to the configured one)"),
                )
                .arg(
                    Arg::new("no-default")
                        .long("no-default")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("default")
                        .help("Fail instead of falling back"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the codec, its aliases and whether the fallback was used"),
                ),
        )
        .subcommand(
            Command::new("break")
                .about("Insert zero-width break opportunities into a long string")
                .arg(Arg::new("text").required(true).index(1))
                .arg(
                    Arg::new("length")
                        .long("length")
                        .short('l')
                        .value_parser(value_parser!(usize))
                        .default_value("15")
                        .help("Segment length above which pieces are hyphenated"),
                )
                .arg(
                    Arg::new("hyphenate")
                        .long("hyphenate")
                        .action(ArgAction::SetTrue)
                        .help("Soft-hyphenate pieces longer than --length"),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Split an identifier into lowercase word tokens")
                .arg(Arg::new("name").required(true).index(1))
                .arg(
                    Arg::new("remove-digits")
                        .long("remove-digits")
                        .action(ArgAction::SetTrue),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("callsign")
                .about("List the first callsign candidates for a name")
                .arg(Arg::new("name").required(true).index(1))
                .arg(
                    Arg::new("count")
                        .long("count")
                        .short('n')
                        .value_parser(value_parser!(usize))
                        .default_value("5"),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("dot-atom")
                .about("Check a value against the dot-atom grammar (exit code 1 if invalid)")
                .arg(Arg::new("value").required(true).index(1)),
        )
        .subcommand(
            Command::new("truncate")
                .about("Shorten a value to a maximum number of characters")
                .arg(Arg::new("value").required(true).index(1))
                .arg(
                    Arg::new("max")
                        .long("max")
                        .short('m')
                        .required(true)
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("ellipsis")
                        .long("ellipsis")
                        .short('e')
                        .help("Marker appended after a cut (defaults to the configured one)"),
                ),
        )
        .subcommand(Command::new("show-config").about("Print the effective configuration as JSON"))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("textnorm=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<TextnormConfig> {
    let mut loader = Loader::new().with_user_config();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    for assignment in matches.get_many::<String>("set").into_iter().flatten() {
        loader = loader.set_assignment(assignment)?;
    }
    loader.build().context("loading configuration")
}

fn run(matches: &ArgMatches) -> Result<ExitCode> {
    let config = load_config(matches)?;

    match matches.subcommand() {
        Some(("codec", sub)) => handle_codec(sub, &config),
        Some(("break", sub)) => handle_break(sub),
        Some(("tokens", sub)) => handle_tokens(sub),
        Some(("callsign", sub)) => handle_callsign(sub, &config),
        Some(("dot-atom", sub)) => Ok(handle_dot_atom(sub)),
        Some(("truncate", sub)) => handle_truncate(sub, &config),
        Some(("show-config", _)) => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(ExitCode::SUCCESS)
        }
        _ => Ok(ExitCode::FAILURE),
    }
}

fn string_arg<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .unwrap_or_default()
}

fn usize_arg(matches: &ArgMatches, id: &str) -> usize {
    matches.get_one::<usize>(id).copied().unwrap_or_default()
}

fn handle_codec(matches: &ArgMatches, config: &TextnormConfig) -> Result<ExitCode> {
    let registry = config.codec.registry()?;
    let name = string_arg(matches, "name");
    let default = if matches.get_flag("no-default") {
        None
    } else {
        matches
            .get_one::<String>("default")
            .map(String::as_str)
            .or_else(|| config.codec.default_codec())
    };

    match registry.resolve(name, default) {
        Some(codec) if matches.get_flag("json") => {
            let report = CodecReport::new(&registry, name, codec);
            println!("{}", serde_json::to_string(&report)?);
            Ok(ExitCode::SUCCESS)
        }
        Some(codec) => {
            println!("{codec}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("Unsupported encoding '{name}'");
            Ok(ExitCode::FAILURE)
        }
    }
}

#[derive(Serialize)]
struct CodecReport<'a> {
    requested: &'a str,
    codec: Codec,
    aliases: Vec<&'a str>,
    fallback: bool,
}

impl<'a> CodecReport<'a> {
    fn new(registry: &'a CodecRegistry, requested: &'a str, codec: Codec) -> Self {
        CodecReport {
            requested,
            codec,
            aliases: registry.aliases_of(codec),
            fallback: registry.get(requested).is_none(),
        }
    }
}

fn handle_break(matches: &ArgMatches) -> Result<ExitCode> {
    let text = string_arg(matches, "text");
    let length = usize_arg(matches, "length");
    let broken = if matches.get_flag("hyphenate") {
        soft_break_with(text, length, soft_hyphenate)
    } else {
        soft_break(text, length)
    };
    println!("{broken}");
    Ok(ExitCode::SUCCESS)
}

fn handle_tokens(matches: &ArgMatches) -> Result<ExitCode> {
    let tokens = tokens_from_name(string_arg(matches, "name"), matches.get_flag("remove-digits"));
    print_list(&tokens, matches.get_flag("json"))?;
    Ok(ExitCode::SUCCESS)
}

fn handle_callsign(matches: &ArgMatches, config: &TextnormConfig) -> Result<ExitCode> {
    let options = config.callsign.options()?;
    let candidates: Vec<String> =
        CallsignChoices::with_options(string_arg(matches, "name"), &options)
            .take(usize_arg(matches, "count"))
            .collect();
    print_list(&candidates, matches.get_flag("json"))?;
    Ok(ExitCode::SUCCESS)
}

fn handle_dot_atom(matches: &ArgMatches) -> ExitCode {
    if is_valid_dot_atom(string_arg(matches, "value")) {
        println!("valid");
        ExitCode::SUCCESS
    } else {
        println!("invalid");
        ExitCode::FAILURE
    }
}

fn handle_truncate(matches: &ArgMatches, config: &TextnormConfig) -> Result<ExitCode> {
    let ellipsis = matches
        .get_one::<String>("ellipsis")
        .unwrap_or(&config.truncate.ellipsis);
    let value = string_arg(matches, "value");
    println!("{}", truncate_chars(value, usize_arg(matches, "max"), ellipsis));
    Ok(ExitCode::SUCCESS)
}

fn print_list(items: &[String], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(items)?);
    } else {
        for item in items {
            println!("{item}");
        }
    }
    Ok(())
}
