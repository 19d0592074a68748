mod debug_report;

use aquabot::{
    AvailabilityFilter, Catalog, CategoryFilter, FilterSummary, Options, SourceKind, WaterSource, filter_map_points_with,
    filter_sources_with, respond_verbose, seed,
};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "AQUABOT_LOG";

fn main() {
    if let Err(err) = init_tracing() {
        eprintln!("warning: {err}");
    }

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() -> Result<(), String> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| format!("tracing init failed: {err}"))
}

fn run(config: CliConfig) -> aquabot::Result<()> {
    let options = Options { trim_query: config.trim_query };

    match config.command {
        Command::Chat { input } => {
            let res = respond_verbose(&input);
            debug_report::print_reply(&res, config.color);
        }
        Command::Sources { kind, query, availability, catalog } => {
            let sources: Vec<WaterSource> = match catalog {
                Some(path) => Catalog::from_path(path)?.into_sources(),
                None => seeded_sources(kind),
            };
            let sources: Vec<WaterSource> = match kind {
                Some(kind) => sources.into_iter().filter(|s| s.kind == kind).collect(),
                None => sources,
            };

            let shown = filter_sources_with(&sources, &query, &availability, &options);
            let summary = FilterSummary::new(shown.len(), sources.len());
            debug_report::print_sources(&shown, summary, config.color);
        }
        Command::Map { query, category } => {
            let points = seed::map_points();
            let shown = filter_map_points_with(&points, &query, &category, &options);
            let summary = FilterSummary::new(shown.len(), points.len());
            debug_report::print_map_points(&shown, summary, config.color);
        }
    }

    Ok(())
}

fn seeded_sources(kind: Option<SourceKind>) -> Vec<WaterSource> {
    match kind {
        Some(SourceKind::Tanker) => seed::TANKERS.clone(),
        Some(SourceKind::Atm) => seed::ATMS.clone(),
        None => seed::TANKERS.iter().chain(seed::ATMS.iter()).cloned().collect(),
    }
}

enum Command {
    Chat { input: String },
    Sources { kind: Option<SourceKind>, query: String, availability: AvailabilityFilter, catalog: Option<String> },
    Map { query: String, category: CategoryFilter },
}

struct CliConfig {
    command: Command,
    color: bool,
    trim_query: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliConfig, String> {
    let mut color = io::stdout().is_terminal();
    let mut trim_query = true;
    let mut command_name: Option<String> = None;
    let mut input: Option<String> = None;
    let mut query = String::new();
    let mut kind: Option<SourceKind> = None;
    let mut availability = AvailabilityFilter::All;
    let mut category = CategoryFilter::All;
    let mut catalog: Option<String> = None;

    while let Some(arg) = args.next() {
        // `--flag=value` carries its value inline.
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let takes_value = matches!(flag.as_str(), "--query" | "--kind" | "--availability" | "--category" | "--catalog");
        if inline.is_some() && !takes_value {
            return Err(format!("error: {flag} does not take a value"));
        }

        match flag.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("aquabot {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--no-trim" => trim_query = false,
            "--query" | "-q" => {
                query = flag_value("--query", inline, &mut args)?;
            }
            "--kind" | "-k" => {
                let value = flag_value("--kind", inline, &mut args)?;
                kind = Some(value.parse::<SourceKind>().map_err(|e| format!("error: {e}"))?);
            }
            "--availability" | "-a" => {
                let value = flag_value("--availability", inline, &mut args)?;
                availability = value.parse::<AvailabilityFilter>().map_err(|e| format!("error: {e}"))?;
            }
            "--category" | "-c" => {
                let value = flag_value("--category", inline, &mut args)?;
                category = value.parse::<CategoryFilter>().map_err(|e| format!("error: {e}"))?;
            }
            "--catalog" => {
                catalog = Some(flag_value("--catalog", inline, &mut args)?);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ if command_name.is_none() => command_name = Some(arg),
            _ => {
                if command_name.as_deref() != Some("chat") {
                    return Err(format!("error: unexpected argument '{arg}'"));
                }
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                input = Some(rest);
                break;
            }
        }
    }

    let command = match command_name.as_deref() {
        Some("chat") => {
            let input = match input {
                Some(value) => value,
                None => read_stdin_input()?,
            };
            Command::Chat { input }
        }
        Some("sources") => Command::Sources { kind, query, availability, catalog },
        Some("map") => Command::Map { query, category },
        Some(other) => return Err(format!("error: unknown command '{other}'\n\n{}", help_text())),
        None => return Err(format!("error: no command provided\n\n{}", help_text())),
    };

    Ok(CliConfig { command, color, trim_query })
}

fn flag_value(flag: &str, inline: Option<String>, args: &mut impl Iterator<Item = String>) -> Result<String, String> {
    match inline {
        Some(value) => Ok(value),
        None => args.next().ok_or_else(|| format!("error: {flag} expects a value")),
    }
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "aquabot {version}

Water-access assistant: keyword replies and source filtering.

Usage:
  aquabot [OPTIONS] chat [--] <text...>
  aquabot [OPTIONS] sources [--kind <kind>] [--query <text>] [--availability <a>] [--catalog <path>]
  aquabot [OPTIONS] map [--query <text>] [--category <c>]

Commands:
  chat                       Reply to <text> (or stdin) and show which rules fired.
  sources                    List tanker suppliers and water ATMs.
  map                        List map points (tankers, ATMs, reservoirs).

Options:
  -q, --query <text>         Search text matched against name and address.
  -k, --kind <kind>          tanker | atm
  -a, --availability <a>     all | available | limited | unavailable
  -c, --category <c>         all | dam | atm | tanker
  --catalog <path>           Load sources from a JSON file instead of the demo data.
  --no-trim                  Match the query without trimming surrounding whitespace.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}                 Log filter (e.g. debug, aquabot=trace). Default: warn.

Exit codes:
  0  Success.
  1  Runtime error (e.g. catalog could not be loaded).
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquabot::{Availability, Category};

    fn parse(args: &[&str]) -> Result<CliConfig, String> {
        parse_args(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn value_flags_accept_inline_form() {
        let config = parse(&["sources", "--kind=atm", "--availability=limited", "--query=road"]).unwrap();
        match config.command {
            Command::Sources { kind, query, availability, .. } => {
                assert_eq!(kind, Some(SourceKind::Atm));
                assert_eq!(query, "road");
                assert_eq!(availability, AvailabilityFilter::Only(Availability::Limited));
            }
            _ => panic!("expected sources command"),
        }

        let config = parse(&["map", "--category=dam"]).unwrap();
        match config.command {
            Command::Map { category, .. } => assert_eq!(category, CategoryFilter::Only(Category::Dam)),
            _ => panic!("expected map command"),
        }
    }

    #[test]
    fn inline_and_separate_values_agree() {
        let inline = parse(&["sources", "--catalog=data.json", "-k", "tanker"]).unwrap();
        match inline.command {
            Command::Sources { kind, catalog, .. } => {
                assert_eq!(kind, Some(SourceKind::Tanker));
                assert_eq!(catalog.as_deref(), Some("data.json"));
            }
            _ => panic!("expected sources command"),
        }
    }

    #[test]
    fn bad_flag_values_are_rejected() {
        assert!(parse(&["sources", "--kind=boat"]).is_err());
        assert!(parse(&["map", "--category"]).is_err());
        assert!(parse(&["map", "--no-trim=yes"]).is_err());
    }

    #[test]
    fn chat_keeps_equals_signs_in_text() {
        let config = parse(&["chat", "price=cost?"]).unwrap();
        match config.command {
            Command::Chat { input } => assert_eq!(input, "price=cost?"),
            _ => panic!("expected chat command"),
        }
    }

    #[test]
    fn second_tracing_init_reports_error() {
        let _ = init_tracing();
        let err = init_tracing().unwrap_err();
        assert!(err.starts_with("tracing init failed"));
    }
}
