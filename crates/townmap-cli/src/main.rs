use serde::Serialize;
use std::io::Read;
use townmap::alg::total_weight;
use townmap::{Hop, ImportOptions, ImportSummary, TownGraphManager};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TOWNMAP_LOG";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Townmap(townmap::Error),
    Json(serde_json::Error),
    NoPath { from: String, to: String },
    NoRoad { from: String, to: String },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Townmap(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::NoPath { from, to } => write!(f, "No path from {from} to {to}"),
            CliError::NoRoad { from, to } => write!(f, "No road between {from} and {to}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<townmap::Error> for CliError {
    fn from(value: townmap::Error) -> Self {
        Self::Townmap(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    #[default]
    Towns,
    Roads,
    Road,
    Path,
    Import,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    from: Option<String>,
    to: Option<String>,
    json: bool,
    pretty: bool,
    lenient: bool,
}

#[derive(Serialize)]
struct PathOut<'a> {
    from: &'a str,
    to: &'a str,
    distance: u64,
    hops: &'a [Hop],
}

#[derive(Serialize)]
struct RoadOut<'a> {
    from: &'a str,
    to: &'a str,
    road: &'a str,
}

fn usage() -> &'static str {
    "townmap-cli\n\
\n\
USAGE:\n\
  townmap-cli [towns] [--json] [--pretty] [--lenient] [<path>|-]\n\
  townmap-cli roads [--json] [--pretty] [--lenient] [<path>|-]\n\
  townmap-cli road --from <town> --to <town> [--json] [--pretty] [--lenient] [<path>|-]\n\
  townmap-cli path --from <town> --to <town> [--json] [--pretty] [--lenient] [<path>|-]\n\
  townmap-cli import [--pretty] [--lenient] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the road file is read from stdin.\n\
  - Use `-- <path>` for a road file named like a command (e.g. `-- roads`).\n\
  - Each line of a road file is `RoadName,Weight;SourceTown;DestinationTown`.\n\
  - --lenient skips malformed lines instead of failing.\n\
  - Set TOWNMAP_LOG (e.g. `debug`) to control log output on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "towns" => args.command = Command::Towns,
            "roads" => args.command = Command::Roads,
            "road" => args.command = Command::Road,
            "path" => args.command = Command::Path,
            "import" => args.command = Command::Import,
            "--json" => args.json = true,
            "--pretty" => args.pretty = true,
            "--lenient" => args.lenient = true,
            "--from" => {
                let Some(town) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.from = Some(town.clone());
            }
            "--to" => {
                let Some(town) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.to = Some(town.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    let needs_endpoints = matches!(args.command, Command::Road | Command::Path);
    if needs_endpoints && (args.from.is_none() || args.to.is_none()) {
        return Err(CliError::Usage(usage()));
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn write_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load(args: &Args) -> Result<(TownGraphManager, ImportSummary), CliError> {
    let text = read_input(args.input.as_deref())?;
    let mut map = TownGraphManager::new();
    let options = ImportOptions {
        lenient: args.lenient,
    };
    let summary = map.populate_from_str(&text, options)?;
    tracing::debug!(?summary, input = args.input.as_deref().unwrap_or("-"), "road file loaded");
    Ok((map, summary))
}

fn run(args: Args) -> Result<(), CliError> {
    let (map, summary) = load(&args)?;
    match args.command {
        Command::Import => write_json(&summary, args.pretty),
        Command::Towns => {
            let towns = map.all_towns();
            if args.json {
                write_json(&towns, args.pretty)
            } else {
                write_lines(&towns);
                Ok(())
            }
        }
        Command::Roads => {
            let roads = map.all_roads();
            if args.json {
                write_json(&roads, args.pretty)
            } else {
                write_lines(&roads);
                Ok(())
            }
        }
        Command::Road => {
            let from = args.from.as_deref().unwrap_or_default();
            let to = args.to.as_deref().unwrap_or_default();
            let Some(road) = map.get_road(from, to) else {
                return Err(CliError::NoRoad {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            };
            if args.json {
                write_json(&RoadOut { from, to, road }, args.pretty)
            } else {
                println!("{road}");
                Ok(())
            }
        }
        Command::Path => {
            let from = args.from.as_deref().unwrap_or_default();
            let to = args.to.as_deref().unwrap_or_default();
            let hops = map.shortest_path(from, to);
            if hops.is_empty() {
                return Err(CliError::NoPath {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
            if args.json {
                let out = PathOut {
                    from,
                    to,
                    distance: total_weight(&hops),
                    hops: &hops,
                };
                write_json(&out, args.pretty)
            } else {
                let lines: Vec<String> = hops.iter().map(ToString::to_string).collect();
                write_lines(&lines);
                Ok(())
            }
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_logging();

    match run(args) {
        Ok(()) => {}
        Err(err @ (CliError::NoPath { .. } | CliError::NoRoad { .. })) => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
