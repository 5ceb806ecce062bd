use circlemap_core::{ParseError, parse_dataset};
use circlemap_layout::{Engine, ForceTablePolicy, LayoutConfig, TracingObserver, UpdateMode};
use circlemap_render::{LayoutSummary, render_error_report, render_gnuplot};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Config(serde_json::Error),
    Parse(ParseError),
    Layout(circlemap_layout::Error),
    Render(circlemap_render::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Config(err) => write!(f, "invalid layout config: {err}"),
            CliError::Parse(err) => write!(f, "{} {err}", err.context()),
            CliError::Layout(err) => write!(f, "layout failed: {err}"),
            CliError::Render(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value)
    }
}

impl From<circlemap_layout::Error> for CliError {
    fn from(value: circlemap_layout::Error) -> Self {
        Self::Layout(value)
    }
}

impl From<circlemap_render::Error> for CliError {
    fn from(value: circlemap_render::Error) -> Self {
        Self::Render(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum OutputFormat {
    #[default]
    Gnuplot,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gnuplot" | "gp" => Ok(Self::Gnuplot),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    input: Option<String>,
    out: Option<String>,
    format: OutputFormat,
    pretty: bool,
    config: Option<String>,
    max_iterations: Option<usize>,
    step_factor: Option<f64>,
    threshold: Option<f64>,
    update_mode: Option<UpdateMode>,
    reset_forces: bool,
}

fn usage() -> &'static str {
    "circlemap\n\
\n\
USAGE:\n\
  circlemap [--out <path>] [--format gnuplot|json] [--pretty] [--config <json>]\n\
            [--max-iterations <n>] [--step-factor <f>] [--threshold <f>]\n\
            [--update sequential|simultaneous] [--reset-forces] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin and output goes to stdout.\n\
  - Otherwise output defaults to '<path>.out'.\n\
  - If the input cannot be read, an error report is written instead of the plot.\n\
  - --config loads layout settings from JSON; the individual flags override it.\n\
  - Set RUST_LOG=info to see progress of long runs.\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--reset-forces" => args.reset_forces = true,
            "--out" => args.out = Some(next_value(&mut it)?.clone()),
            "--config" => args.config = Some(next_value(&mut it)?.clone()),
            "--format" => {
                args.format = next_value(&mut it)?
                    .parse::<OutputFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--update" => {
                args.update_mode = Some(
                    next_value(&mut it)?
                        .parse::<UpdateMode>()
                        .map_err(|_| CliError::Usage(usage()))?,
                );
            }
            "--max-iterations" => {
                args.max_iterations = Some(
                    next_value(&mut it)?
                        .parse::<usize>()
                        .map_err(|_| CliError::Usage(usage()))?,
                );
            }
            "--step-factor" => {
                args.step_factor = Some(
                    next_value(&mut it)?
                        .parse::<f64>()
                        .map_err(|_| CliError::Usage(usage()))?,
                );
            }
            "--threshold" => {
                args.threshold = Some(
                    next_value(&mut it)?
                        .parse::<f64>()
                        .map_err(|_| CliError::Usage(usage()))?,
                );
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, std::io::Error> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path),
    }
}

fn load_config(args: &Args) -> Result<LayoutConfig, CliError> {
    let mut config = match args.config.as_deref() {
        Some(path) => serde_json::from_str::<LayoutConfig>(&std::fs::read_to_string(path)?)?,
        None => LayoutConfig::default(),
    };
    if let Some(n) = args.max_iterations {
        config.max_iterations = n;
    }
    if let Some(f) = args.step_factor {
        config.step_factor = f;
    }
    if let Some(t) = args.threshold {
        config.convergence_threshold = t;
    }
    if let Some(mode) = args.update_mode {
        config.update_mode = mode;
    }
    if args.reset_forces {
        config.force_table = ForceTablePolicy::ResetEachIteration;
    }
    Ok(config)
}

/// `--out` if given, `<input>.out` for file input, stdout otherwise.
fn output_path(args: &Args) -> Option<PathBuf> {
    if let Some(out) = args.out.as_deref() {
        return Some(PathBuf::from(out));
    }
    match args.input.as_deref() {
        None | Some("-") => None,
        Some(path) => Some(PathBuf::from(format!("{path}.out"))),
    }
}

fn write_text(text: &str, out: Option<&Path>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let out = output_path(&args);
    let engine = Engine::new(load_config(&args)?)?;

    let parsed = read_input(args.input.as_deref())
        .map_err(ParseError::from)
        .and_then(|text| parse_dataset(&text));
    let dataset = match parsed {
        Ok(dataset) => dataset,
        Err(err) => {
            write_text(
                &render_error_report(err.context(), &err.to_string()),
                out.as_deref(),
            )?;
            return Err(CliError::Parse(err));
        }
    };

    let (title, mut graph) = dataset.into_parts();
    let outcome = engine.run_with_observer(&mut graph, &mut TracingObserver)?;
    if !outcome.converged() {
        tracing::warn!(
            iterations = outcome.iterations,
            epsilon = outcome.final_epsilon,
            "iteration cap reached before the layout converged"
        );
    }

    let text = match args.format {
        OutputFormat::Gnuplot => render_gnuplot(&graph, &title, outcome.iterations)?,
        OutputFormat::Json => {
            let mut json = LayoutSummary::new(&graph, &title, &outcome).to_json(args.pretty)?;
            json.push('\n');
            json
        }
    };
    write_text(&text, out.as_deref())?;
    if let Some(path) = out.as_deref() {
        tracing::info!(path = %path.display(), iterations = outcome.iterations, "layout written");
    }
    Ok(())
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
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
        Err(CliError::Parse(err)) => {
            let code = if err.is_format_error() { 1 } else { 3 };
            eprintln!("{}", CliError::Parse(err));
            std::process::exit(code);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
