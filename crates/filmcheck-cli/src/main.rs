// Rust guideline compliant 2026-02-09

//! Film Checker CLI Application
//!
//! Command-line lookup of film titles and people by name or identifier.

use clap::Parser;
use filmcheck_app::{AppError, ApiClient, LookupRequest};
use filmcheck_cli::commands;
use filmcheck_cli::logging::init_logging;
use filmcheck_cli::{create_formatter, init_color};
use filmcheck_core::{Config, KindFilter};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "film-ch",
    version,
    about = "Film Checker: look up films, series and people by name or id",
    long_about = "Film Checker resolves a free-text name against the suggestion service, asks you to pick a candidate when the name is ambiguous, and prints the details of the chosen title or person.",
    after_help = "Examples:\n  film-ch The Dark Knight\n  film-ch --title Heat\n  film-ch --person Tom Hanks\n  film-ch --search Interstellar\n  film-ch tt0944947\n  film-ch --json nm0000138\n"
)]
struct Cli {
    /// Name or identifier (tt... for titles, nm... for people)
    name: Vec<String>,

    /// Always choose among all search candidates
    #[arg(short, long)]
    search: bool,

    /// Only accept exact matches that are titles
    #[arg(short, long)]
    title: bool,

    /// Only accept exact matches that are people
    #[arg(short, long)]
    person: bool,

    /// Enable JSON output
    #[arg(long)]
    json: bool,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Custom config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

impl From<FormatArg> for filmcheck_core::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::Table => Self::Table,
            FormatArg::Plain => Self::Plain,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(&cli.log_level, cli.log_file.as_deref())?;

    let use_color = init_color(cli.no_color);

    let config = Config::load(cli.config.as_deref())?;
    let format = match (cli.format, cli.json) {
        (Some(arg), _) => arg.into(),
        (None, true) => filmcheck_core::OutputFormat::Json,
        (None, false) => config.output_format,
    };
    let formatter = create_formatter(format, use_color);
    debug!(format = format.as_str(), "configuration loaded");

    let request = LookupRequest::from_words(
        &cli.name,
        cli.search,
        KindFilter::from_flags(cli.title, cli.person),
    );

    let result = ApiClient::new(&config)
        .map_err(anyhow::Error::from)
        .and_then(|client| {
            commands::lookup::execute(&request, &client, &client, formatter.as_ref())
        });

    if let Err(error) = result {
        let message = match error.downcast_ref::<AppError>() {
            Some(app_error) => formatter.format_app_error(app_error),
            None => formatter.format_error(&error.to_string()),
        };
        eprintln!("{}", message);
    }

    Ok(())
}
