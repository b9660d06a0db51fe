//! Command line entry point of the multi-species Game of Life.

mod telemetry;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use life_core::{LogFormat, RunConfig};
use life_game::{check_input, usage, Game, GameSummary, StateStore, XmlStateStore};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Multi-species Game of Life
///
/// Reads the initial world from an XML file, evolves it for the number of
/// iterations the file declares and keeps the latest generation in the
/// output file.
#[derive(Parser, Debug)]
#[command(name = "life-game")]
#[command(author, version, long_about = None)]
struct Cli {
    /// XML file with the initial state
    input: PathBuf,

    /// Output XML file (default: out.xml)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// JSON run configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_parser = ["text", "json"])]
    log_format: Option<String>,
}

fn main() -> ExitCode {
    println!("* The game has started.");

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let note = match err.kind() {
                ErrorKind::MissingRequiredArgument => None,
                kind => kind.as_str(),
            };
            return stop_with_error(note);
        }
    };

    match run(cli) {
        Ok(summary) => {
            info!(?summary, "Run complete");
            println!("* The game has successfully finished.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{:#}", err);
            stop_with_error(Some(&format!("{:#}", err)))
        }
    }
}

fn run(cli: Cli) -> Result<GameSummary> {
    let config = load_config(&cli)?;
    telemetry::init_telemetry(&config)?;

    println!("* Checking the input provided.");
    let input = check_input(&cli.input)?;

    println!("* Reading a state from the input file.");
    let mut store = XmlStateStore::new(input, &config.output_path);
    let state = store.read_state().context("State can not be read from file")?;

    println!("* Starting the game.");
    let mut game = Game::new(store, state, config.seed)?;
    let summary = game.start()?;

    Ok(summary)
}

fn load_config(cli: &Cli) -> Result<RunConfig> {
    let mut config = match &cli.config {
        Some(path) => RunConfig::from_json_file(path)
            .with_context(|| format!("Can not load the configuration {}", path.display()))?,
        None => RunConfig::default(),
    };

    if let Some(output) = &cli.output {
        config.output_path = output.to_string_lossy().into_owned();
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    match cli.log_format.as_deref() {
        Some("json") => config.log_format = LogFormat::Json,
        Some("text") => config.log_format = LogFormat::Text,
        _ => {}
    }

    Ok(config)
}

fn stop_with_error(note: Option<&str>) -> ExitCode {
    println!("{}", usage(note));
    ExitCode::FAILURE
}
