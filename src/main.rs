mod input;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::input::{InputError, load_roster};
use crate::model::weights::DEFAULT_WEIGHTS;
use crate::pipeline::averages::{AveragesError, team_attribute_averages};
use crate::pipeline::scores::{ScoreError, score_applicants};
use crate::report::{ReportError, ReportFormat, write_report};

#[derive(Parser, Debug)]
#[command(name = "teamfit")]
#[command(about = "Applicant-to-team compatibility scoring", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a batch of applicants against a team roster
    Run {
        /// Roster JSON with "team" and "applicants" lists
        #[arg(long, default_value = "input.json")]
        input: PathBuf,

        /// Output file for the scored applicants
        #[arg(long, default_value = "scored_applicants.json")]
        out: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: ReportFormat,
    },
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Averages(#[from] AveragesError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> Result<(), RunError> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run { input, out, format } => {
            let roster = load_roster(&input)?;
            let averages = team_attribute_averages(&roster.team)?;
            tracing::info!(
                "team averages: intelligence={:.2} strength={:.2} endurance={:.2} spicyFoodTolerance={:.2}",
                averages.intelligence,
                averages.strength,
                averages.endurance,
                averages.spicy_food_tolerance
            );
            let scored = score_applicants(&roster.applicants, &averages, &DEFAULT_WEIGHTS)?;
            write_report(&scored, &out, format)?;
            Ok(())
        }
    }
}
