//! nutricare - elderly nutrition-risk assessment CLI
//!
//! Usage:
//!   nutricare classify subject.json          # Assess one questionnaire (or a JSON array)
//!   nutricare classify - < subject.json      # Read the questionnaire from stdin
//!   nutricare inspect --centroids            # Summarize the loaded artifacts
//!   nutricare validate --bundle model.json   # Check artifacts against the feature schema
//!   nutricare info                           # Nutrition statuses and their guidance
//!   nutricare options                        # Accepted answers for every question

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;
mod output;

use commands::{classify, info, inspect, options, validate};

/// nutricare - Elderly nutrition-risk assessment
///
/// Assigns questionnaire answers to the nearest nutrition-risk cluster and
/// prints the matching intervention guidance.
#[derive(Parser)]
#[command(name = "nutricare")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    artifacts: ArtifactArgs,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

/// Where the fitted artifacts live.
#[derive(Args, Debug, Clone)]
pub(crate) struct ArtifactArgs {
    /// Fitted scaler file
    #[arg(long, global = true, env = "NUTRICARE_SCALER", default_value = "scaler.json")]
    pub(crate) scaler: PathBuf,

    /// Representative points file
    #[arg(long, global = true, env = "NUTRICARE_MODEL", default_value = "cure_model.json")]
    pub(crate) model: PathBuf,

    /// Single bundle file holding scaler and representative points
    #[arg(long, global = true, env = "NUTRICARE_BUNDLE", conflicts_with_all = ["scaler", "model"])]
    pub(crate) bundle: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess questionnaire answers
    Classify {
        /// Questionnaire JSON file, or - for stdin
        #[arg(value_name = "FILE|-")]
        input: PathBuf,

        /// Print the short guidance instead of the full narrative
        #[arg(long)]
        summary: bool,
    },

    /// Summarize the loaded artifacts
    Inspect {
        /// Show the mean of each group's points in questionnaire units
        #[arg(long)]
        centroids: bool,
    },

    /// Load the artifacts and check them against the feature schema
    Validate,

    /// List nutrition statuses with their intervention guidance
    Info {
        /// Print the full narrative for each status
        #[arg(long)]
        narrative: bool,
    },

    /// List the accepted answers for every categorical question
    Options,
}

fn init_tracing(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Classify { input, summary } => {
            classify::run(&input, &cli.artifacts, summary, cli.json)
        }
        Commands::Inspect { centroids } => inspect::run(&cli.artifacts, centroids, cli.json),
        Commands::Validate => validate::run(&cli.artifacts, cli.json),
        Commands::Info { narrative } => info::run(narrative, cli.json),
        Commands::Options => options::run(cli.json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
