//! CLI Adapter.

mod collaborators;
mod list;
mod run;

use clap::{ArgAction, Parser, Subcommand};

use crate::app::logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "gottcha-nf")]
#[command(version)]
#[command(
    about = "Launch the GOTTCHA2 Nextflow pipeline with validated parameters",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Decrease log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    quiet: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all available Nextflow profiles
    ListProfiles,
    /// List all pipeline parameters and their defaults
    ListParams,
    /// Build and, after confirmation, execute a Nextflow run command
    #[clap(visible_alias = "r")]
    Run(run::RunArgs),
    /// Upload a results table to a LabKey list
    LabkeyUpload(collaborators::UploadArgs),
    /// Download a reference source URL or validate a local file path
    ResolveSource(collaborators::ResolveArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet);

    let result: Result<i32, AppError> = match cli.command {
        Commands::ListProfiles => list::run_list_profiles().map(|_| 0),
        Commands::ListParams => list::run_list_params().map(|_| 0),
        Commands::Run(args) => run::run_pipeline(args),
        Commands::LabkeyUpload(args) => collaborators::run_upload(args).map(|_| 0),
        Commands::ResolveSource(args) => collaborators::run_resolve(args).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
