//! `run` subcommand: options to run request, then compile and gate.

use clap::Args;

use crate::app::api;
use crate::domain::catalog::{ILLUMINA_FASTQ_DIR, NANOPORE_FASTQ_DIR, REF_MMI};
use crate::domain::{AppError, ExecutionOutcome, Profile, RunRequest};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Nextflow profile to use
    #[arg(short = 'r', long, default_value = "containerless", value_parser = parse_profile)]
    profile: Profile,
    /// Path to an additional Nextflow configuration file
    #[arg(short, long)]
    config: Option<String>,
    /// Path to an additional Nextflow parameters file
    #[arg(short, long)]
    params_file: Option<String>,
    /// Illumina FASTQ directory
    #[arg(long)]
    illumina_fastq_dir: Option<String>,
    /// Nanopore FASTQ directory
    #[arg(long)]
    nanopore_fastq_dir: Option<String>,
    /// Reference minimap2 index (required)
    #[arg(long)]
    ref_mmi: Option<String>,
    /// Cache directory for the reference index
    #[arg(long)]
    ref_mmi_cache: Option<String>,
    /// Number of CPUs for GOTTCHA2
    #[arg(long)]
    gottcha2_cpus: Option<u32>,
    /// Minimum coverage as a proportion of the signature
    #[arg(long)]
    min_cov: Option<f64>,
    /// Minimum number of mapped reads for a hit
    #[arg(long)]
    min_reads: Option<u32>,
    /// Minimum signature bases present for a strain to count
    #[arg(long)]
    min_len: Option<u32>,
    /// Maximum estimated z-score for the depth of the mapped region
    #[arg(long)]
    max_z_score: Option<u32>,
    /// Match factor for read assignment
    #[arg(long)]
    match_factor: Option<f64>,
    /// Results directory
    #[arg(long)]
    results: Option<String>,
    /// Setup results directory
    #[arg(long)]
    setup_results: Option<String>,
    /// GOTTCHA2 results directory
    #[arg(long)]
    gottcha_results: Option<String>,
    /// GOTTCHA2 SAM files directory
    #[arg(long)]
    gottcha_sam: Option<String>,
    /// GOTTCHA2 stats TSV directory
    #[arg(long)]
    gottcha_stats: Option<String>,
    /// GOTTCHA2 representative sequences directory
    #[arg(long)]
    gottcha_fasta: Option<String>,
    /// Print the command without prompting or running it
    #[arg(long)]
    dry_run: bool,
}

fn parse_profile(value: &str) -> Result<Profile, String> {
    value.parse().map_err(|e: AppError| e.to_string())
}

impl RunArgs {
    fn into_request(self) -> Result<RunRequest, AppError> {
        let mut request = RunRequest::new(self.profile);
        request.config = self.config;
        request.params_file = self.params_file;

        request.set_opt(ILLUMINA_FASTQ_DIR, self.illumina_fastq_dir)?;
        request.set_opt(NANOPORE_FASTQ_DIR, self.nanopore_fastq_dir)?;
        request.set_opt(REF_MMI, self.ref_mmi)?;
        request.set_opt("ref_mmi_cache", self.ref_mmi_cache)?;
        request.set_opt("gottcha2_cpus", self.gottcha2_cpus)?;
        request.set_opt("min_cov", self.min_cov)?;
        request.set_opt("min_reads", self.min_reads)?;
        request.set_opt("min_len", self.min_len)?;
        request.set_opt("max_Zscore", self.max_z_score)?;
        request.set_opt("match_factor", self.match_factor)?;
        request.set_opt("results", self.results)?;
        request.set_opt("setup_results", self.setup_results)?;
        request.set_opt("gottcha_results", self.gottcha_results)?;
        request.set_opt("gottcha_sam", self.gottcha_sam)?;
        request.set_opt("gottcha_stats", self.gottcha_stats)?;
        request.set_opt("gottcha_fasta", self.gottcha_fasta)?;
        Ok(request)
    }
}

pub fn run_pipeline(args: RunArgs) -> Result<i32, AppError> {
    let config = api::load_config()?;
    let dry_run = args.dry_run;
    let request = args.into_request()?;
    let command = api::compile(&config.runner, &request)?;

    if dry_run {
        println!("Constructed Nextflow command:");
        println!("{}", command);
        return Ok(0);
    }

    let outcome = api::confirm_and_run(command);
    match &outcome {
        ExecutionOutcome::Succeeded => println!("✅ Nextflow run completed"),
        ExecutionOutcome::Cancelled => println!("Command execution cancelled."),
        ExecutionOutcome::Failed(failure) => eprintln!("Command failed with error:\n\n{}", failure),
    }
    Ok(outcome.exit_code())
}
