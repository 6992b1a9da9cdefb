//! `labkey-upload` and `resolve-source` subcommands.

use std::path::PathBuf;

use clap::Args;

use crate::app::api::{self, Resolution, UploadOptions};
use crate::domain::AppError;

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Path to the CSV/TSV file containing the data to upload
    table: PathBuf,
    /// Base URL of the LabKey server (e.g. https://labkey.example.org)
    #[arg(long)]
    labkey_url: String,
    /// LabKey container path where the list is located
    #[arg(long)]
    container: String,
    /// Name of the LabKey list (query) to update
    #[arg(long)]
    query_name: String,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// URL or local file path
    source: String,
    /// Where to save a downloaded file (defaults to the URL's file name)
    #[arg(long)]
    dest: Option<PathBuf>,
}

pub fn run_upload(args: UploadArgs) -> Result<(), AppError> {
    let config = api::load_config()?;
    let rows = api::upload_results(
        &config,
        UploadOptions {
            table: &args.table,
            labkey_url: &args.labkey_url,
            container: &args.container,
            query_name: &args.query_name,
        },
    )?;
    println!("✅ Uploaded {} row(s) to {}", rows, args.query_name);
    Ok(())
}

pub fn run_resolve(args: ResolveArgs) -> Result<(), AppError> {
    let config = api::load_config()?;
    match api::resolve_source(&config, &args.source, args.dest.as_deref())? {
        Resolution::Downloaded { url, dest, .. } => {
            println!("Downloaded file from {} to {}", url, dest.display());
        }
        Resolution::Local(_) => println!("File path '{}' is valid.", args.source),
    }
    Ok(())
}
