use crate::app::api;
use crate::domain::AppError;

pub fn run_list_profiles() -> Result<(), AppError> {
    println!("Available Nextflow Profiles:");
    for profile in api::profiles() {
        println!(" - {}", profile);
    }
    Ok(())
}

pub fn run_list_params() -> Result<(), AppError> {
    println!("Available Nextflow Parameters:");
    for spec in api::parameters() {
        println!(" - {} = {}", spec.name, spec.default);
    }
    Ok(())
}
