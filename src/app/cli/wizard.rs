//! Wizard command implementation.

use std::path::PathBuf;

use crate::app::api;
use crate::domain::{AppError, DeploymentType, SECRETS_FILE_NAME};

pub fn run_wizard(
    deployment: Option<DeploymentType>,
    output_dir: Option<PathBuf>,
) -> Result<(), AppError> {
    let outcome = api::wizard(deployment)?;

    if let Some(dir) = output_dir {
        return super::generate::write_and_report(&outcome, dir);
    }

    print!("{}", outcome.output.manifest);
    if outcome.output.has_secrets() {
        println!("\n# {}\n{}", SECRETS_FILE_NAME, outcome.output.secrets);
    }
    Ok(())
}
