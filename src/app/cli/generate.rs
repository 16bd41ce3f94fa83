//! Generate command implementation.

use std::path::PathBuf;

use crate::app::api::{self, GenerateOptions, GenerateOutcome};
use crate::domain::{AppError, DeploymentType};

pub struct GenerateArgs {
    pub deployment: DeploymentType,
    pub values_file: Option<PathBuf>,
    pub overrides: Vec<String>,
    pub output_dir: Option<PathBuf>,
    pub secrets: bool,
    pub strict: bool,
}

pub fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let options = GenerateOptions {
        deployment: args.deployment,
        values_file: args.values_file,
        overrides: args.overrides,
        strict: args.strict,
    };
    let outcome = api::generate(&options)?;

    match args.output_dir {
        Some(dir) => write_and_report(&outcome, dir),
        None if args.secrets => {
            println!("{}", outcome.output.secrets);
            Ok(())
        }
        None => {
            print!("{}", outcome.output.manifest);
            Ok(())
        }
    }
}

pub(super) fn write_and_report(outcome: &GenerateOutcome, dir: PathBuf) -> Result<(), AppError> {
    let written = api::write_outputs(outcome, &dir)?;
    for path in &written {
        println!("✅ Wrote {}", path.display());
    }
    Ok(())
}
