//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together adapters and
//! command execution.

use std::path::{Path, PathBuf};

use crate::adapters::dialoguer_prompter::DialoguerPrompter;
use crate::adapters::release_http::HttpReleaseSource;
use crate::app::commands::{defaults, generate, releases, schema, wizard};

pub use crate::adapters::values_file::ValuesFormat;
pub use crate::app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use crate::app::commands::schema::{FieldReport, SectionReport};
pub use crate::domain::{AppError, DeploymentType, ReleaseInfo, SecretToken};

/// Deployment types in presentation order.
pub fn deployment_types() -> &'static [DeploymentType] {
    &DeploymentType::ALL
}

/// Sections and fields visible for a deployment type once the given values apply.
pub fn schema(
    deployment: DeploymentType,
    values_file: Option<&Path>,
    overrides: &[String],
) -> Result<Vec<SectionReport>, AppError> {
    let session = generate::build_session(deployment, values_file, overrides)?;
    Ok(schema::execute(&session))
}

/// Default values of a deployment type rendered as a values file.
pub fn defaults(deployment: DeploymentType, format: ValuesFormat) -> Result<String, AppError> {
    defaults::execute(deployment, format)
}

pub fn generate(options: &GenerateOptions) -> Result<GenerateOutcome, AppError> {
    generate::execute(options)
}

/// Write generated files into `dir`, creating it when needed.
pub fn write_outputs(outcome: &GenerateOutcome, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    generate::write_outputs(outcome, dir)
}

/// Run the interactive wizard on the current terminal.
pub fn wizard(deployment: Option<DeploymentType>) -> Result<GenerateOutcome, AppError> {
    let mut prompter = DialoguerPrompter::for_terminal()?;
    let session = wizard::execute(&mut prompter, deployment)?;
    generate::outcome_for(&session, false)
}

pub fn token(length: usize) -> SecretToken {
    crate::domain::generate_token(length)
}

/// Latest version of each release channel. `base_url` defaults to the
/// upstream repository.
pub fn releases(base_url: Option<&str>) -> Result<Vec<ReleaseInfo>, AppError> {
    let base_url = match base_url {
        Some(raw) => HttpReleaseSource::parse_base_url(raw)?,
        None => HttpReleaseSource::default_base_url()?,
    };
    let source = HttpReleaseSource::new(base_url)?;
    Ok(releases::execute(&source))
}
