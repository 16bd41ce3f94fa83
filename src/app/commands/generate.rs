//! Non-interactive generation from defaults, a values file and overrides.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::values_file::{load_values_file, parse_override};
use crate::domain::manifest::{MANIFEST_FILE_NAME, SECRETS_FILE_NAME};
use crate::domain::{AppError, DeploymentType, GeneratedOutput, ReverseProxyConfig, WizardSession};

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub deployment: DeploymentType,
    pub values_file: Option<PathBuf>,
    /// Raw `NAME=VALUE` overrides, applied after the values file.
    pub overrides: Vec<String>,
    /// Fail instead of warning when required fields are empty.
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub output: GeneratedOutput,
    pub reverse_proxy: Option<ReverseProxyConfig>,
    pub missing_required: Vec<&'static str>,
}

/// Session seeded with the deployment type's defaults, then the values file,
/// then the overrides.
pub fn build_session(
    deployment: DeploymentType,
    values_file: Option<&Path>,
    overrides: &[String],
) -> Result<WizardSession, AppError> {
    let mut session = WizardSession::new(deployment);

    if let Some(path) = values_file {
        for (name, raw) in load_values_file(path)? {
            match raw {
                Some(raw) => session.set(&name, &raw)?,
                None => session.clear(&name)?,
            }
        }
    }
    for raw in overrides {
        let (name, value) = parse_override(raw)?;
        session.set(&name, &value)?;
    }

    Ok(session)
}

pub fn execute(options: &GenerateOptions) -> Result<GenerateOutcome, AppError> {
    let session =
        build_session(options.deployment, options.values_file.as_deref(), &options.overrides)?;
    outcome_for(&session, options.strict)
}

/// Render a session, enforcing or reporting required fields.
pub fn outcome_for(session: &WizardSession, strict: bool) -> Result<GenerateOutcome, AppError> {
    let missing_required = session.missing_required();
    if !missing_required.is_empty() {
        if strict {
            return Err(AppError::MissingRequiredFields(
                missing_required.iter().map(|name| name.to_string()).collect(),
            ));
        }
        tracing::warn!(fields = %missing_required.join(", "), "required fields are empty");
    }

    Ok(GenerateOutcome {
        output: session.output(),
        reverse_proxy: session.reverse_proxy_config(),
        missing_required,
    })
}

/// Write the manifest, the secrets file when it has entries, and the
/// reverse-proxy config into `dir`. Returns the written paths.
pub fn write_outputs(outcome: &GenerateOutcome, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let manifest_path = dir.join(MANIFEST_FILE_NAME);
    fs::write(&manifest_path, &outcome.output.manifest)?;
    written.push(manifest_path);

    if outcome.output.has_secrets() {
        let secrets_path = dir.join(SECRETS_FILE_NAME);
        fs::write(&secrets_path, format!("{}\n", outcome.output.secrets))?;
        written.push(secrets_path);
    }

    if let Some(config) = &outcome.reverse_proxy {
        let config_path = dir.join(config.file_name);
        fs::write(&config_path, &config.contents)?;
        written.push(config_path);
    }

    tracing::info!(dir = %dir.display(), files = written.len(), "wrote generated files");
    Ok(written)
}
