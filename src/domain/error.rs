use std::io;

use thiserror::Error;

/// Library-wide error type for m3u-compose operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Deployment type identifier is not one of the known variants.
    #[error(
        "Unknown deployment type '{0}': must be one of modular, aio, vpn, external-nginx, external-caddy"
    )]
    UnknownDeploymentType(String),

    /// Field name does not exist in the configuration schema.
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    /// Value does not fit the field's kind.
    #[error("Invalid value '{value}' for field '{field}': {reason}")]
    InvalidFieldValue { field: String, value: String, reason: String },

    /// Override argument is not in `NAME=VALUE` form.
    #[error("Invalid override '{0}': expected NAME=VALUE")]
    InvalidOverride(String),

    /// Values file has an extension we cannot parse.
    #[error("Unsupported values file '{0}': expected .toml, .yaml, .yml or .json")]
    UnsupportedValuesFormat(String),

    /// Values file could not be parsed.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Required fields were left empty and strict mode was requested.
    #[error("Missing required field(s): {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),

    /// Interactive prompt failed or was interrupted.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Release metadata could not be fetched.
    #[error("Failed to fetch {channel} release metadata: {message}")]
    ReleaseFetch { channel: String, message: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that classify failures.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::UnknownDeploymentType(_)
            | AppError::InvalidFieldValue { .. }
            | AppError::InvalidOverride(_)
            | AppError::UnsupportedValuesFormat(_)
            | AppError::ParseError { .. }
            | AppError::MissingRequiredFields(_) => io::ErrorKind::InvalidInput,
            AppError::UnknownField(_) => io::ErrorKind::NotFound,
            AppError::Prompt(_) => io::ErrorKind::Interrupted,
            AppError::ReleaseFetch { .. } => io::ErrorKind::Other,
        }
    }
}
