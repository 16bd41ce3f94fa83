//! m3u-compose: render docker-compose.yml and .env files for M3U Editor deployments.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{GenerateOptions, GenerateOutcome};
pub use domain::{AppError, ConfigurationState, DeploymentType, FieldValue, GeneratedOutput, WizardSession};
