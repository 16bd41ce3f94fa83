pub mod deployment;
pub mod error;
pub mod manifest;
pub mod release;
pub mod schema;
pub mod session;
pub mod token;
pub mod values;

pub use deployment::DeploymentType;
pub use error::AppError;
pub use manifest::{GeneratedOutput, MANIFEST_FILE_NAME, ReverseProxyConfig, SECRETS_FILE_NAME};
pub use release::{ReleaseChannel, ReleaseInfo, ReleaseVersion};
pub use session::WizardSession;
pub use token::{DEFAULT_TOKEN_LENGTH, SecretToken, TokenStrength, generate_token};
pub use values::{ConfigurationState, FieldValue};
