//! Rendering of the compose manifest and its secrets file.
//!
//! Every function here is pure: the same deployment type and values always
//! produce byte-identical output, and rendering never fails. Missing values
//! fall back to generator defaults or render as empty slots.

mod compose;
mod editor;
mod reverse_proxy;
mod secrets;
mod services;
mod view;

pub use reverse_proxy::{CADDYFILE_FILE_NAME, NGINX_CONFIG_FILE_NAME, ReverseProxyConfig};

use crate::domain::DeploymentType;
use crate::domain::values::ConfigurationState;
use view::ConfigView;

pub const MANIFEST_FILE_NAME: &str = "docker-compose.yml";
pub const SECRETS_FILE_NAME: &str = ".env";

/// Manifest and secrets rendered from one configuration snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
    pub manifest: String,
    pub secrets: String,
}

impl GeneratedOutput {
    /// Whether the secrets file holds any entry beyond its header.
    pub fn has_secrets(&self) -> bool {
        secrets::has_entries(&self.secrets)
    }
}

pub fn generate(deployment: DeploymentType, values: &ConfigurationState) -> GeneratedOutput {
    let view = ConfigView::new(values);
    let output =
        GeneratedOutput { manifest: compose::compose(deployment, view), secrets: secrets::secrets_file(view) };
    tracing::debug!(
        deployment = %deployment,
        manifest_bytes = output.manifest.len(),
        has_secrets = output.has_secrets(),
        "rendered compose manifest"
    );
    output
}

/// The reverse-proxy file the manifest expects next to it, for the external
/// web server types.
pub fn reverse_proxy_config(
    deployment: DeploymentType,
    values: &ConfigurationState,
) -> Option<ReverseProxyConfig> {
    let view = ConfigView::new(values);
    match deployment {
        DeploymentType::ExternalNginx => Some(reverse_proxy::nginx_config(view)),
        DeploymentType::ExternalCaddy => Some(reverse_proxy::caddyfile(view)),
        _ => None,
    }
}
