use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Deployment topologies the wizard can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum DeploymentType {
    /// Separate editor and proxy containers.
    #[default]
    Modular,
    /// Everything embedded in the editor container.
    AllInOne,
    /// Modular deployment routed through a Gluetun VPN gateway.
    Vpn,
    /// Editor served by an external Nginx over PHP-FPM.
    ExternalNginx,
    /// Editor served by an external Caddy over PHP-FPM.
    ExternalCaddy,
}

impl DeploymentType {
    /// All deployment types in display order.
    pub const ALL: [DeploymentType; 5] = [
        DeploymentType::Modular,
        DeploymentType::AllInOne,
        DeploymentType::Vpn,
        DeploymentType::ExternalNginx,
        DeploymentType::ExternalCaddy,
    ];

    /// Stable identifier used on the command line and in values files.
    pub fn id(&self) -> &'static str {
        match self {
            DeploymentType::Modular => "modular",
            DeploymentType::AllInOne => "aio",
            DeploymentType::Vpn => "vpn",
            DeploymentType::ExternalNginx => "external-nginx",
            DeploymentType::ExternalCaddy => "external-caddy",
        }
    }

    /// Parse a deployment type from its identifier.
    pub fn from_id(id: &str) -> Option<DeploymentType> {
        match id.trim().to_lowercase().as_str() {
            "modular" => Some(DeploymentType::Modular),
            "aio" | "all-in-one" => Some(DeploymentType::AllInOne),
            "vpn" => Some(DeploymentType::Vpn),
            "external-nginx" | "nginx" => Some(DeploymentType::ExternalNginx),
            "external-caddy" | "caddy" => Some(DeploymentType::ExternalCaddy),
            _ => None,
        }
    }

    /// Human-readable display name.
    pub fn name(&self) -> &'static str {
        match self {
            DeploymentType::Modular => "Modular (Recommended)",
            DeploymentType::AllInOne => "All-in-One",
            DeploymentType::Vpn => "VPN (Gluetun)",
            DeploymentType::ExternalNginx => "External (Nginx)",
            DeploymentType::ExternalCaddy => "External (Caddy)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DeploymentType::Modular => {
                "Separate containers for m3u-editor and m3u-proxy. Best for production."
            }
            DeploymentType::AllInOne => "Single container for quick testing and development.",
            DeploymentType::Vpn => "Modular deployment with VPN protection via Gluetun.",
            DeploymentType::ExternalNginx => "Fully modular with external Nginx reverse proxy.",
            DeploymentType::ExternalCaddy => {
                "Fully modular with Caddy reverse proxy and automatic HTTPS."
            }
        }
    }

    pub fn recommended(&self) -> bool {
        matches!(self, DeploymentType::Modular)
    }

    pub fn features(&self) -> &'static [&'static str] {
        match self {
            DeploymentType::Modular => &[
                "Hardware acceleration support",
                "Independent service scaling",
                "Redis-based stream pooling",
                "Easy to manage",
            ],
            DeploymentType::AllInOne => {
                &["Quick setup", "Minimal configuration", "Good for testing"]
            }
            DeploymentType::Vpn => &[
                "All modular benefits",
                "VPN protection for streaming",
                "Multiple VPN provider support",
            ],
            DeploymentType::ExternalNginx => &[
                "Complete service isolation",
                "Independent scaling",
                "Custom Nginx configuration",
            ],
            DeploymentType::ExternalCaddy => {
                &["Complete service isolation", "Automatic HTTPS", "Simple configuration"]
            }
        }
    }

    pub fn limitations(&self) -> &'static [&'static str] {
        match self {
            DeploymentType::AllInOne => &["No hardware acceleration"],
            _ => &[],
        }
    }

    /// Whether the editor is fronted by an external web server over PHP-FPM.
    pub fn uses_external_web_server(&self) -> bool {
        matches!(self, DeploymentType::ExternalNginx | DeploymentType::ExternalCaddy)
    }
}

impl fmt::Display for DeploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for DeploymentType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeploymentType::from_id(s).ok_or_else(|| AppError::UnknownDeploymentType(s.to_string()))
    }
}
