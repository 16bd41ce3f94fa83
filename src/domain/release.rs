//! Published release channels of M3U Editor and their version metadata.

use std::fmt;

use regex::Regex;

/// Raw-content root the channel branches are read from.
pub const DEFAULT_RELEASE_BASE_URL: &str = "https://raw.githubusercontent.com/m3ue/m3u-editor/refs/heads";

/// Path of the PHP config file carrying the version strings, relative to a branch.
pub const VERSION_CONFIG_PATH: &str = "config/dev.php";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseChannel {
    Production,
    Development,
    Experimental,
}

impl ReleaseChannel {
    pub const ALL: [ReleaseChannel; 3] =
        [ReleaseChannel::Production, ReleaseChannel::Development, ReleaseChannel::Experimental];

    pub fn name(&self) -> &'static str {
        match self {
            ReleaseChannel::Production => "Production",
            ReleaseChannel::Development => "Development",
            ReleaseChannel::Experimental => "Experimental",
        }
    }

    pub fn branch(&self) -> &'static str {
        match self {
            ReleaseChannel::Production => "master",
            ReleaseChannel::Development => "dev",
            ReleaseChannel::Experimental => "experimental",
        }
    }

    /// Key of the version entry in the branch's config file.
    pub fn version_field(&self) -> &'static str {
        match self {
            ReleaseChannel::Production => "version",
            ReleaseChannel::Development => "dev_version",
            ReleaseChannel::Experimental => "experimental_version",
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            ReleaseChannel::Production => "stable",
            ReleaseChannel::Development => "beta",
            ReleaseChannel::Experimental => "experimental",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReleaseChannel::Production => "Stable, production-ready release with all tested features",
            ReleaseChannel::Development => "Latest development build with new features and improvements",
            ReleaseChannel::Experimental => {
                "Cutting-edge experimental features (use with caution) -- There be dragons!"
            }
        }
    }

    pub fn branch_url(&self) -> String {
        format!("https://github.com/m3ue/m3u-editor/tree/{}", self.branch())
    }
}

impl fmt::Display for ReleaseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What is known about a channel's current version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseVersion {
    Found(String),
    /// The config file was fetched but holds no matching entry.
    NotAvailable,
    /// The config file could not be fetched.
    Unreachable,
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseVersion::Found(version) => write!(f, "v{version}"),
            ReleaseVersion::NotAvailable => f.write_str("N/A"),
            ReleaseVersion::Unreachable => f.write_str("Error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    pub channel: ReleaseChannel,
    pub version: ReleaseVersion,
}

/// Extract the channel's version from the body of its config file.
pub fn parse_version(channel: ReleaseChannel, body: &str) -> ReleaseVersion {
    let pattern = format!(r"'{}'\s*=>\s*'([^']+)'", regex::escape(channel.version_field()));
    Regex::new(&pattern)
        .ok()
        .and_then(|re| re.captures(body))
        .and_then(|captures| captures.get(1))
        .map(|m| ReleaseVersion::Found(m.as_str().to_string()))
        .unwrap_or(ReleaseVersion::NotAvailable)
}
