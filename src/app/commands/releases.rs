//! Latest published version of each release channel.

use crate::domain::release::parse_version;
use crate::domain::{ReleaseChannel, ReleaseInfo, ReleaseVersion};
use crate::ports::ReleaseSource;

/// Query every channel. A failing channel is reported as unreachable and
/// does not affect the others.
pub fn execute(source: &impl ReleaseSource) -> Vec<ReleaseInfo> {
    ReleaseChannel::ALL
        .iter()
        .map(|&channel| {
            let version = match source.fetch_version_config(channel) {
                Ok(body) => parse_version(channel, &body),
                Err(err) => {
                    tracing::warn!(channel = channel.name(), error = %err, "release lookup failed");
                    ReleaseVersion::Unreachable
                }
            };
            ReleaseInfo { channel, version }
        })
        .collect()
}
